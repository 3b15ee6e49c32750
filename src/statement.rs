//! Statement：参数化 SQL 语句构建器（SELECT / COUNT / INSERT / UPDATE）。

use crate::field::Field;
use crate::macros::{IntoFields, IntoStrings, collect_into_fields, collect_into_strings};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 生成阶段唯一的错误：凑不出任何可识别的语句形态。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid SQL statement")]
    InvalidStatement,
}

/// 参数化 SQL 语句构建器。
///
/// 各子句片段独立累积；`generate` 按固定优先级选取语句形态：
/// INSERT → UPDATE+SET → SELECT/COUNT+FROM，否则返回错误。
/// 参数按子句分组收集，生成时按子句在语句中的出现顺序合并，
/// 因此无论链式调用顺序如何，参数序列都与 `?` 占位符从左到右一一对应。
///
/// 并发契约：无内部同步，同一实例不能被并发调用方共享。
#[derive(Debug, Default, Clone)]
pub struct Statement {
    select_clause: Option<String>,
    from_clause: Option<String>,
    where_clause: Option<String>,
    insert_clause: Option<String>,
    update_clause: Option<String>,
    set_clause: Option<String>,
    offset_clause: Option<String>,
    limit_clause: Option<String>,

    insert_args: Vec<SqlValue>,
    set_args: Vec<SqlValue>,
    where_args: Vec<SqlValue>,
}

/// Count：构建 `SELECT COUNT(*) AS <alias>` 投影。
pub fn count(alias: impl Into<String>) -> Statement {
    Statement::count(alias)
}

/// Select：构建投影子句；空列名列表投影 `*`。
pub fn select<T: IntoStrings>(cols: T) -> Statement {
    Statement::select(cols)
}

/// Update：构建 `UPDATE <table>` 子句。
pub fn update(table: impl Into<String>) -> Statement {
    Statement::update(table)
}

/// Insert：一次性构建完整 INSERT 语句；表名为空或无字段时不产生任何子句，
/// 后续 `generate` 会以无效语句收场。
pub fn insert<C, V, I>(table: impl Into<String>, fields: I) -> Statement
where
    C: Into<String>,
    V: Into<SqlValue>,
    I: IntoIterator<Item = (C, V)>,
{
    Statement::insert(table, fields)
}

impl Statement {
    pub fn count(alias: impl Into<String>) -> Self {
        let mut buf = StringBuilder::new();
        buf.write_str("SELECT COUNT(*) AS ");
        buf.write_str(&alias.into());
        Self {
            select_clause: Some(buf.into_string()),
            ..Self::default()
        }
    }

    pub fn select<T: IntoStrings>(cols: T) -> Self {
        let cols = collect_into_strings(cols);
        let mut buf = StringBuilder::new();
        buf.write_str("SELECT ");
        if cols.is_empty() {
            buf.write_char('*');
        } else {
            buf.write_str(&cols.join(", "));
        }
        Self {
            select_clause: Some(buf.into_string()),
            ..Self::default()
        }
    }

    pub fn update(table: impl Into<String>) -> Self {
        let mut buf = StringBuilder::new();
        buf.write_str("UPDATE ");
        buf.write_str(&table.into());
        Self {
            update_clause: Some(buf.into_string()),
            ..Self::default()
        }
    }

    /// 插入字段是「列名 → 标量值」对，不携带运算符，也不接受列表值；
    /// 列名与参数按传入顺序对位。
    pub fn insert<C, V, I>(table: impl Into<String>, fields: I) -> Self
    where
        C: Into<String>,
        V: Into<SqlValue>,
        I: IntoIterator<Item = (C, V)>,
    {
        let table = table.into();
        let mut cols = Vec::new();
        let mut args = Vec::new();
        for (c, v) in fields {
            cols.push(c.into());
            args.push(v.into());
        }
        if table.is_empty() || cols.is_empty() {
            return Self::default();
        }

        let mut buf = StringBuilder::new();
        buf.write_str("INSERT INTO ");
        buf.write_str(&table);
        buf.write_str(" ( ");
        buf.write_str(&cols.join(", "));
        buf.write_str(" ) VALUES ( ");
        buf.write_str(&vec!["?"; cols.len()].join(", "));
        buf.write_str(" )");
        Self {
            insert_clause: Some(buf.into_string()),
            insert_args: args,
            ..Self::default()
        }
    }

    /// Set：渲染 `SET a = ?, b >= ?, …`，分隔符 `, `；空输入为 no-op。
    /// 重复调用时后一次调用整体覆盖前一次（片段与参数一起换掉）。
    pub fn set<T: IntoFields>(&mut self, fields: T) -> &mut Self {
        let fields = collect_into_fields(fields);
        if fields.is_empty() {
            return self;
        }

        let mut buf = StringBuilder::new();
        buf.write_str("SET ");
        let mut args = Vec::new();
        write_conditions(&mut buf, &mut args, &fields, ", ");
        self.set_clause = Some(buf.into_string());
        self.set_args = args;
        self
    }

    /// From：渲染 `FROM <table>`；表名为空时为 no-op。
    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        let table = table.into();
        if table.is_empty() {
            return self;
        }

        let mut buf = StringBuilder::new();
        buf.write_str("FROM ");
        buf.write_str(&table);
        self.from_clause = Some(buf.into_string());
        self
    }

    /// Where：渲染以 ` AND ` 连接的条件；空输入为 no-op。
    /// 重复调用时后一次调用整体覆盖前一次（片段与参数一起换掉）。
    pub fn where_<T: IntoFields>(&mut self, fields: T) -> &mut Self {
        let fields = collect_into_fields(fields);
        if fields.is_empty() {
            return self;
        }

        let mut buf = StringBuilder::new();
        buf.write_str("WHERE ");
        let mut args = Vec::new();
        write_conditions(&mut buf, &mut args, &fields, " AND ");
        self.where_clause = Some(buf.into_string());
        self.where_args = args;
        self
    }

    /// Offset：以字面量拼入 `OFFSET n`，不产生占位符，也不做范围校验。
    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.offset_clause = Some(format!("OFFSET {offset}"));
        self
    }

    /// Limit：以字面量拼入 `LIMIT n`，不产生占位符，也不做范围校验。
    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.limit_clause = Some(format!("LIMIT {limit}"));
        self
    }

    /// Generate：按固定优先级拼出最终语句与参数序列。
    ///
    /// 1. 有 INSERT 子句：原样返回（INSERT 在构建时即已完整）。
    /// 2. UPDATE 与 SET 俱全：`UPDATE … SET …`，有 WHERE 则追加；参数为 set 后接 where。
    /// 3. SELECT/COUNT 与 FROM 俱全：依序追加 WHERE、OFFSET、LIMIT 中已有的片段。
    /// 4. 否则返回 `InvalidStatement`。
    ///
    /// 不做进一步校验；不修改自身，重复调用得到相同结果。
    pub fn generate(&self) -> Result<(String, Vec<SqlValue>), GenerateError> {
        if let Some(insert) = &self.insert_clause {
            return Ok((insert.clone(), self.insert_args.clone()));
        }

        if let (Some(update), Some(set)) = (&self.update_clause, &self.set_clause) {
            let mut buf = StringBuilder::new();
            buf.write_leading(update);
            buf.write_leading(set);
            if let Some(where_) = &self.where_clause {
                buf.write_leading(where_);
            }
            let mut args = self.set_args.clone();
            args.extend(self.where_args.iter().cloned());
            return Ok((buf.into_string(), args));
        }

        if let (Some(select), Some(from)) = (&self.select_clause, &self.from_clause) {
            let mut buf = StringBuilder::new();
            buf.write_leading(select);
            buf.write_leading(from);
            if let Some(where_) = &self.where_clause {
                buf.write_leading(where_);
            }
            if let Some(offset) = &self.offset_clause {
                buf.write_leading(offset);
            }
            if let Some(limit) = &self.limit_clause {
                buf.write_leading(limit);
            }
            return Ok((buf.into_string(), self.where_args.clone()));
        }

        Err(GenerateError::InvalidStatement)
    }
}

fn write_conditions(
    buf: &mut StringBuilder,
    args: &mut Vec<SqlValue>,
    fields: &[Field],
    sep: &str,
) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            buf.write_str(sep);
        }
        field.write_condition(buf, args);
    }
}
