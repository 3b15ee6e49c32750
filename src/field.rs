//! 字段条件：一个列名、一个比较运算符、一个值，对应一条赋值或过滤条件。

use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 比较运算符，默认 `=`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Equal,
    LessThan,
    GreaterEqualThan,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::LessThan => "<",
            Self::GreaterEqualThan => ">=",
        }
    }
}

/// 字段值：单值或列表值，列表值展开为 `IN (?,?,…)`。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Single(SqlValue),
    List(Vec<SqlValue>),
}

impl<T: Into<SqlValue>> From<T> for FieldValue {
    fn from(v: T) -> Self {
        Self::Single(v.into())
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for FieldValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for FieldValue {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// 一条字段条件。结构上恒定只持有一个列名，不存在多列条目可被破坏的状态。
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    column: String,
    operator: Operator,
    value: FieldValue,
}

impl Field {
    pub fn new(column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            column: column.into(),
            operator: Operator::Equal,
            value: value.into(),
        }
    }

    /// Lt：把比较运算符改为 `<`。
    pub fn lt(mut self) -> Self {
        self.operator = Operator::LessThan;
        self
    }

    /// Gte：把比较运算符改为 `>=`。
    pub fn gte(mut self) -> Self {
        self.operator = Operator::GreaterEqualThan;
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// 渲染为一个条件片段并追加参数：
    /// 单值输出 `col <op> ?`；列表值输出 `col IN (?,?,…)`，逐元素追加参数且忽略运算符。
    pub(crate) fn write_condition(&self, buf: &mut StringBuilder, args: &mut Vec<SqlValue>) {
        match &self.value {
            FieldValue::List(items) => {
                buf.write_str(&self.column);
                buf.write_str(" IN (");
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        buf.write_char(',');
                    }
                    buf.write_char('?');
                    args.push(v.clone());
                }
                buf.write_char(')');
            }
            FieldValue::Single(v) => {
                buf.write_str(&self.column);
                buf.write_char(' ');
                buf.write_str(self.operator.as_str());
                buf.write_str(" ?");
                args.push(v.clone());
            }
        }
    }
}
