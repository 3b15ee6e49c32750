//! SQL 插值：将 `?` 占位符替换为参数字面量，仅用于日志与调试输出。
//!
//! 安全警告：插值永远不如预编译参数安全；不要把插值结果交给驱动执行。

use crate::value::{SqlValue, format_datetime};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InterpolateError {
    #[error("not enough args when interpolating")]
    MissingArgs,
}

/// 把 `sql` 中引号（`'`、`"`、`` ` ``）之外的每个 `?` 替换为对应参数的字面量。
/// 参数多于占位符时，多余的参数被忽略；少于占位符时报 `MissingArgs`。
pub fn interpolate(sql: &str, args: &[SqlValue]) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(sql.len() + args.len() * 20);
    let mut quote: Option<char> = None;
    let mut escaping = false;
    let mut arg_idx = 0usize;

    for c in sql.chars() {
        if escaping {
            out.push(c);
            escaping = false;
            continue;
        }

        match c {
            '\\' if quote.is_some() => {
                out.push(c);
                escaping = true;
            }
            '\'' | '"' | '`' => {
                if quote == Some(c) {
                    quote = None;
                } else if quote.is_none() {
                    quote = Some(c);
                }
                out.push(c);
            }
            '?' if quote.is_none() => {
                if arg_idx >= args.len() {
                    return Err(InterpolateError::MissingArgs);
                }
                encode_value(&mut out, &args[arg_idx]);
                arg_idx += 1;
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn encode_value(out: &mut String, v: &SqlValue) {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::String(s) => quote_string(out, s),
        SqlValue::DateTime(dt) => {
            out.push('\'');
            out.push_str(&format_datetime(dt));
            out.push('\'');
        }
    }
}

fn quote_string(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\u{0000}' => out.push_str("\\0"),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{001a}' => out.push_str("\\Z"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}
