//! SQL 参数值类型。

use std::borrow::Cow;
use std::fmt;

use time::macros::format_description;

/// SQL 参数值：封闭的标量联合，渲染处可穷尽匹配，不支持的类型在编译期报错。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(Cow<'static, str>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

/// 诊断用的字符串视图：字符串原样输出，数字按十进制，`Null` 输出空串。
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::DateTime(v) => f.write_str(&format_datetime(v)),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS.ffffff`，不带引号；插值处自行加引号。
pub(crate) fn format_datetime(dt: &time::OffsetDateTime) -> String {
    let fmt = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
    );
    dt.format(&fmt).expect("datetime format")
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<isize> for SqlValue {
    fn from(v: isize) -> Self {
        Self::I64(v as i64)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}
