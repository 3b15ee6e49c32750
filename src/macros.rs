//! 宏集合：为构建入口与字段类方法提供 Go 式的可变参数调用封装。
//! 通过 `select_stmt!` / `where_fields!` 等宏，可以使用不定长参数而无需手动创建 `Vec`。

use crate::field::Field;

#[doc(hidden)]
#[macro_export]
macro_rules! __collect_strings {
    () => {
        Vec::<String>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = Vec::<String>::new();
        $(
            $crate::extend_into_strings($value, &mut values);
        )*
        values
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __collect_fields {
    () => {
        Vec::<$crate::Field>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = Vec::<$crate::Field>::new();
        $(
            $crate::extend_into_fields($value, &mut values);
        )*
        values
    }};
}

pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl<T, const N: usize> IntoStrings for [T; N]
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

impl<T> IntoStrings for &[T]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.clone().into());
        }
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

pub trait IntoFields {
    fn extend_into_fields(self, dst: &mut Vec<Field>);
}

impl IntoFields for Field {
    fn extend_into_fields(self, dst: &mut Vec<Field>) {
        dst.push(self);
    }
}

impl<const N: usize> IntoFields for [Field; N] {
    fn extend_into_fields(self, dst: &mut Vec<Field>) {
        dst.extend(self);
    }
}

impl IntoFields for &[Field] {
    fn extend_into_fields(self, dst: &mut Vec<Field>) {
        dst.extend_from_slice(self);
    }
}

impl IntoFields for Vec<Field> {
    fn extend_into_fields(self, dst: &mut Vec<Field>) {
        dst.extend(self);
    }
}

#[doc(hidden)]
pub fn extend_into_strings<T>(value: T, dst: &mut Vec<String>)
where
    T: IntoStrings,
{
    value.extend_into_strings(dst);
}

#[doc(hidden)]
pub fn collect_into_strings<T>(value: T) -> Vec<String>
where
    T: IntoStrings,
{
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst
}

#[doc(hidden)]
pub fn extend_into_fields<T>(value: T, dst: &mut Vec<Field>)
where
    T: IntoFields,
{
    value.extend_into_fields(dst);
}

#[doc(hidden)]
pub fn collect_into_fields<T>(value: T) -> Vec<Field>
where
    T: IntoFields,
{
    let mut dst = Vec::new();
    value.extend_into_fields(&mut dst);
    dst
}

/// 为 `Statement::select` 提供 Go 风格的可变参数调用；不给列名时投影 `*`。
#[macro_export]
macro_rules! select_stmt {
    ($($col:expr),* $(,)?) => {
        $crate::Statement::select($crate::__collect_strings!($($col),*))
    };
}
pub use crate::select_stmt;

/// 为 `Statement::insert` 提供 `列 => 值` 形式的可变参数调用。
#[macro_export]
macro_rules! insert_stmt {
    ($table:expr $(,)?) => {
        $crate::Statement::insert($table, Vec::<(&str, $crate::SqlValue)>::new())
    };
    ($table:expr, $($col:expr => $val:expr),+ $(,)?) => {
        $crate::Statement::insert($table, vec![$(($col, $crate::SqlValue::from($val))),+])
    };
}
pub use crate::insert_stmt;

/// 为 `Statement::where_` 提供 Go 风格的可变参数调用。
#[macro_export]
macro_rules! where_fields {
    ($stmt:expr $(, $field:expr)* $(,)?) => {
        $stmt.where_($crate::__collect_fields!($($field),*))
    };
}
pub use crate::where_fields;

/// 为 `Statement::set` 提供 Go 风格的可变参数调用。
#[macro_export]
macro_rules! set_fields {
    ($stmt:expr $(, $field:expr)* $(,)?) => {
        $stmt.set($crate::__collect_fields!($($field),*))
    };
}
pub use crate::set_fields;
