//! sql-stmt-builder：流式拼装参数化 SQL 语句（SELECT / COUNT / INSERT / UPDATE），
//! 输出 `?` 占位符语句与按占位符从左到右顺序排列的参数序列。

pub mod field;
pub mod interpolate;
#[cfg(test)]
mod interpolate_tests;
pub mod macros;
pub use crate::macros::*;
#[cfg(test)]
mod macros_tests;
pub mod statement;
pub mod string_builder;
pub mod value;

pub use crate::field::{Field, FieldValue, Operator};
pub use crate::interpolate::{InterpolateError, interpolate};
pub use crate::statement::{GenerateError, Statement, count, insert, select, update};
pub use crate::value::SqlValue;
