//! Built-in binary operations provided by the calculator.
//!
//! Each operation is a plain function with the [`BinaryOp`](crate::BinaryOp)
//! signature so the registry can hold them in a table.

// Never fail
pub mod add;
pub mod multiply;

// Fallible
pub mod divide;
