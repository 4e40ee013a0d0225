//! The operation registry for cxcalc.
//!
//! This crate maps the three selectable operations to pure functions over
//! [`Complex`] operands. [`OperationKind`] is the tagged selection,
//! [`evaluate`] dispatches it, and [`Calculator`] keeps an active operation
//! for callers that switch between them.

pub use cxcalc_types::{Complex, ParseComplexError};

pub mod built_in;
pub mod calculator;
pub mod error;
pub mod operation;
pub mod registry;

pub use calculator::Calculator;
pub use error::CalculationError;
pub use operation::OperationKind;
pub use registry::{BinaryOp, evaluate, evaluate_label};
