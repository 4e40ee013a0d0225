//! The selectable operations and their user-facing labels

use std::fmt;

use tracing::debug;

use crate::BinaryOp;
use crate::built_in::{add::add, divide::divide, multiply::multiply};

/// The arithmetic operation chosen in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationKind {
    /// `a + b`
    #[default]
    Add,
    /// `a * b`
    Multiply,
    /// `a / b`, fails on a zero divisor
    Divide,
}

impl OperationKind {
    /// All kinds in selector order.
    pub const ALL: [OperationKind; 3] =
        [OperationKind::Add, OperationKind::Multiply, OperationKind::Divide];

    /// The label shown in the selector.
    pub const fn label(self) -> &'static str {
        match self {
            OperationKind::Add => "Addition",
            OperationKind::Multiply => "Multiplication",
            OperationKind::Divide => "Division",
        }
    }

    /// Resolve a selector label. Matching is exact; an unrecognised label
    /// resolves to [`OperationKind::Add`].
    pub fn from_label(label: &str) -> Self {
        match OperationKind::ALL.into_iter().find(|kind| kind.label() == label) {
            Some(kind) => kind,
            None => {
                debug!(label, "unrecognised operation label, falling back to addition");
                OperationKind::Add
            }
        }
    }

    /// The function implementing this operation.
    pub fn function(self) -> BinaryOp {
        match self {
            OperationKind::Add => add,
            OperationKind::Multiply => multiply,
            OperationKind::Divide => divide,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
