//! cxcalc Types
//!
//! This crate defines the value types shared by the cxcalc crates
//! (currently `cxcalc-calculator` and `cxcalc-core`). Keeping `Complex` and its
//! parser here lets the operation registry and the interaction controller agree
//! on one operand representation without depending on each other.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]

mod complex;
mod parse;

pub use complex::Complex;
pub use parse::ParseComplexError;
