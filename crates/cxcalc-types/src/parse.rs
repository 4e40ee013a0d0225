use std::str::FromStr;

use thiserror::Error;

use crate::Complex;

/// Returned when operand text is not a complex number literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid complex number: '{input}'")]
pub struct ParseComplexError {
    input: String,
}

impl ParseComplexError {
    /// Create an error for the offending text
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }

    /// The text that failed to parse, exactly as supplied
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses the conventional `re+imj` literal.
///
/// The imaginary suffix may be `j` or `J`. Pure real (`3`), pure imaginary
/// (`4j`, `-j`) and parenthesised (`(1+2j)`) forms are accepted, as are
/// exponents and `inf`/`nan`. Surrounding whitespace is ignored; whitespace
/// inside the literal is not.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseComplexError::new(text);

        let mut literal = text.trim();
        if let Some(inner) = literal.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
            literal = inner.trim();
        }
        if literal.is_empty() {
            return Err(invalid());
        }

        let Some(body) = literal.strip_suffix(|c: char| c.eq_ignore_ascii_case(&'j')) else {
            return parse_component(literal).map(Self::from_real).ok_or_else(invalid);
        };

        match split_index(body) {
            Some(at) => {
                let re = parse_component(&body[..at]).ok_or_else(invalid)?;
                let im = parse_imaginary(&body[at..]).ok_or_else(invalid)?;
                Ok(Self::new(re, im))
            }
            None => parse_imaginary(body).map(|im| Self::new(0.0, im)).ok_or_else(invalid),
        }
    }
}

/// Byte offset of the sign that starts the imaginary part, if there is one.
/// A leading sign belongs to the real part and a sign after an exponent marker
/// belongs to the exponent.
fn split_index(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_component(text: &str) -> Option<f64> {
    if text.is_empty() || text.contains(char::is_whitespace) {
        return None;
    }
    text.parse().ok()
}

/// A bare sign (or nothing) in front of `j` means a unit coefficient.
fn parse_imaginary(text: &str) -> Option<f64> {
    match text {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        other => parse_component(other),
    }
}
