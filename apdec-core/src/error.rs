//! Error values for decimal operations
//!
//! Illegal operations (divide by zero, domain violations, narrowing
//! misfits) surface either as a `DecimalError` or as the matching special
//! value, depending on the `strict` flag of the governing config. The
//! `Outcome` type carries both alternatives until the flag is applied.

use crate::Decimal;
use thiserror::Error;

/// Error type for decimal operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("Invalid decimal literal: {0}")]
    Parse(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Value {value} does not fit {target}")]
    Narrow { target: &'static str, value: String },
}

/// Result of an operation that may be mathematically illegal.
///
/// Carries the in-band special value alongside the error that a strict
/// config would raise. `strict(flag)` resolves the pair into a `Result`;
/// `lenient()` always yields the value, which is what operator overloads
/// use since they cannot fail.
#[derive(Debug, Clone)]
pub struct Outcome {
    value: Decimal,
    error: Option<DecimalError>,
}

impl Outcome {
    /// A legal result
    pub fn ok(value: Decimal) -> Self {
        Self { value, error: None }
    }

    /// An illegal operation: the special value it coerces to, plus the error
    pub fn illegal(value: Decimal, error: DecimalError) -> Self {
        Self { value, error: Some(error) }
    }

    /// Transform the carried value, keeping any pending error
    pub fn map(self, f: impl FnOnce(Decimal) -> Decimal) -> Self {
        Self { value: f(self.value), error: self.error }
    }

    /// Resolve against a strictness flag
    pub fn strict(self, strict: bool) -> Result<Decimal, DecimalError> {
        match self.error {
            Some(err) if strict => Err(err),
            _ => Ok(self.value),
        }
    }

    /// Resolve by always coercing to the in-band value
    pub fn lenient(self) -> Decimal {
        self.value
    }
}
