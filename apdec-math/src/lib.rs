//! apdec-math - transcendental functions for the apdec decimal type
//!
//! This crate layers the function suite on top of `apdec-core`:
//! - `MathOps`: an extension trait putting exp/ln/pow/sqrt, the trig,
//!   hyperbolic and inverse families, erf and factorial on `Decimal`
//! - `Constants`: the precomputed constants table (π via Chudnovsky,
//!   e via Taylor, the log and root families)
//! - `bernoulli`: Bernoulli numbers via the Chowla-Hartung formula
//!
//! Domain-checked functions return `Result` and honor the `strict` flag
//! of the argument's config: strict configs surface a `DecimalError`,
//! lenient ones coerce to the matching special value.

pub mod bernoulli;
pub mod consts;
pub mod functions;

pub use bernoulli::bernoulli;
pub use consts::Constants;
pub use functions::{binomial, ncr, npr};

use apdec_core::{Decimal, DecimalError};

/// Transcendental and special functions as methods on `Decimal`
pub trait MathOps {
    fn exp(&self) -> Decimal;
    fn ln(&self) -> Result<Decimal, DecimalError>;
    fn log(&self, base: &Decimal) -> Result<Decimal, DecimalError>;
    fn log2(&self) -> Result<Decimal, DecimalError>;
    fn log10(&self) -> Result<Decimal, DecimalError>;
    fn pow(&self, exponent: &Decimal) -> Result<Decimal, DecimalError>;
    fn sqrt(&self) -> Result<Decimal, DecimalError>;
    fn sin(&self) -> Decimal;
    fn cos(&self) -> Decimal;
    fn tan(&self) -> Result<Decimal, DecimalError>;
    fn cot(&self) -> Result<Decimal, DecimalError>;
    fn sec(&self) -> Result<Decimal, DecimalError>;
    fn csc(&self) -> Result<Decimal, DecimalError>;
    fn asin(&self) -> Result<Decimal, DecimalError>;
    fn acos(&self) -> Result<Decimal, DecimalError>;
    fn atan(&self) -> Decimal;
    /// Quadrant-resolving arctangent; `self` is the y coordinate
    fn atan2(&self, x: &Decimal) -> Decimal;
    fn sinh(&self) -> Decimal;
    fn cosh(&self) -> Decimal;
    fn tanh(&self) -> Decimal;
    fn asinh(&self) -> Decimal;
    fn acosh(&self) -> Result<Decimal, DecimalError>;
    fn atanh(&self) -> Result<Decimal, DecimalError>;
    fn erf(&self) -> Decimal;
    fn factorial(&self) -> Result<Decimal, DecimalError>;
}

impl MathOps for Decimal {
    fn exp(&self) -> Decimal {
        functions::exp(self)
    }

    fn ln(&self) -> Result<Decimal, DecimalError> {
        functions::ln(self)
    }

    fn log(&self, base: &Decimal) -> Result<Decimal, DecimalError> {
        functions::log(base, self)
    }

    fn log2(&self) -> Result<Decimal, DecimalError> {
        functions::log2(self)
    }

    fn log10(&self) -> Result<Decimal, DecimalError> {
        functions::log10(self)
    }

    fn pow(&self, exponent: &Decimal) -> Result<Decimal, DecimalError> {
        functions::pow(self, exponent)
    }

    fn sqrt(&self) -> Result<Decimal, DecimalError> {
        functions::sqrt(self)
    }

    fn sin(&self) -> Decimal {
        functions::sin(self)
    }

    fn cos(&self) -> Decimal {
        functions::cos(self)
    }

    fn tan(&self) -> Result<Decimal, DecimalError> {
        functions::tan(self)
    }

    fn cot(&self) -> Result<Decimal, DecimalError> {
        functions::cot(self)
    }

    fn sec(&self) -> Result<Decimal, DecimalError> {
        functions::sec(self)
    }

    fn csc(&self) -> Result<Decimal, DecimalError> {
        functions::csc(self)
    }

    fn asin(&self) -> Result<Decimal, DecimalError> {
        functions::asin(self)
    }

    fn acos(&self) -> Result<Decimal, DecimalError> {
        functions::acos(self)
    }

    fn atan(&self) -> Decimal {
        functions::atan(self)
    }

    fn atan2(&self, x: &Decimal) -> Decimal {
        functions::atan2(self, x)
    }

    fn sinh(&self) -> Decimal {
        functions::sinh(self)
    }

    fn cosh(&self) -> Decimal {
        functions::cosh(self)
    }

    fn tanh(&self) -> Decimal {
        functions::tanh(self)
    }

    fn asinh(&self) -> Decimal {
        functions::asinh(self)
    }

    fn acosh(&self) -> Result<Decimal, DecimalError> {
        functions::acosh(self)
    }

    fn atanh(&self) -> Result<Decimal, DecimalError> {
        functions::atanh(self)
    }

    fn erf(&self) -> Decimal {
        functions::erf(self)
    }

    fn factorial(&self) -> Result<Decimal, DecimalError> {
        functions::factorial(self)
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{bernoulli, binomial, ncr, npr, Constants, MathOps};
    pub use apdec_core::prelude::*;
}
