//! Precision and iteration controls
//!
//! Every `Decimal` carries a `PrecisionConfig`; unary operations keep it,
//! binary operations adopt the left operand's config with `decimals`
//! widened to cover both operands' current fractional lengths.

use serde::{Deserialize, Serialize};

/// Tunable iteration counts and flags for every variable-precision
/// algorithm in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionConfig {
    /// Minimum error-corrected fractional digits retained by operations.
    /// Finite results whose magnitude reaches 10^decimals saturate to ±∞.
    pub decimals: usize,
    /// Taylor-series term count for e and factorial-driven series
    pub e_terms: usize,
    /// Minimum Chudnovsky term count for 1/π
    pub pi_terms: usize,
    /// Newton-Raphson refinement rounds for reciprocal-based division;
    /// 0 falls back to the plain remainder loop
    pub div_rounds: usize,
    /// Series terms for ln
    pub ln_terms: usize,
    /// Series terms for tanh and related
    pub tanh_terms: usize,
    /// Iteration budget for the bootstrap square root
    pub sqrt_iters: usize,
    /// Series terms for trig functions
    pub trig_terms: usize,
    /// When narrowing fractional digits: truncate toward zero instead of
    /// rounding half-up
    pub truncate: bool,
    /// Surface illegal operations as errors instead of special values
    pub strict: bool,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            decimals: 40,
            e_terms: 40,
            pi_terms: 1,
            div_rounds: 5,
            ln_terms: 40,
            tanh_terms: 40,
            sqrt_iters: 40,
            trig_terms: 5,
            truncate: false,
            strict: true,
        }
    }
}

impl PrecisionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Builders ==========

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_e_terms(mut self, terms: usize) -> Self {
        self.e_terms = terms;
        self
    }

    pub fn with_pi_terms(mut self, terms: usize) -> Self {
        self.pi_terms = terms;
        self
    }

    pub fn with_div_rounds(mut self, rounds: usize) -> Self {
        self.div_rounds = rounds;
        self
    }

    pub fn with_ln_terms(mut self, terms: usize) -> Self {
        self.ln_terms = terms;
        self
    }

    pub fn with_tanh_terms(mut self, terms: usize) -> Self {
        self.tanh_terms = terms;
        self
    }

    pub fn with_sqrt_iters(mut self, iters: usize) -> Self {
        self.sqrt_iters = iters;
        self
    }

    pub fn with_trig_terms(mut self, terms: usize) -> Self {
        self.trig_terms = terms;
        self
    }

    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
