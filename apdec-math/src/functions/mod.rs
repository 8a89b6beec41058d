//! Function suite over the decimal value type

mod exp;
mod hyper;
mod special;
mod trig;

pub use exp::{exp, ln, log, log10, log2, pow, sqrt};
pub use hyper::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use special::{binomial, erf, factorial, ncr, npr};
pub use trig::{acos, asin, atan, atan2, cos, cot, csc, sec, sin, tan};

pub(crate) use exp::{e_value, ln2_value, ln_lenient, newton_sqrt, powi};

use apdec_core::{Decimal, PrecisionConfig};

/// Guard digits added to the working precision of every series
pub(crate) const WORK_GUARD: usize = 8;

/// A copy of `cfg` with `extra` more fractional digits for intermediates
pub(crate) fn widened(cfg: &PrecisionConfig, extra: usize) -> PrecisionConfig {
    let mut work = cfg.clone();
    work.decimals += extra;
    work
}

/// Small integer literal under a given config
pub(crate) fn lit(n: i64, cfg: &PrecisionConfig) -> Decimal {
    Decimal::from(n).with_config(cfg.clone())
}

/// Wide unsigned literal under a given config
pub(crate) fn lit_u(n: u128, cfg: &PrecisionConfig) -> Decimal {
    Decimal::from(n).with_config(cfg.clone())
}

/// Narrow a working-precision result back to the caller's config and
/// re-apply its saturation bound
pub(crate) fn finish(value: Decimal, cfg: &PrecisionConfig) -> Decimal {
    value.round_to(cfg.decimals).with_config(cfg.clone()).saturated()
}
