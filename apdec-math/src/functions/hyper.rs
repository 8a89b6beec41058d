//! Hyperbolic functions and their inverses
//!
//! sinh and cosh ride on exp; tanh uses its Bernoulli-number series
//! inside the unit interval and falls back to the exp closed form
//! outside it. The inverses are the usual logarithmic closed forms.

use super::{finish, lit, ln_lenient, newton_sqrt, widened, WORK_GUARD};
use crate::bernoulli::{bernoulli_seeded, factorial_margin};
use crate::consts::pi_value;
use apdec_core::{Decimal, DecimalError, Outcome};

/// (e^x − e^−x)/2
pub fn sinh(x: &Decimal) -> Decimal {
    if !x.is_finite() {
        return x.clone();
    }
    let cfg = x.config().clone();
    let work = widened(&cfg, WORK_GUARD);
    let xw = x.clone().with_config(work.clone());
    let ep = super::exp(&xw);
    let en = super::exp(&(-&xw));
    finish(&(&ep - &en) / &lit(2, &work), &cfg)
}

/// (e^x + e^−x)/2
pub fn cosh(x: &Decimal) -> Decimal {
    if x.is_nan() {
        return x.clone();
    }
    let cfg = x.config().clone();
    if x.is_infinite() {
        return Decimal::infinity().with_config(cfg);
    }
    let work = widened(&cfg, WORK_GUARD);
    let xw = x.clone().with_config(work.clone());
    let ep = super::exp(&xw);
    let en = super::exp(&(-&xw));
    finish(&(&ep + &en) / &lit(2, &work), &cfg)
}

/// Hyperbolic tangent.
///
/// For |x| < 1 the Bernoulli series
/// Σ 2²ⁿ(2²ⁿ−1)·B₂ₙ·x^(2n−1)/(2n)! runs for `tanh_terms` terms;
/// outside that interval (e^2x − 1)/(e^2x + 1) is used.
pub fn tanh(x: &Decimal) -> Decimal {
    if x.is_nan() || x.is_zero() {
        return x.clone();
    }
    let cfg = x.config().clone();
    if x.is_infinite() {
        return if x.is_negative() { lit(-1, &cfg) } else { lit(1, &cfg) };
    }
    let work = widened(&cfg, WORK_GUARD);
    let xw = x.clone().with_config(work.clone());
    if x.abs() < lit(1, &cfg) {
        // The high-index Bernoulli numbers and the (2n)! denominators
        // dwarf the working saturation bound, so the series runs its
        // big factors at a config deep enough to hold them, with one π
        // covering every index it will ask for.
        let deep = widened(&work, WORK_GUARD + factorial_margin(2 * work.tanh_terms as u64));
        let pi = pi_value(&deep);
        let x2 = &xw * &xw;
        let one = lit(1, &deep);
        let mut pow4 = one.clone();
        let mut fact = one.clone();
        let mut xp = xw;
        let mut sum = lit(0, &work);
        for n in 1..=work.tanh_terms as i64 {
            pow4 = &pow4 * &lit(4, &deep);
            fact = &fact * &lit((2 * n - 1) * 2 * n, &deep);
            let b = bernoulli_seeded(2 * n as u64, &deep, &pi);
            let coeff = &(&pow4 * &(&pow4 - &one)) * &b;
            let term = &(&coeff * &xp) / &fact;
            sum = &sum + &term;
            if term.is_zero() {
                break;
            }
            xp = &xp * &x2;
        }
        return finish(sum, &cfg);
    }
    let e2 = super::exp(&(&xw * &lit(2, &work)));
    if e2.is_infinite() {
        return if x.is_negative() { lit(-1, &cfg) } else { lit(1, &cfg) };
    }
    let one = lit(1, &work);
    finish(&(&e2 - &one) / &(&e2 + &one), &cfg)
}

/// ln(x + √(x² + 1)), defined on the whole line
pub fn asinh(x: &Decimal) -> Decimal {
    if !x.is_finite() {
        return x.clone();
    }
    let cfg = x.config().clone();
    let work = widened(&cfg, WORK_GUARD);
    let xw = x.clone().with_config(work.clone());
    let root = newton_sqrt(&(&(&xw * &xw) + &lit(1, &work)));
    finish(ln_lenient(&(&xw + &root)), &cfg)
}

/// ln(x + √(x² − 1)); arguments below 1 are a domain error or NaN
pub fn acosh(x: &Decimal) -> Result<Decimal, DecimalError> {
    if x.is_nan() {
        return Ok(x.clone());
    }
    let cfg = x.config().clone();
    if x.is_infinite() && x.is_positive() {
        return Ok(x.clone());
    }
    if *x < lit(1, &cfg) {
        return Outcome::illegal(
            Decimal::nan().with_config(cfg),
            DecimalError::Domain("acosh domain is [1, ∞)".to_string()),
        )
        .strict(x.config().strict);
    }
    let work = widened(&cfg, WORK_GUARD);
    let xw = x.clone().with_config(work.clone());
    let root = newton_sqrt(&(&(&xw * &xw) - &lit(1, &work)));
    Ok(finish(ln_lenient(&(&xw + &root)), &cfg))
}

/// ln((1 + x)/(1 − x))/2; |x| > 1 is a domain error or NaN, and the
/// ±1 endpoints land on ±∞
pub fn atanh(x: &Decimal) -> Result<Decimal, DecimalError> {
    if x.is_nan() {
        return Ok(x.clone());
    }
    let cfg = x.config().clone();
    if x.abs() > lit(1, &cfg) || x.is_infinite() {
        return Outcome::illegal(
            Decimal::nan().with_config(cfg),
            DecimalError::Domain("atanh domain is (-1, 1)".to_string()),
        )
        .strict(x.config().strict);
    }
    if x.abs() == lit(1, &cfg) {
        let inf = Decimal::infinity().with_config(cfg);
        return Ok(if x.is_negative() { -inf } else { inf });
    }
    let work = widened(&cfg, WORK_GUARD);
    let xw = x.clone().with_config(work.clone());
    let one = lit(1, &work);
    let ratio = &(&one + &xw) / &(&one - &xw);
    Ok(finish(&ln_lenient(&ratio) / &lit(2, &work), &cfg))
}
