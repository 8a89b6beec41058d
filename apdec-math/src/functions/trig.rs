//! Trigonometric functions
//!
//! Arguments are phase-reduced into (-π, π] before the series run; the
//! series term counts come from `trig_terms`, so accuracy near the edge
//! of the interval is the caller's knob.

use super::{finish, lit, widened, WORK_GUARD};
use crate::consts::pi_value;
use apdec_core::{Decimal, DecimalError, Outcome, PrecisionConfig};

/// Subtract the right multiple of 2π to land in (-π, π]
pub(crate) fn phase_correct(x: &Decimal, work: &PrecisionConfig) -> Decimal {
    let pi = pi_value(work);
    let tau = &pi * &lit(2, work);
    let n = (&(x - &pi) / &tau).ceil();
    if n.is_zero() {
        x.clone()
    } else {
        x - &(&tau * &n)
    }
}

/// Sine via Σ(-1)ⁿ·x^(2n+1)/(2n+1)! after phase reduction
pub fn sin(x: &Decimal) -> Decimal {
    if x.is_nan() {
        return x.clone();
    }
    let cfg = x.config().clone();
    if x.is_infinite() {
        return Decimal::nan().with_config(cfg);
    }
    let work = widened(&cfg, WORK_GUARD);
    let r = phase_correct(&x.clone().with_config(work.clone()), &work);
    let r2 = &r * &r;
    let mut sum = r.clone();
    let mut term = r;
    for n in 1..work.trig_terms as i64 {
        term = &(&(-&term) * &r2) / &lit(2 * n * (2 * n + 1), &work);
        sum = &sum + &term;
        if term.is_zero() {
            break;
        }
    }
    finish(sum, &cfg)
}

/// Cosine via Σ(-1)ⁿ·x^(2n)/(2n)! after phase reduction
pub fn cos(x: &Decimal) -> Decimal {
    if x.is_nan() {
        return x.clone();
    }
    let cfg = x.config().clone();
    if x.is_infinite() {
        return Decimal::nan().with_config(cfg);
    }
    let work = widened(&cfg, WORK_GUARD);
    let r = phase_correct(&x.clone().with_config(work.clone()), &work);
    let r2 = &r * &r;
    let mut sum = lit(1, &work);
    let mut term = lit(1, &work);
    for n in 1..work.trig_terms as i64 {
        term = &(&(-&term) * &r2) / &lit((2 * n - 1) * 2 * n, &work);
        sum = &sum + &term;
        if term.is_zero() {
            break;
        }
    }
    finish(sum, &cfg)
}

/// sin/cos; undefined where the cosine vanishes
pub fn tan(x: &Decimal) -> Result<Decimal, DecimalError> {
    let c = cos(x);
    if c.is_zero() {
        return Outcome::illegal(
            Decimal::nan().with_config(x.config().clone()),
            DecimalError::Domain("tan undefined at odd multiples of π/2".to_string()),
        )
        .strict(x.config().strict);
    }
    Ok(&sin(x) / &c)
}

/// cos/sin; undefined where the sine vanishes
pub fn cot(x: &Decimal) -> Result<Decimal, DecimalError> {
    let s = sin(x);
    if s.is_zero() {
        return Outcome::illegal(
            Decimal::nan().with_config(x.config().clone()),
            DecimalError::Domain("cot undefined at multiples of π".to_string()),
        )
        .strict(x.config().strict);
    }
    Ok(&cos(x) / &s)
}

/// 1/cos
pub fn sec(x: &Decimal) -> Result<Decimal, DecimalError> {
    let c = cos(x);
    if c.is_zero() {
        return Outcome::illegal(
            Decimal::nan().with_config(x.config().clone()),
            DecimalError::Domain("sec undefined at odd multiples of π/2".to_string()),
        )
        .strict(x.config().strict);
    }
    Ok(&lit(1, x.config()) / &c)
}

/// 1/sin
pub fn csc(x: &Decimal) -> Result<Decimal, DecimalError> {
    let s = sin(x);
    if s.is_zero() {
        return Outcome::illegal(
            Decimal::nan().with_config(x.config().clone()),
            DecimalError::Domain("csc undefined at multiples of π".to_string()),
        )
        .strict(x.config().strict);
    }
    Ok(&lit(1, x.config()) / &s)
}

/// Σ(-1)ⁿ·z^(2n+1)/(2n+1) for |z| <= 1; the |z| = 1 endpoint converges
/// far too slowly for the series and is answered as ±π/4 directly
fn atan_series(z: &Decimal, work: &PrecisionConfig) -> Decimal {
    if z.abs() == lit(1, work) {
        let quarter_pi = &pi_value(work) / &lit(4, work);
        return if z.is_negative() { -&quarter_pi } else { quarter_pi };
    }
    let z2 = z * z;
    let mut term = z.clone();
    let mut sum = z.clone();
    for n in 1..work.trig_terms as i64 {
        term = &(-&term) * &z2;
        sum = &sum + &(&term / &lit(2 * n + 1, work));
        if term.is_zero() {
            break;
        }
    }
    sum
}

/// Arctangent: direct series inside the unit interval, the π/2 − atan(1/x)
/// identity outside it
pub fn atan(x: &Decimal) -> Decimal {
    if x.is_nan() {
        return x.clone();
    }
    let cfg = x.config().clone();
    let work = widened(&cfg, WORK_GUARD);
    let half_pi = &pi_value(&work) / &lit(2, &work);
    if x.is_infinite() {
        let v = if x.is_negative() { -&half_pi } else { half_pi };
        return finish(v, &cfg);
    }
    let one = lit(1, &cfg);
    if x.abs() > one {
        let inv = &lit(1, &work) / &x.clone().with_config(work.clone());
        let outer = if x.is_negative() { -&half_pi } else { half_pi };
        return finish(&outer - &atan_series(&inv, &work), &cfg);
    }
    finish(atan_series(&x.clone().with_config(work.clone()), &work), &cfg)
}

/// Arcsine via atan(x/√(1-x²)); |x| > 1 is a domain error or NaN
pub fn asin(x: &Decimal) -> Result<Decimal, DecimalError> {
    if x.is_nan() {
        return Ok(x.clone());
    }
    let cfg = x.config().clone();
    let one = lit(1, &cfg);
    if x.abs() > one || x.is_infinite() {
        return Outcome::illegal(
            Decimal::nan().with_config(cfg),
            DecimalError::Domain("asin domain is [-1, 1]".to_string()),
        )
        .strict(x.config().strict);
    }
    let work = widened(&cfg, WORK_GUARD);
    if x.abs() == one {
        let half_pi = &pi_value(&work) / &lit(2, &work);
        let v = if x.is_negative() { -&half_pi } else { half_pi };
        return Ok(finish(v, &cfg));
    }
    let xw = x.clone().with_config(work.clone());
    let radicand = &lit(1, &work) - &(&xw * &xw);
    let t = &xw / &super::newton_sqrt(&radicand);
    Ok(finish(atan_series_or_identity(&t, &work), &cfg))
}

/// atan over the whole line at working precision, for internal callers
fn atan_series_or_identity(t: &Decimal, work: &PrecisionConfig) -> Decimal {
    let one = lit(1, work);
    if t.abs() > one {
        let half_pi = &pi_value(work) / &lit(2, work);
        let inv = &one / t;
        let outer = if t.is_negative() { -&half_pi } else { half_pi };
        return &outer - &atan_series(&inv, work);
    }
    atan_series(t, work)
}

/// Arccosine as π/2 − asin(x)
pub fn acos(x: &Decimal) -> Result<Decimal, DecimalError> {
    if x.is_nan() {
        return Ok(x.clone());
    }
    let cfg = x.config().clone();
    let work = widened(&cfg, WORK_GUARD);
    let half_pi = &pi_value(&work) / &lit(2, &work);
    let s = asin(&x.clone().with_config(work.clone()))?;
    Ok(finish(&half_pi - &s, &cfg))
}

/// Quadrant-resolving arctangent of y/x
pub fn atan2(y: &Decimal, x: &Decimal) -> Decimal {
    if y.is_nan() || x.is_nan() {
        return Decimal::nan().with_config(y.config().clone());
    }
    let cfg = y.config().clone();
    let work = widened(&cfg, WORK_GUARD);
    if x.is_zero() {
        if y.is_zero() {
            return Decimal::nan().with_config(cfg);
        }
        let half_pi = &pi_value(&work) / &lit(2, &work);
        let v = if y.is_negative() { -&half_pi } else { half_pi };
        return finish(v, &cfg);
    }
    let q = atan_series_or_identity(&(&y.clone().with_config(work.clone()) / x), &work);
    if x.is_negative() {
        let pi = pi_value(&work);
        let v = if y.is_negative() { &q - &pi } else { &q + &pi };
        return finish(v, &cfg);
    }
    finish(q, &cfg)
}
