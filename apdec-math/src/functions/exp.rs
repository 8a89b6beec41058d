//! Exponential, logarithmic and power functions
//!
//! Every series runs at the caller's precision plus a guard band and is
//! narrowed back on the way out. `ln` breaks the constants cycle by
//! evaluating ln 2 straight from its own series rather than through a
//! constants table.

use super::{finish, lit, widened, WORK_GUARD};
use apdec_core::{Decimal, DecimalError, Outcome, PrecisionConfig};

/// e^x as `e^floor(x) * Σ rⁿ/n!` over the fractional remainder.
///
/// The integer/fraction split keeps the fixed-term Taylor series inside
/// its fast-converging range for arguments of any size.
pub fn exp(x: &Decimal) -> Decimal {
    if x.is_nan() {
        return x.clone();
    }
    let cfg = x.config().clone();
    if x.is_infinite() {
        return if x.is_negative() { lit(0, &cfg) } else { x.clone() };
    }
    let work = widened(&cfg, WORK_GUARD);
    let x = x.clone().with_config(work.clone());
    let k = x.floor();
    let r = &x - &k;
    let whole = match k.to_i64() {
        Ok(k) => powi(&e_value(&work), k),
        // beyond i64 the result saturates (or vanishes) regardless
        Err(_) => {
            return if x.is_negative() {
                lit(0, &cfg)
            } else {
                Decimal::infinity().with_config(cfg)
            };
        }
    };
    let mut sum = lit(1, &work);
    let mut term = lit(1, &work);
    for n in 1..=work.e_terms as i64 {
        term = &(&term * &r) / &lit(n, &work);
        sum = &sum + &term;
        if term.is_zero() {
            break;
        }
    }
    finish(&whole * &sum, &cfg)
}

/// e from its Taylor series, at the config's working precision
pub(crate) fn e_value(cfg: &PrecisionConfig) -> Decimal {
    let mut sum = lit(1, cfg);
    let mut term = lit(1, cfg);
    for n in 1..=cfg.e_terms as i64 {
        term = &term / &lit(n, cfg);
        sum = &sum + &term;
        if term.is_zero() {
            break;
        }
    }
    sum
}

/// Integer power by repeated squaring; negative exponents go through the
/// reciprocal
pub(crate) fn powi(x: &Decimal, n: i64) -> Decimal {
    let cfg = x.config().clone();
    if n == 0 {
        return lit(1, &cfg);
    }
    let mut base = x.clone();
    let mut e = n.unsigned_abs();
    let mut acc = lit(1, &cfg);
    while e > 0 {
        if e & 1 == 1 {
            acc = &acc * &base;
        }
        e >>= 1;
        if e > 0 {
            base = &base * &base;
        }
    }
    if n < 0 {
        &lit(1, &cfg) / &acc
    } else {
        acc
    }
}

/// ln(m) for m in [1, 2) via 2·Σ z^(2k+1)/(2k+1), z = (m-1)/(m+1).
/// Also valid at m = 2, which is how ln 2 itself is produced.
fn atanh_series(m: &Decimal, work: &PrecisionConfig) -> Decimal {
    let one = lit(1, work);
    let z = &(m - &one) / &(m + &one);
    let z2 = &z * &z;
    let mut term = z.clone();
    let mut sum = z.clone();
    for k in 1..work.ln_terms {
        term = &term * &z2;
        sum = &sum + &(&term / &lit(2 * k as i64 + 1, work));
        if term.is_zero() {
            break;
        }
    }
    &sum * &lit(2, work)
}

/// ln 2 straight from the series; the seed for the halving reduction
pub(crate) fn ln2_value(work: &PrecisionConfig) -> Decimal {
    atanh_series(&lit(2, work), work)
}

pub(crate) fn ln_outcome(x: &Decimal) -> Outcome {
    if x.is_nan() {
        return Outcome::ok(x.clone());
    }
    let cfg = x.config().clone();
    if x.is_infinite() && x.is_positive() {
        return Outcome::ok(x.clone());
    }
    if !x.is_finite() || x.is_zero() || x.is_negative() {
        return Outcome::illegal(
            Decimal::nan().with_config(cfg),
            DecimalError::Domain("logarithm of non-positive number".to_string()),
        );
    }
    let work = widened(&cfg, WORK_GUARD);
    let one = lit(1, &work);
    let two = lit(2, &work);
    // halve (or double) into [1, 2) so the series converges fast
    let mut m = x.clone().with_config(work.clone());
    let mut k: i64 = 0;
    while m >= two {
        m = &m / &two;
        k += 1;
    }
    while m < one {
        m = &m * &two;
        k -= 1;
    }
    let mut sum = atanh_series(&m, &work);
    if k != 0 {
        sum = &sum + &(&ln2_value(&work) * &lit(k, &work));
    }
    Outcome::ok(finish(sum, &cfg))
}

/// Natural logarithm; non-positive arguments are a domain error or NaN
/// depending on the config
pub fn ln(x: &Decimal) -> Result<Decimal, DecimalError> {
    ln_outcome(x).strict(x.config().strict)
}

pub(crate) fn ln_lenient(x: &Decimal) -> Decimal {
    ln_outcome(x).lenient()
}

/// Logarithm of `x` in base `base`
pub fn log(base: &Decimal, x: &Decimal) -> Result<Decimal, DecimalError> {
    let strict = x.config().strict;
    if base.is_nan() || x.is_nan() {
        return Ok(Decimal::nan().with_config(x.config().clone()));
    }
    let one = lit(1, x.config());
    if !base.is_positive() || base.is_zero() || *base == one {
        return Outcome::illegal(
            Decimal::nan().with_config(x.config().clone()),
            DecimalError::Domain("logarithm base must be positive and not 1".to_string()),
        )
        .strict(strict);
    }
    let den = ln_lenient(base);
    ln_outcome(x).map(|v| &v / &den).strict(strict)
}

/// Base-10 logarithm
pub fn log10(x: &Decimal) -> Result<Decimal, DecimalError> {
    let work = widened(x.config(), WORK_GUARD);
    let den = ln_lenient(&lit(10, &work));
    let cfg = x.config().clone();
    ln_outcome(x)
        .map(|v| finish(&v.with_config(work.clone()) / &den, &cfg))
        .strict(cfg.strict)
}

/// Base-2 logarithm
pub fn log2(x: &Decimal) -> Result<Decimal, DecimalError> {
    let work = widened(x.config(), WORK_GUARD);
    let den = ln2_value(&work);
    let cfg = x.config().clone();
    ln_outcome(x)
        .map(|v| finish(&v.with_config(work.clone()) / &den, &cfg))
        .strict(cfg.strict)
}

pub(crate) fn pow_outcome(x: &Decimal, y: &Decimal) -> Outcome {
    let cfg = x.config().clone();
    let nan = Decimal::nan().with_config(cfg.clone());
    if x.is_nan() || y.is_nan() {
        return Outcome::ok(nan);
    }
    if y.is_zero() {
        // 0^0 and Inf^0 are indeterminate; anything else to the zeroth is 1
        if x.is_zero() || x.is_infinite() {
            return Outcome::illegal(nan, DecimalError::Domain("indeterminate power".to_string()));
        }
        return Outcome::ok(lit(1, &cfg));
    }
    if y.is_infinite() {
        let mag = x.abs();
        let one = lit(1, &cfg);
        if mag == one {
            return Outcome::ok(nan);
        }
        let grows = (mag > one) == y.is_positive();
        return Outcome::ok(if grows {
            Decimal::infinity().with_config(cfg)
        } else {
            lit(0, &cfg)
        });
    }
    if x.is_infinite() {
        if y.is_negative() {
            return Outcome::ok(lit(0, &cfg));
        }
        let odd = y.is_integer() && y.to_i64().map(|n| n % 2 != 0).unwrap_or(false);
        return Outcome::ok(if x.is_negative() && odd {
            Decimal::neg_infinity().with_config(cfg)
        } else {
            Decimal::infinity().with_config(cfg)
        });
    }
    if x.is_zero() {
        if y.is_negative() {
            return Outcome::illegal(
                Decimal::infinity().with_config(cfg),
                DecimalError::DivisionByZero,
            );
        }
        return Outcome::ok(lit(0, &cfg));
    }
    if y.is_integer() {
        if let Ok(n) = y.to_i64() {
            let work = x.clone().with_config(widened(&cfg, WORK_GUARD));
            return Outcome::ok(finish(powi(&work, n), &cfg));
        }
        // exponent beyond i64: the magnitude rules decide
        let mag = x.abs();
        let one = lit(1, &cfg);
        if mag == one {
            return Outcome::ok(if x.is_negative() { nan } else { one });
        }
        let grows = (mag > one) == y.is_positive();
        return Outcome::ok(if grows {
            Decimal::infinity().with_config(cfg)
        } else {
            lit(0, &cfg)
        });
    }
    if x.is_negative() {
        return Outcome::illegal(
            nan,
            DecimalError::Domain("negative base with fractional exponent".to_string()),
        );
    }
    // x > 0, fractional y: x^y = exp(y * ln x)
    let work = widened(&cfg, WORK_GUARD);
    let lnx = ln_lenient(&x.clone().with_config(work.clone()));
    let product = &lnx * &y.clone().with_config(work);
    Outcome::ok(finish(exp(&product), &cfg))
}

/// x^y: repeated squaring for integer exponents, exp(y·ln x) otherwise
pub fn pow(x: &Decimal, y: &Decimal) -> Result<Decimal, DecimalError> {
    pow_outcome(x, y).strict(x.config().strict)
}

/// Square root as x^(1/2); negative arguments are a domain error or NaN
pub fn sqrt(x: &Decimal) -> Result<Decimal, DecimalError> {
    if x.is_nan() || x.is_zero() || (x.is_infinite() && x.is_positive()) {
        return Ok(x.clone());
    }
    if x.is_negative() {
        return Outcome::illegal(
            Decimal::nan().with_config(x.config().clone()),
            DecimalError::Domain("square root of negative number".to_string()),
        )
        .strict(x.config().strict);
    }
    let half = dec_half(x.config());
    pow(x, &half)
}

fn dec_half(cfg: &PrecisionConfig) -> Decimal {
    &lit(1, cfg) / &lit(2, cfg)
}

/// Bootstrap square root: Newton's iteration `r ← (r + x/r)/2` on a
/// rational seed. Constants generation and erf use this so nothing
/// circular touches pow/ln.
pub(crate) fn newton_sqrt(x: &Decimal) -> Decimal {
    if x.is_nan() || x.is_zero() || x.is_infinite() || x.is_negative() {
        return if x.is_negative() { Decimal::nan().with_config(x.config().clone()) } else { x.clone() };
    }
    let cfg = x.config().clone();
    let seed = x.to_f64();
    let mut r = if seed.is_finite() && seed > 0.0 && seed.sqrt() > 0.0 {
        Decimal::from(seed.sqrt()).with_config(cfg.clone())
    } else {
        powi(&lit(10, &cfg), (x.integer_digits() / 2).max(1) as i64)
    };
    let two = lit(2, &cfg);
    let mut prev = Decimal::nan();
    for _ in 0..cfg.sqrt_iters {
        let next = &(&r + &(x / &r)) / &two;
        if next == r || next == prev {
            break;
        }
        prev = std::mem::replace(&mut r, next);
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use apdec_core::dec;

    #[test]
    fn test_exp_zero_is_one() {
        assert_eq!(exp(&dec!("0")), dec!("1"));
    }

    #[test]
    fn test_exp_one_is_e() {
        let e = exp(&dec!("1"));
        assert!(
            e.to_string().starts_with("2.71828182845904523536028747135266249"),
            "exp(1) should be e, got: {}",
            e
        );
    }

    #[test]
    fn test_exp_negative() {
        let v = exp(&dec!("-1"));
        assert!(v.to_string().starts_with("0.3678794411714423215955237701614608"), "got: {}", v);
    }

    #[test]
    fn test_exp_large_argument() {
        // e^10 = 22026.4657948...
        let v = exp(&dec!("10"));
        assert!(v.to_string().starts_with("22026.4657948067"), "got: {}", v);
    }

    #[test]
    fn test_exp_of_infinities() {
        assert!(exp(&Decimal::infinity()).is_infinite());
        assert!(exp(&Decimal::neg_infinity()).is_zero());
        assert!(exp(&Decimal::nan()).is_nan());
    }

    #[test]
    fn test_ln_two() {
        let v = ln(&dec!("2")).unwrap();
        assert!(
            v.to_string().starts_with("0.69314718055994530941723212145817656"),
            "ln(2), got: {}",
            v
        );
    }

    #[test]
    fn test_ln_of_hundred_is_twice_ln_ten() {
        let ln_10 = ln(&dec!("10")).unwrap();
        let ln_100 = ln(&dec!("100")).unwrap();
        let twice = &ln_10 * &dec!("2");
        let drift = (&ln_100 - &twice).abs();
        assert!(drift <= dec!("1e-38"), "ln(100) vs 2·ln(10) drifted by {}", drift);
        assert!(ln_10.to_string().starts_with("2.302585092994045684"), "ln(10), got: {}", ln_10);
    }

    #[test]
    fn test_ln_domain() {
        assert!(ln(&dec!("0")).is_err());
        assert!(ln(&dec!("-3")).is_err());
        let lenient = PrecisionConfig::default().with_strict(false);
        assert!(ln(&dec!("-3").with_config(lenient)).unwrap().is_nan());
    }

    #[test]
    fn test_exp_ln_round_trip() {
        for s in ["0.5", "2", "100", "0.001"] {
            let x: Decimal = s.parse().unwrap();
            let back = exp(&ln(&x).unwrap());
            let drift = (&back - &x).abs();
            let bound = &(&x + &dec!("1")) * &dec!("1e-36");
            assert!(drift <= bound, "exp(ln({})) drifted by {}", s, drift);
        }
    }

    #[test]
    fn test_ln_exp_round_trip() {
        let x = dec!("3.5");
        let back = ln(&exp(&x)).unwrap();
        assert!((&back - &x).abs() <= dec!("1e-36"), "ln(exp(3.5)) got: {}", back);
    }

    #[test]
    fn test_log_bases() {
        let v = log10(&dec!("1000")).unwrap();
        assert!((&v - &dec!("3")).abs() <= dec!("1e-36"), "log10(1000) got: {}", v);
        let v = log2(&dec!("8")).unwrap();
        assert!((&v - &dec!("3")).abs() <= dec!("1e-36"), "log2(8) got: {}", v);
        let v = log(&dec!("3"), &dec!("81")).unwrap();
        assert!((&v - &dec!("4")).abs() <= dec!("1e-36"), "log_3(81) got: {}", v);
    }

    #[test]
    fn test_pow_integer_exponents() {
        assert_eq!(pow(&dec!("2"), &dec!("10")).unwrap(), dec!("1024"));
        assert_eq!(pow(&dec!("2"), &dec!("-2")).unwrap(), dec!("0.25"));
        assert_eq!(pow(&dec!("-3"), &dec!("3")).unwrap(), dec!("-27"));
        assert_eq!(pow(&dec!("7"), &dec!("0")).unwrap(), dec!("1"));
    }

    #[test]
    fn test_pow_fractional_exponent() {
        let v = pow(&dec!("9"), &dec!("0.5")).unwrap();
        assert!((&v - &dec!("3")).abs() <= dec!("1e-35"), "9^0.5 got: {}", v);
    }

    #[test]
    fn test_zero_to_zero_is_indeterminate() {
        assert!(pow(&dec!("0"), &dec!("0")).is_err());
        let lenient = PrecisionConfig::default().with_strict(false);
        let v = pow(&dec!("0").with_config(lenient), &dec!("0")).unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn test_pow_negative_base_fractional_exponent() {
        assert!(pow(&dec!("-4"), &dec!("0.5")).is_err());
    }

    #[test]
    fn test_sqrt_two_to_forty_digits() {
        let v = sqrt(&dec!("2")).unwrap();
        assert!(
            v.to_string().starts_with("1.41421356237309504880168872420969"),
            "sqrt(2), got: {}",
            v
        );
    }

    #[test]
    fn test_sqrt_domain() {
        assert!(sqrt(&dec!("-1")).is_err());
        assert!(sqrt(&dec!("0")).unwrap().is_zero());
    }

    #[test]
    fn test_newton_sqrt_matches_known_digits() {
        let v = newton_sqrt(&dec!("2"));
        assert!(
            v.to_string().starts_with("1.414213562373095048801688724209698078569"),
            "newton sqrt(2), got: {}",
            v
        );
    }

    #[test]
    fn test_powi_squaring() {
        assert_eq!(powi(&dec!("3"), 5), dec!("243"));
        assert_eq!(powi(&dec!("2"), -3), dec!("0.125"));
        assert_eq!(powi(&dec!("5"), 0), dec!("1"));
    }
}
