//! Error function, factorial and combinatorics

use super::{finish, lit, lit_u, newton_sqrt, widened, WORK_GUARD};
use crate::consts::pi_value;
use apdec_core::{Decimal, DecimalError, Outcome};

/// erf(x) = (2/√π)·Σ(-1)ⁿ·x^(2n+1)/(n!·(2n+1))
pub fn erf(x: &Decimal) -> Decimal {
    if x.is_nan() || x.is_zero() {
        return x.clone();
    }
    let cfg = x.config().clone();
    if x.is_infinite() {
        return if x.is_negative() { lit(-1, &cfg) } else { lit(1, &cfg) };
    }
    let work = widened(&cfg, WORK_GUARD);
    let xw = x.clone().with_config(work.clone());
    let x2 = &xw * &xw;
    // signed power x^(2n+1)·(-1)ⁿ and running n!
    let mut p = xw;
    let mut fact = lit(1, &work);
    let mut sum = lit(0, &work);
    for n in 0..work.e_terms as i64 {
        if n > 0 {
            p = &(-&p) * &x2;
            fact = &fact * &lit(n, &work);
        }
        let term = &p / &(&fact * &lit(2 * n + 1, &work));
        sum = &sum + &term;
        if term.is_zero() {
            break;
        }
    }
    let scale = &lit(2, &work) / &newton_sqrt(&pi_value(&work));
    finish(&sum * &scale, &cfg)
}

/// n! for a non-negative integer argument, by iterated multiplication.
/// Saturation cuts the loop short once the product is past the precision
/// bound.
pub fn factorial(x: &Decimal) -> Result<Decimal, DecimalError> {
    if x.is_nan() {
        return Ok(x.clone());
    }
    let cfg = x.config().clone();
    if !x.is_integer() || x.is_negative() {
        return Outcome::illegal(
            Decimal::nan().with_config(cfg),
            DecimalError::Domain("factorial requires a non-negative integer".to_string()),
        )
        .strict(x.config().strict);
    }
    let n = match x.to_u64() {
        Ok(n) => n,
        // an integer too wide for u64 overflows any finite precision
        Err(_) => return Ok(Decimal::infinity().with_config(cfg)),
    };
    let mut acc = lit(1, &cfg);
    for k in 2..=n {
        acc = &acc * &lit_u(u128::from(k), &cfg);
        if acc.is_infinite() {
            break;
        }
    }
    Ok(acc)
}

fn combinatoric_args(n: &Decimal, k: &Decimal) -> Result<(), DecimalError> {
    if !n.is_integer() || !k.is_integer() || n.is_negative() || k.is_negative() {
        return Err(DecimalError::Domain(
            "combinatorics require non-negative integers".to_string(),
        ));
    }
    if k > n {
        return Err(DecimalError::Domain("selection larger than population".to_string()));
    }
    Ok(())
}

/// Binomial coefficient C(n, k) via the cancelling product
/// Π (n-k+i)/i, which stays integral at every step
pub fn binomial(n: &Decimal, k: &Decimal) -> Result<Decimal, DecimalError> {
    if n.is_nan() || k.is_nan() {
        return Ok(Decimal::nan().with_config(n.config().clone()));
    }
    let cfg = n.config().clone();
    if let Err(e) = combinatoric_args(n, k) {
        return Outcome::illegal(Decimal::nan().with_config(cfg), e).strict(n.config().strict);
    }
    let kk = match k.to_u64() {
        Ok(kk) => kk,
        Err(_) => return Ok(Decimal::infinity().with_config(cfg)),
    };
    let base = &n.clone().with_config(cfg.clone()) - &k.clone().with_config(cfg.clone());
    let mut acc = lit(1, &cfg);
    for i in 1..=kk {
        let num = &base + &lit_u(u128::from(i), &cfg);
        acc = &(&acc * &num) / &lit_u(u128::from(i), &cfg);
        if acc.is_infinite() {
            break;
        }
    }
    Ok(acc)
}

/// Permutations nPr = n·(n-1)···(n-k+1)
pub fn npr(n: &Decimal, k: &Decimal) -> Result<Decimal, DecimalError> {
    if n.is_nan() || k.is_nan() {
        return Ok(Decimal::nan().with_config(n.config().clone()));
    }
    let cfg = n.config().clone();
    if let Err(e) = combinatoric_args(n, k) {
        return Outcome::illegal(Decimal::nan().with_config(cfg), e).strict(n.config().strict);
    }
    let kk = match k.to_u64() {
        Ok(kk) => kk,
        Err(_) => return Ok(Decimal::infinity().with_config(cfg)),
    };
    let nn = n.clone().with_config(cfg.clone());
    let mut acc = lit(1, &cfg);
    for i in 0..kk {
        acc = &acc * &(&nn - &lit_u(u128::from(i), &cfg));
        if acc.is_infinite() {
            break;
        }
    }
    Ok(acc)
}

/// Combinations nCr, the binomial coefficient
pub fn ncr(n: &Decimal, k: &Decimal) -> Result<Decimal, DecimalError> {
    binomial(n, k)
}
