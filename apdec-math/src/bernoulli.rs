//! Bernoulli numbers via the Chowla-Hartung formula
//!
//! The truncated odd-zeta sum λ(n) = Σ (2j+1)⁻ⁿ gives
//! |Bₙ| = 2·n!·λ(n)/(πⁿ·(2ⁿ−1)); multiplying by the von Staudt-Clausen
//! denominator and rounding to the nearest integer then snaps the
//! estimate onto the exact rational. Every term is rational and bounded,
//! so the formula is stable where Stirling-style asymptotics are not.

use crate::consts::pi_value;
use crate::functions::{finish, lit, lit_u, powi, widened, WORK_GUARD};
use apdec_core::{dec, Decimal, PrecisionConfig};

const ITERATIONS: usize = 40;

/// Integer headroom needed for n! above the final value's digits
pub(crate) fn factorial_margin(n: u64) -> usize {
    let log10: f64 = (2..=n).map(|k| (k as f64).log10()).sum();
    log10.ceil() as usize + 4
}

/// The nth Bernoulli number at the config's precision. B₁ is -1/2;
/// every other odd index is zero.
pub fn bernoulli(n: u64, config: &PrecisionConfig) -> Decimal {
    bernoulli_impl(n, config, None)
}

/// As `bernoulli`, reusing a caller-provided π of at least the working
/// precision; series that consume runs of Bernoulli numbers pass it to
/// avoid rebuilding the constant per index
pub(crate) fn bernoulli_seeded(n: u64, config: &PrecisionConfig, pi: &Decimal) -> Decimal {
    bernoulli_impl(n, config, Some(pi))
}

fn bernoulli_impl(n: u64, config: &PrecisionConfig, pi: Option<&Decimal>) -> Decimal {
    if n == 0 {
        return lit(1, config);
    }
    if n == 1 {
        return dec!("-0.5").with_config(config.clone());
    }
    if n % 2 == 1 {
        return lit(0, config);
    }
    let work = widened(config, WORK_GUARD + factorial_margin(n));

    let mut lambda = lit(1, &work);
    for j in 1..ITERATIONS as i64 {
        let base = &lit(1, &work) / &lit(2 * j + 1, &work);
        let term = powi(&base, n as i64);
        if term.is_zero() {
            break;
        }
        lambda = &lambda + &term;
    }

    let mut fact = lit(1, &work);
    for k in 2..=n {
        fact = &fact * &lit_u(u128::from(k), &work);
    }

    let pi_work = match pi {
        Some(pi) => pi.clone().with_config(work.clone()),
        None => pi_value(&work),
    };
    let pi_n = powi(&pi_work, n as i64);
    let two_n = powi(&lit(2, &work), n as i64);
    let magnitude = &(&(&lit(2, &work) * &fact) * &lambda)
        / &(&pi_n * &(&two_n - &lit(1, &work)));

    let denominator = lit_u(clausen_denominator(n), &work);
    let numerator = nearest_integer(&(&magnitude * &denominator), &work);
    let exact = &numerator / &denominator;
    let signed = if (n / 2) % 2 == 1 { exact } else { -exact };
    finish(signed, config)
}

/// Round a non-negative value to the nearest integer
fn nearest_integer(x: &Decimal, work: &PrecisionConfig) -> Decimal {
    let t = x.truncate_to(0);
    let frac = x - &t;
    if frac >= dec!("0.5").with_config(work.clone()) {
        &t + &lit(1, work)
    } else {
        t
    }
}

/// Product of the primes p with (p-1) | n, the von Staudt-Clausen
/// denominator of Bₙ
fn clausen_denominator(n: u64) -> u128 {
    let mut d: u128 = 1;
    for p in 2..=n + 1 {
        if n % (p - 1) == 0 && is_prime(p) {
            d *= u128::from(p);
        }
    }
    d
}

fn is_prime(p: u64) -> bool {
    if p < 2 {
        return false;
    }
    let mut k = 2;
    while k * k <= p {
        if p % k == 0 {
            return false;
        }
        k += 1;
    }
    true
}
