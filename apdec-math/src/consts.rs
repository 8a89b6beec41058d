//! Precomputed constants
//!
//! A `Constants` instance materialises every stored constant at its
//! config's precision, in dependency order: e from its Taylor series,
//! 1/π from the Chudnovsky series, then π and its derived values, then
//! the logarithmic family and the square roots. Guard digits are dropped
//! by truncation so the stored digits are a prefix of the true expansion.

use crate::functions::{e_value, lit, lit_u, ln2_value, ln_lenient, newton_sqrt, widened, WORK_GUARD};
use apdec_core::{Decimal, PrecisionConfig};

const CHUDNOVSKY_A: u128 = 545_140_134;
const CHUDNOVSKY_B: u128 = 13_591_409;
// 640320³
const CHUDNOVSKY_C3: u128 = 262_537_412_640_768_000;

/// π at (beyond) the config's working precision.
///
/// Chudnovsky in ratio form: the running term carries the factorials and
/// the (−C³)ᵏ power implicitly, so no intermediate ever saturates. Each
/// term adds about 14 digits; the term count scales with `decimals` and
/// `pi_terms` acts as a floor.
pub(crate) fn pi_value(cfg: &PrecisionConfig) -> Decimal {
    let work = widened(cfg, WORK_GUARD);
    let terms = cfg.pi_terms.max(cfg.decimals / 14 + 2);
    let mut term = lit_u(CHUDNOVSKY_B, &work);
    let mut sum = term.clone();
    for k in 0..terms.saturating_sub(1) {
        let k = k as u128;
        let num = (6 * k + 1)
            * (6 * k + 2)
            * (6 * k + 3)
            * (6 * k + 4)
            * (6 * k + 5)
            * (6 * k + 6)
            * (CHUDNOVSKY_B + CHUDNOVSKY_A * (k + 1));
        let den1 = (3 * k + 1) * (3 * k + 2) * (3 * k + 3) * (k + 1) * (k + 1) * (k + 1);
        let den2 = CHUDNOVSKY_B + CHUDNOVSKY_A * k;
        let den = &(&lit_u(den1, &work) * &lit_u(den2, &work)) * &lit_u(CHUDNOVSKY_C3, &work);
        term = -&(&(&term * &lit_u(num, &work)) / &den);
        sum = &sum + &term;
        if term.is_zero() {
            break;
        }
    }
    // 1/π = 12·Σ / √(C³), with the root bootstrapped by Newton
    let c = lit(640_320, &work);
    let c_sqrt3 = &c * &newton_sqrt(&c);
    let inv_pi = &(&sum * &lit(12, &work)) / &c_sqrt3;
    &lit(1, &work) / &inv_pi
}

/// Constants table at a fixed precision config
#[derive(Debug, Clone)]
pub struct Constants {
    config: PrecisionConfig,
    e: Decimal,
    pi: Decimal,
    tau: Decimal,
    frac_pi_2: Decimal,
    frac_pi_4: Decimal,
    frac_1_pi: Decimal,
    frac_2_pi: Decimal,
    frac_2_sqrt_pi: Decimal,
    ln_2: Decimal,
    ln_10: Decimal,
    log2_e: Decimal,
    log10_e: Decimal,
    sqrt_2: Decimal,
    frac_1_sqrt_2: Decimal,
}

impl Constants {
    /// Materialise at the default config
    pub fn new() -> Self {
        Self::with_config(PrecisionConfig::default())
    }

    /// Materialise every constant at the given config
    pub fn with_config(config: PrecisionConfig) -> Self {
        tracing::debug!(decimals = config.decimals, "materialising constants table");
        let work = widened(&config, WORK_GUARD);
        let cut = |v: Decimal| v.truncate_to(config.decimals).with_config(config.clone());
        let one = lit(1, &work);
        let two = lit(2, &work);

        let e = e_value(&work);
        let pi = pi_value(&config);
        let tau = &pi * &two;
        let frac_pi_2 = &pi / &two;
        let frac_pi_4 = &pi / &lit(4, &work);
        let frac_1_pi = &one / &pi;
        let frac_2_pi = &two / &pi;
        let frac_2_sqrt_pi = &two / &newton_sqrt(&pi.clone().with_config(work.clone()));
        let ln_2 = ln2_value(&work);
        let ln_10 = ln_lenient(&lit(10, &work));
        let log2_e = &one / &ln_2;
        let log10_e = &one / &ln_10;
        let sqrt_2 = newton_sqrt(&two);
        let frac_1_sqrt_2 = &one / &sqrt_2;

        Self {
            e: cut(e),
            pi: cut(pi),
            tau: cut(tau),
            frac_pi_2: cut(frac_pi_2),
            frac_pi_4: cut(frac_pi_4),
            frac_1_pi: cut(frac_1_pi),
            frac_2_pi: cut(frac_2_pi),
            frac_2_sqrt_pi: cut(frac_2_sqrt_pi),
            ln_2: cut(ln_2),
            ln_10: cut(ln_10),
            log2_e: cut(log2_e),
            log10_e: cut(log10_e),
            sqrt_2: cut(sqrt_2),
            frac_1_sqrt_2: cut(frac_1_sqrt_2),
            config,
        }
    }

    pub fn config(&self) -> &PrecisionConfig {
        &self.config
    }

    // ========== Accessors ==========

    pub fn e(&self) -> Decimal {
        self.e.clone()
    }

    pub fn pi(&self) -> Decimal {
        self.pi.clone()
    }

    /// 2π
    pub fn tau(&self) -> Decimal {
        self.tau.clone()
    }

    pub fn frac_pi_2(&self) -> Decimal {
        self.frac_pi_2.clone()
    }

    pub fn frac_pi_4(&self) -> Decimal {
        self.frac_pi_4.clone()
    }

    pub fn frac_1_pi(&self) -> Decimal {
        self.frac_1_pi.clone()
    }

    pub fn frac_2_pi(&self) -> Decimal {
        self.frac_2_pi.clone()
    }

    pub fn frac_2_sqrt_pi(&self) -> Decimal {
        self.frac_2_sqrt_pi.clone()
    }

    pub fn ln_2(&self) -> Decimal {
        self.ln_2.clone()
    }

    pub fn ln_10(&self) -> Decimal {
        self.ln_10.clone()
    }

    pub fn log2_e(&self) -> Decimal {
        self.log2_e.clone()
    }

    pub fn log10_e(&self) -> Decimal {
        self.log10_e.clone()
    }

    pub fn sqrt_2(&self) -> Decimal {
        self.sqrt_2.clone()
    }

    pub fn frac_1_sqrt_2(&self) -> Decimal {
        self.frac_1_sqrt_2.clone()
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::new()
    }
}
