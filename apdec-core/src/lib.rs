//! apdec-core - arbitrary-precision fixed-point decimal arithmetic
//!
//! This crate provides the value type and its engine:
//! - `Decimal`: a signed base-10 fixed-point number with the three
//!   IEEE-style special values (±∞, NaN) and value semantics
//! - `DigitBuffer`: the underlying digit-sequence magnitude
//! - `PrecisionConfig`: iteration counts and flags every
//!   variable-precision algorithm reads
//! - `DecimalError` / `Outcome`: the strict-or-coerce error boundary
//!
//! The transcendental function suite lives in the `apdec-math` crate.

mod arith;
mod config;
mod convert;
mod decimal;
mod digits;
mod div;
mod error;

pub use config::PrecisionConfig;
pub use decimal::{Decimal, Kind, Sign};
pub use digits::DigitBuffer;
pub use error::{DecimalError, Outcome};

/// Decimal literal convenience: `dec!("3.14")` parses at use time and
/// panics on a malformed literal, like a failed numeric literal would.
#[macro_export]
macro_rules! dec {
    ($s:literal) => {
        $s.parse::<$crate::Decimal>().expect("invalid decimal literal")
    };
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{dec, Decimal, DecimalError, PrecisionConfig, Sign};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scenarios {
        use super::*;

        #[test]
        fn test_one_third_to_forty_digits() {
            let q = dec!("1") / dec!("3");
            assert_eq!(
                q.to_string(),
                "0.3333333333333333333333333333333333333333",
                "1/3 at decimals=40, got: {}",
                q
            );
        }

        #[test]
        fn test_huge_quotient_saturates_to_infinity() {
            let q = dec!("1e400") / dec!("1e-400");
            assert!(q.is_infinite(), "1e400 / 1e-400 should saturate, got: {}", q);
            assert!(q.is_positive());
        }

        #[test]
        fn test_modulus_sign_follows_dividend() {
            let r = dec!("-5") % dec!("3");
            assert_eq!(r.to_string(), "-2");
        }
    }

    mod properties {
        use super::*;

        #[test]
        fn test_add_then_subtract_restores() {
            for (a, b) in [("1.25", "3.5"), ("-0.004", "17"), ("123456.789", "-0.000001")] {
                let x: Decimal = a.parse().unwrap();
                let y: Decimal = b.parse().unwrap();
                assert_eq!(&(&x + &y) - &y, x, "({} + {}) - {} should restore", a, b, b);
            }
        }

        #[test]
        fn test_divide_then_multiply_restores() {
            for (a, b) in [("1", "3"), ("22", "7"), ("-5.5", "1.3"), ("1000000", "999983")] {
                let x: Decimal = a.parse().unwrap();
                let y: Decimal = b.parse().unwrap();
                let back = &(&x / &y) * &y;
                let drift = (&back - &x).abs();
                // one rounded quotient ulp, scaled back up by the divisor
                let bound = &(&y.abs() + &Decimal::one()) * &dec!("1e-40");
                assert!(drift <= bound, "({} / {}) * {} drifted by {}", a, b, b, drift);
            }
        }

        #[test]
        fn test_value_plus_negation_is_exact_zero() {
            for s in ["0.1", "-42", "99999.00001"] {
                let x: Decimal = s.parse().unwrap();
                assert!((&x + &(-&x)).is_zero(), "{} + (-{}) should be exactly zero", s, s);
            }
        }

        #[test]
        fn test_nan_absorbs_every_operator() {
            let n = Decimal::nan();
            let x = dec!("7");
            assert!((&n + &x).is_nan());
            assert!((&n - &x).is_nan());
            assert!((&n * &x).is_nan());
            assert!((&n / &x).is_nan());
            assert!((&n % &x).is_nan());
            assert!((-&n).is_nan());
        }

        #[test]
        fn test_floor_idempotent() {
            for s in ["2.9", "-2.9", "5", "-0.0001"] {
                let x: Decimal = s.parse().unwrap();
                assert_eq!(x.floor().floor(), x.floor(), "floor(floor({}))", s);
            }
        }

        #[test]
        fn test_parse_format_round_trip() {
            for s in ["0", "1", "-1", "0.5", "-0.007", "31415.9265", "1.500"] {
                let x: Decimal = s.parse().unwrap();
                let back: Decimal = x.to_string().parse().unwrap();
                assert_eq!(back, x, "round trip failed for {}", s);
            }
        }

        #[test]
        fn test_increment_decrement() {
            let mut x = dec!("41");
            x += Decimal::one();
            assert_eq!(x, dec!("42"));
            x -= Decimal::one();
            assert_eq!(x, dec!("41"));
        }
    }

    mod division_regimes {
        use super::*;

        #[test]
        fn test_quotient_beyond_machine_words() {
            // operands past 2^64 route through the reciprocal refinement
            let a = dec!("368934881474191032321");
            let b = dec!("2");
            assert_eq!((&a / &b).to_string(), "184467440737095516160.5");
        }

        #[test]
        fn test_wide_fractional_quotient() {
            let q = dec!("1") / dec!("81");
            assert!(
                q.to_string().starts_with("0.01234567901234567901"),
                "1/81 repeating block, got: {}",
                q
            );
        }

        #[test]
        fn test_division_without_refinement() {
            let cfg = PrecisionConfig::default().with_div_rounds(0);
            let a = dec!("1").with_config(cfg);
            let q = &a / &dec!("3");
            assert_eq!(q.to_string(), "0.3333333333333333333333333333333333333333");
        }

        #[test]
        fn test_two_thirds_rounds_last_digit() {
            let q = dec!("2") / dec!("3");
            assert_eq!(q.to_string(), "0.6666666666666666666666666666666666666667");
        }
    }
}
