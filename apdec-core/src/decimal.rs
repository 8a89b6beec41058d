//! The decimal value type
//!
//! A `Decimal` wraps a digit magnitude with a sign, a kind tag for the
//! IEEE-style special values, and an embedded `PrecisionConfig`. Values
//! are immutable; every operation returns a fresh value. Special-value
//! algebra is resolved on the tags before any digit work happens, and is
//! independent of the `strict` flag.

use crate::arith;
use crate::digits::DigitBuffer;
use crate::div;
use crate::error::{DecimalError, Outcome};
use crate::PrecisionConfig;
use std::cmp::Ordering;

/// Sign of a decimal value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product or quotient
    pub fn xor(a: Self, b: Self) -> Self {
        if a == b {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Value kind: finite number, signed infinity, or not-a-number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Finite,
    Infinite,
    Nan,
}

/// Signed arbitrary-precision fixed-point decimal number.
///
/// Carries its own `PrecisionConfig`; binary operations adopt the left
/// operand's config with `decimals` widened to cover both operands.
#[derive(Debug, Clone)]
pub struct Decimal {
    pub(crate) sign: Sign,
    pub(crate) kind: Kind,
    pub(crate) magnitude: DigitBuffer,
    pub(crate) config: PrecisionConfig,
}

impl Decimal {
    // ========== Construction ==========

    pub fn zero() -> Self {
        Self::finite(Sign::Positive, DigitBuffer::zero(), PrecisionConfig::default())
    }

    pub fn one() -> Self {
        Self::finite(Sign::Positive, DigitBuffer::from_int(1), PrecisionConfig::default())
    }

    pub fn nan() -> Self {
        Self::nan_with(PrecisionConfig::default())
    }

    pub fn infinity() -> Self {
        Self::infinity_with(Sign::Positive, PrecisionConfig::default())
    }

    pub fn neg_infinity() -> Self {
        Self::infinity_with(Sign::Negative, PrecisionConfig::default())
    }

    pub(crate) fn nan_with(config: PrecisionConfig) -> Self {
        Self { sign: Sign::Positive, kind: Kind::Nan, magnitude: DigitBuffer::zero(), config }
    }

    pub(crate) fn infinity_with(sign: Sign, config: PrecisionConfig) -> Self {
        Self { sign, kind: Kind::Infinite, magnitude: DigitBuffer::zero(), config }
    }

    /// A finite value; zero is normalized to a positive sign
    pub(crate) fn finite(sign: Sign, magnitude: DigitBuffer, config: PrecisionConfig) -> Self {
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
        Self { sign, kind: Kind::Finite, magnitude, config }
    }

    /// A finite arithmetic result: collapses to ±∞ when the magnitude can
    /// no longer be told apart from infinity at the governing precision,
    /// i.e. once it exceeds 10^decimals
    pub(crate) fn saturating(sign: Sign, magnitude: DigitBuffer, config: PrecisionConfig) -> Self {
        if magnitude.exceeds_power_of_ten(config.decimals) {
            return Self::infinity_with(sign, config);
        }
        Self::finite(sign, magnitude, config)
    }

    /// Re-apply the saturation bound of the embedded config; finite
    /// values past it collapse to ±∞
    pub fn saturated(self) -> Decimal {
        if self.kind == Kind::Finite {
            return Self::saturating(self.sign, self.magnitude, self.config);
        }
        self
    }

    // ========== Predicates and accessors ==========

    pub fn is_nan(&self) -> bool {
        self.kind == Kind::Nan
    }

    pub fn is_infinite(&self) -> bool {
        self.kind == Kind::Infinite
    }

    pub fn is_finite(&self) -> bool {
        self.kind == Kind::Finite
    }

    pub fn is_zero(&self) -> bool {
        self.kind == Kind::Finite && self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.is_nan() && self.sign == Sign::Negative
    }

    pub fn is_positive(&self) -> bool {
        !self.is_nan() && self.sign == Sign::Positive
    }

    /// Whether the value is finite with a zero fractional part
    pub fn is_integer(&self) -> bool {
        self.kind == Kind::Finite && self.magnitude.frac_is_zero()
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Current fractional digit count
    pub fn decimals(&self) -> usize {
        self.magnitude.decimals()
    }

    /// Current integer digit count
    pub fn integer_digits(&self) -> usize {
        self.magnitude.int_len()
    }

    pub fn config(&self) -> &PrecisionConfig {
        &self.config
    }

    /// Attach a config; `decimals` is widened to the value's current
    /// fractional length so precision is never silently lost
    pub fn with_config(mut self, mut config: PrecisionConfig) -> Self {
        if config.decimals < self.magnitude.decimals() {
            config.decimals = self.magnitude.decimals();
        }
        self.config = config;
        self
    }

    /// Left operand's config, widened to both operands' fractional lengths
    fn joined(a: &Decimal, b: &Decimal) -> PrecisionConfig {
        let mut config = a.config.clone();
        config.decimals = config
            .decimals
            .max(a.magnitude.decimals())
            .max(b.magnitude.decimals());
        config
    }

    // ========== Sign-level operations ==========

    pub(crate) fn negated(&self) -> Decimal {
        let mut out = self.clone();
        if !out.is_nan() && !out.is_zero() {
            out.sign = out.sign.flipped();
        }
        out
    }

    pub fn abs(&self) -> Decimal {
        let mut out = self.clone();
        if !out.is_nan() {
            out.sign = Sign::Positive;
        }
        out
    }

    /// -1, 0 or +1 as a decimal; NaN stays NaN
    pub fn signum(&self) -> Decimal {
        match self.kind {
            Kind::Nan => self.clone(),
            _ if self.is_zero() => Self::finite(Sign::Positive, DigitBuffer::zero(), self.config.clone()),
            _ => Self::finite(self.sign, DigitBuffer::from_int(1), self.config.clone()),
        }
    }

    // ========== Rounding family ==========

    /// Drop the fractional part toward zero
    pub fn trunc(&self) -> Decimal {
        if !self.is_finite() {
            return self.clone();
        }
        Self::finite(self.sign, self.magnitude.narrowed(0, false), self.config.clone())
    }

    /// Largest integer not above the value
    pub fn floor(&self) -> Decimal {
        if !self.is_finite() {
            return self.clone();
        }
        let t = self.trunc();
        if self.sign == Sign::Negative && !self.magnitude.frac_is_zero() {
            let one = Self::finite(Sign::Positive, DigitBuffer::from_int(1), self.config.clone());
            return t.sub_value(&one);
        }
        t
    }

    /// Smallest integer not below the value; integral input is returned
    /// unchanged
    pub fn ceil(&self) -> Decimal {
        if !self.is_finite() || self.magnitude.frac_is_zero() {
            return self.trunc_or_self();
        }
        let t = self.trunc();
        if self.sign == Sign::Negative {
            return t;
        }
        let one = Self::finite(Sign::Positive, DigitBuffer::from_int(1), self.config.clone());
        t.add_value(&one)
    }

    fn trunc_or_self(&self) -> Decimal {
        if self.is_finite() {
            self.trunc()
        } else {
            self.clone()
        }
    }

    /// Narrow to `places` fractional digits, rounding half-up unless the
    /// config selects truncation
    pub fn round_to(&self, places: usize) -> Decimal {
        if !self.is_finite() {
            return self.clone();
        }
        Self::finite(
            self.sign,
            self.magnitude.narrowed(places, !self.config.truncate),
            self.config.clone(),
        )
    }

    /// Narrow to `places` fractional digits, always truncating toward zero
    pub fn truncate_to(&self, places: usize) -> Decimal {
        if !self.is_finite() {
            return self.clone();
        }
        Self::finite(self.sign, self.magnitude.narrowed(places, false), self.config.clone())
    }

    pub fn round(&self) -> Decimal {
        self.round_to(0)
    }

    // ========== Arithmetic ==========

    pub(crate) fn add_value(&self, rhs: &Decimal) -> Decimal {
        let config = Self::joined(self, rhs);
        match (self.kind, rhs.kind) {
            (Kind::Nan, _) | (_, Kind::Nan) => Self::nan_with(config),
            (Kind::Infinite, Kind::Infinite) => {
                if self.sign == rhs.sign {
                    Self::infinity_with(self.sign, config)
                } else {
                    Self::nan_with(config)
                }
            }
            (Kind::Infinite, Kind::Finite) => Self::infinity_with(self.sign, config),
            (Kind::Finite, Kind::Infinite) => Self::infinity_with(rhs.sign, config),
            (Kind::Finite, Kind::Finite) => {
                if self.sign == rhs.sign {
                    Self::saturating(self.sign, arith::add(&self.magnitude, &rhs.magnitude), config)
                } else {
                    match self.magnitude.cmp_magnitude(&rhs.magnitude) {
                        Ordering::Equal => Self::finite(Sign::Positive, DigitBuffer::zero(), config),
                        Ordering::Greater => {
                            Self::saturating(self.sign, arith::sub(&self.magnitude, &rhs.magnitude), config)
                        }
                        Ordering::Less => {
                            Self::saturating(rhs.sign, arith::sub(&rhs.magnitude, &self.magnitude), config)
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn sub_value(&self, rhs: &Decimal) -> Decimal {
        self.add_value(&rhs.negated())
    }

    pub(crate) fn mul_value(&self, rhs: &Decimal) -> Decimal {
        let config = Self::joined(self, rhs);
        let sign = Sign::xor(self.sign, rhs.sign);
        match (self.kind, rhs.kind) {
            (Kind::Nan, _) | (_, Kind::Nan) => Self::nan_with(config),
            (Kind::Infinite, Kind::Infinite) => Self::infinity_with(sign, config),
            (Kind::Infinite, Kind::Finite) => {
                if rhs.is_zero() {
                    Self::nan_with(config)
                } else {
                    Self::infinity_with(sign, config)
                }
            }
            (Kind::Finite, Kind::Infinite) => {
                if self.is_zero() {
                    Self::nan_with(config)
                } else {
                    Self::infinity_with(sign, config)
                }
            }
            (Kind::Finite, Kind::Finite) => {
                if self.is_zero() || rhs.is_zero() {
                    return Self::finite(Sign::Positive, DigitBuffer::zero(), config);
                }
                let product = arith::mul(&self.magnitude, &rhs.magnitude)
                    .narrowed(config.decimals, !config.truncate);
                Self::saturating(sign, product, config)
            }
        }
    }

    pub(crate) fn div_outcome(&self, rhs: &Decimal) -> Outcome {
        let config = Self::joined(self, rhs);
        let sign = Sign::xor(self.sign, rhs.sign);
        match (self.kind, rhs.kind) {
            (Kind::Nan, _) | (_, Kind::Nan) => Outcome::ok(Self::nan_with(config)),
            (Kind::Infinite, Kind::Infinite) => Outcome::ok(Self::nan_with(config)),
            (Kind::Infinite, Kind::Finite) => Outcome::ok(Self::infinity_with(sign, config)),
            (Kind::Finite, Kind::Infinite) => {
                Outcome::ok(Self::finite(Sign::Positive, DigitBuffer::zero(), config))
            }
            (Kind::Finite, Kind::Finite) => {
                if rhs.is_zero() {
                    return if self.is_zero() {
                        Outcome::illegal(Self::nan_with(config), DecimalError::DivisionByZero)
                    } else {
                        Outcome::illegal(
                            Self::infinity_with(self.sign, config),
                            DecimalError::DivisionByZero,
                        )
                    };
                }
                if self.is_zero() {
                    return Outcome::ok(Self::finite(Sign::Positive, DigitBuffer::zero(), config));
                }
                let scale = self.magnitude.decimals().max(rhs.magnitude.decimals());
                let n = self.magnitude.scaled_up(scale);
                let d = rhs.magnitude.scaled_up(scale);
                let frac = config.decimals + div::GUARD;
                let q = div::quotient(&n, &d, frac, config.div_rounds)
                    .narrowed(config.decimals, !config.truncate);
                Outcome::ok(Self::saturating(sign, q, config))
            }
        }
    }

    /// Division honoring the `strict` flag of the governing config
    pub fn checked_div(&self, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        self.div_outcome(rhs).strict(self.config.strict)
    }

    pub(crate) fn div_lenient(&self, rhs: &Decimal) -> Decimal {
        self.div_outcome(rhs).lenient()
    }

    /// Remainder `a - trunc(a/b) * b`; the sign follows the dividend.
    /// Infinite operands resolve on the tags, fmod-style: an infinite
    /// dividend has no remainder, an infinite divisor leaves the
    /// dividend whole.
    pub(crate) fn rem_outcome(&self, rhs: &Decimal) -> Outcome {
        let config = Self::joined(self, rhs);
        match (self.kind, rhs.kind) {
            (Kind::Nan, _) | (_, Kind::Nan) => Outcome::ok(Self::nan_with(config)),
            (Kind::Infinite, _) => Outcome::ok(Self::nan_with(config)),
            (Kind::Finite, Kind::Infinite) => Outcome::ok(self.clone().with_config(config)),
            (Kind::Finite, Kind::Finite) => {
                if rhs.is_zero() {
                    return Outcome::illegal(Self::nan_with(config), DecimalError::DivisionByZero);
                }
                let q = self.div_lenient(rhs).trunc();
                Outcome::ok(self.sub_value(&q.mul_value(rhs)))
            }
        }
    }

    /// Remainder honoring the `strict` flag of the governing config
    pub fn checked_rem(&self, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        self.rem_outcome(rhs).strict(self.config.strict)
    }

    pub(crate) fn rem_lenient(&self, rhs: &Decimal) -> Decimal {
        self.rem_outcome(rhs).lenient()
    }
}

// ========== Comparison ==========

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (Kind::Nan, _) | (_, Kind::Nan) => false,
            (Kind::Infinite, Kind::Infinite) => self.sign == other.sign,
            (Kind::Finite, Kind::Finite) => {
                self.sign == other.sign
                    && self.magnitude.cmp_magnitude(&other.magnitude) == Ordering::Equal
            }
            _ => false,
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.kind, other.kind) {
            (Kind::Nan, _) | (_, Kind::Nan) => None,
            (Kind::Infinite, Kind::Infinite) => Some(match (self.sign, other.sign) {
                (a, b) if a == b => Ordering::Equal,
                (Sign::Negative, Sign::Positive) => Ordering::Less,
                _ => Ordering::Greater,
            }),
            (Kind::Infinite, _) => Some(if self.sign == Sign::Positive {
                Ordering::Greater
            } else {
                Ordering::Less
            }),
            (_, Kind::Infinite) => Some(if other.sign == Sign::Positive {
                Ordering::Less
            } else {
                Ordering::Greater
            }),
            (Kind::Finite, Kind::Finite) => {
                if self.sign != other.sign {
                    return Some(if self.sign == Sign::Positive {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    });
                }
                let ord = self.magnitude.cmp_magnitude(&other.magnitude);
                Some(if self.sign == Sign::Negative { ord.reverse() } else { ord })
            }
        }
    }
}

// ========== Operators ==========

macro_rules! impl_binop {
    ($op:ident, $method:ident, $imp:ident) => {
        impl std::ops::$op for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: Decimal) -> Decimal {
                Decimal::$imp(&self, &rhs)
            }
        }

        impl<'b> std::ops::$op<&'b Decimal> for &Decimal {
            type Output = Decimal;
            fn $method(self, rhs: &'b Decimal) -> Decimal {
                Decimal::$imp(self, rhs)
            }
        }
    };
}

macro_rules! impl_assign {
    ($op:ident, $method:ident, $imp:ident) => {
        impl std::ops::$op for Decimal {
            fn $method(&mut self, rhs: Decimal) {
                *self = Decimal::$imp(&*self, &rhs);
            }
        }
    };
}

impl_binop!(Add, add, add_value);
impl_binop!(Sub, sub, sub_value);
impl_binop!(Mul, mul, mul_value);
impl_binop!(Div, div, div_lenient);
impl_binop!(Rem, rem, rem_lenient);

impl_assign!(AddAssign, add_assign, add_value);
impl_assign!(SubAssign, sub_assign, sub_value);
impl_assign!(MulAssign, mul_assign, mul_value);
impl_assign!(DivAssign, div_assign, div_lenient);
impl_assign!(RemAssign, rem_assign, rem_lenient);

impl std::ops::Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        self.negated()
    }
}

impl std::ops::Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    mod sign_algebra {
        use super::*;

        #[test]
        fn test_same_sign_addition() {
            assert_eq!(dec("1.5") + dec("2.25"), dec("3.75"));
            assert_eq!(dec("-1.5") + dec("-2.25"), dec("-3.75"));
        }

        #[test]
        fn test_mixed_sign_addition_takes_larger() {
            assert_eq!(dec("5") + dec("-8"), dec("-3"));
            assert_eq!(dec("-5") + dec("8"), dec("3"));
        }

        #[test]
        fn test_cancellation_is_exact_zero() {
            let x = dec("123.456");
            let sum = &x + &(-&x);
            assert!(sum.is_zero());
            assert!(sum.is_positive(), "zero normalizes to positive");
        }

        #[test]
        fn test_product_sign() {
            assert_eq!(dec("-3") * dec("4"), dec("-12"));
            assert_eq!(dec("-3") * dec("-4"), dec("12"));
        }
    }

    mod special_values {
        use super::*;

        #[test]
        fn test_nan_is_absorbing() {
            let n = Decimal::nan();
            let x = dec("2");
            assert!((&n + &x).is_nan());
            assert!((&x - &n).is_nan());
            assert!((&n * &x).is_nan());
            assert!((&x / &n).is_nan());
            assert!((&n % &x).is_nan());
        }

        #[test]
        fn test_infinity_arithmetic() {
            let inf = Decimal::infinity();
            let x = dec("2");
            assert!((&inf + &x).is_infinite());
            assert!((&inf + &inf).is_infinite());
            assert!((&inf - &inf).is_nan());
            assert!((&inf * &Decimal::zero()).is_nan());
            assert_eq!(&x / &inf, Decimal::zero());
            assert!((&inf / &inf).is_nan());
        }

        #[test]
        fn test_division_by_zero_lenient_operator() {
            assert!((dec("1") / dec("0")).is_infinite());
            assert!((dec("-1") / dec("0")).is_negative());
            assert!((dec("0") / dec("0")).is_nan());
        }

        #[test]
        fn test_division_by_zero_strict() {
            let err = dec("1").checked_div(&dec("0"));
            assert_eq!(err, Err(DecimalError::DivisionByZero));
        }

        #[test]
        fn test_division_by_zero_unstrict_config() {
            let cfg = PrecisionConfig::default().with_strict(false);
            let x = dec("1").with_config(cfg);
            let q = x.checked_div(&dec("0")).unwrap();
            assert!(q.is_infinite());
        }
    }

    mod comparison {
        use super::*;

        #[test]
        fn test_nan_comparisons_are_false() {
            let n = Decimal::nan();
            assert!(n != Decimal::nan());
            assert!(!(n == Decimal::nan()));
            assert!(!(n < dec("1")));
            assert!(!(n >= dec("1")));
        }

        #[test]
        fn test_infinity_ordering() {
            assert!(Decimal::infinity() > dec("1e30"));
            assert!(Decimal::neg_infinity() < dec("-1e30"));
            assert!(Decimal::infinity() == Decimal::infinity());
            assert!(Decimal::neg_infinity() < Decimal::infinity());
        }

        #[test]
        fn test_trailing_zeros_compare_equal() {
            assert_eq!(dec("1.500"), dec("1.5"));
            assert_eq!(dec("-0.0"), dec("0"));
        }

        #[test]
        fn test_negative_ordering_reverses() {
            assert!(dec("-3") < dec("-2"));
            assert!(dec("-2") < dec("1"));
        }
    }

    mod rounding {
        use super::*;

        #[test]
        fn test_floor_is_sign_aware() {
            assert_eq!(dec("2.7").floor(), dec("2"));
            assert_eq!(dec("-2.3").floor(), dec("-3"));
            assert_eq!(dec("-2").floor(), dec("-2"));
        }

        #[test]
        fn test_ceil_of_integral_is_identity() {
            assert_eq!(dec("5").ceil(), dec("5"));
            assert_eq!(dec("3.2").ceil(), dec("4"));
            assert_eq!(dec("-2.7").ceil(), dec("-2"));
        }

        #[test]
        fn test_round_half_up() {
            assert_eq!(dec("2.5").round(), dec("3"));
            assert_eq!(dec("-2.5").round(), dec("-3"));
            assert_eq!(dec("2.4").round(), dec("2"));
        }

        #[test]
        fn test_round_to_places() {
            assert_eq!(dec("1.2345").round_to(2), dec("1.23"));
            assert_eq!(dec("1.235").round_to(2), dec("1.24"));
        }

        #[test]
        fn test_truncate_config_switches_round() {
            let cfg = PrecisionConfig::default().with_truncate(true);
            let x = dec("1.239").with_config(cfg);
            assert_eq!(x.round_to(2), dec("1.23"));
        }

        #[test]
        fn test_floor_idempotent() {
            let x = dec("-7.25");
            assert_eq!(x.floor().floor(), x.floor());
        }
    }

    mod saturation {
        use super::*;

        #[test]
        fn test_multiply_saturates_to_infinity() {
            let big = dec("1e39");
            let product = &big * &dec("100");
            assert!(product.is_infinite());
            assert!(product.is_positive());
        }

        #[test]
        fn test_signed_saturation() {
            let product = dec("-1e39") * dec("100");
            assert!(product.is_infinite());
            assert!(product.is_negative());
        }

        #[test]
        fn test_below_bound_stays_finite() {
            let x = dec("1e30") * dec("10");
            assert!(x.is_finite());
        }
    }

    mod modulus {
        use super::*;

        #[test]
        fn test_sign_follows_dividend() {
            assert_eq!(dec("-5") % dec("3"), dec("-2"));
            assert_eq!(dec("5") % dec("-3"), dec("2"));
            assert_eq!(dec("5") % dec("3"), dec("2"));
        }

        #[test]
        fn test_fractional_modulus() {
            assert_eq!(dec("7") % dec("2.5"), dec("2"));
        }

        #[test]
        fn test_exact_multiple_is_zero() {
            assert!((dec("6") % dec("3")).is_zero());
            assert!((dec("-6") % dec("3")).is_zero());
        }

        #[test]
        fn test_mod_by_zero() {
            assert!((dec("5") % dec("0")).is_nan());
            assert!(dec("5").checked_rem(&dec("0")).is_err());
        }

        #[test]
        fn test_mod_with_infinities() {
            assert_eq!(dec("5") % Decimal::infinity(), dec("5"));
            assert_eq!(dec("-5") % Decimal::neg_infinity(), dec("-5"));
            assert!((Decimal::infinity() % dec("3")).is_nan());
            assert!((Decimal::neg_infinity() % Decimal::infinity()).is_nan());
        }
    }

    mod config_propagation {
        use super::*;

        #[test]
        fn test_binary_ops_adopt_left_config() {
            let cfg = PrecisionConfig::default().with_decimals(10);
            let a = dec("1").with_config(cfg);
            let b = dec("3");
            let q = &a / &b;
            assert_eq!(q.config().decimals, 10);
            assert_eq!(q.decimals(), 10);
        }

        #[test]
        fn test_decimals_widen_to_operand_fraction() {
            let cfg = PrecisionConfig::default().with_decimals(2);
            let a = dec("0.12345").with_config(cfg);
            assert_eq!(a.config().decimals, 5);
        }

        #[test]
        fn test_assign_operators() {
            let mut x = dec("10");
            x += dec("1");
            x -= dec("2");
            x *= dec("3");
            x /= dec("9");
            assert_eq!(x, dec("3"));
        }
    }
}
