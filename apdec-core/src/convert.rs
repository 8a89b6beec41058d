//! Conversions: parsing, formatting, hex, and primitive narrowing
//!
//! The string forms are the stream contract: `Display` emits the
//! canonical decimal form and `FromStr` parses it back, including the
//! special-value words. Floats are routed through the shortest
//! round-trip format, so the parsed value is exactly the printed one.

use crate::arith;
use crate::decimal::{Decimal, Kind, Sign};
use crate::digits::DigitBuffer;
use crate::error::{DecimalError, Outcome};
use crate::PrecisionConfig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

fn parse_magnitude(s: &str) -> Result<DigitBuffer, ()> {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], s[i + 1..].parse::<i32>().map_err(|_| ())?),
        None => (s, 0),
    };
    let mut digits = VecDeque::new();
    let mut decimals = 0usize;
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => {
                digits.push_back(c as u8 - b'0');
                seen_digit = true;
                if seen_point {
                    decimals += 1;
                }
            }
            '.' if !seen_point => seen_point = true,
            _ => return Err(()),
        }
    }
    if !seen_digit {
        return Err(());
    }
    // Leading integer zeros go; the fractional tail is kept as written and
    // only trimmed by later arithmetic.
    let mut buf = DigitBuffer { digits, decimals };
    buf.trim_leading();
    if exponent > 0 {
        buf = buf.scaled_up(exponent as usize);
    } else if exponent < 0 {
        buf = buf.scaled_down(exponent.unsigned_abs() as usize);
    }
    Ok(buf)
}

impl Decimal {
    /// Parse with the default config; malformed input is an error
    pub fn parse(s: &str) -> Result<Decimal, DecimalError> {
        Self::parse_with(s, PrecisionConfig::default())
    }

    /// Parse with an explicit config; under a lenient config malformed
    /// input becomes NaN instead of an error
    pub fn parse_with(s: &str, config: PrecisionConfig) -> Result<Decimal, DecimalError> {
        let strict = config.strict;
        let t = s.trim();
        let (sign, rest) = match t.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &t[1..]),
            Some(b'+') => (Sign::Positive, &t[1..]),
            _ => (Sign::Positive, t),
        };
        if rest.eq_ignore_ascii_case("nan") {
            return Ok(Self::nan_with(config));
        }
        if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
            return Ok(Self::infinity_with(sign, config));
        }
        match parse_magnitude(rest) {
            Ok(buf) => Ok(Self::finite(sign, buf, config)),
            Err(()) => {
                Outcome::illegal(Self::nan_with(config), DecimalError::Parse(s.to_string()))
                    .strict(strict)
            }
        }
    }

    /// Parse a hex integer (no `0x` prefix) by repeated multiply-by-16
    pub fn from_hex(s: &str) -> Result<Decimal, DecimalError> {
        let t = s.trim();
        let (sign, rest) = match t.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &t[1..]),
            Some(b'+') => (Sign::Positive, &t[1..]),
            _ => (Sign::Positive, t),
        };
        if rest.is_empty() {
            return Err(DecimalError::Parse(s.to_string()));
        }
        let sixteen = DigitBuffer::from_int(16);
        let mut acc = DigitBuffer::zero();
        for c in rest.chars() {
            let v = c.to_digit(16).ok_or_else(|| DecimalError::Parse(s.to_string()))?;
            acc = arith::add(&arith::mul(&acc, &sixteen), &DigitBuffer::from_int(u128::from(v)));
        }
        Ok(Self::finite(sign, acc, PrecisionConfig::default()))
    }

    /// Hex form of the integer portion (floor toward zero), by repeated
    /// divide-by-16
    pub fn to_hex(&self, lowercase: bool) -> String {
        match self.kind {
            Kind::Nan => return "NaN".to_string(),
            Kind::Infinite => {
                return if self.sign == Sign::Negative { "-inf" } else { "inf" }.to_string()
            }
            Kind::Finite => {}
        }
        let mut m = self.magnitude.narrowed(0, false);
        if m.is_zero() {
            return "0".to_string();
        }
        let mut out = Vec::new();
        while !m.is_zero() {
            let (q, r) = m.divmod_small(16);
            let c = std::char::from_digit(u32::from(r), 16).unwrap_or('0');
            out.push(if lowercase { c } else { c.to_ascii_uppercase() });
            m = q;
        }
        if self.sign == Sign::Negative {
            out.push('-');
        }
        out.iter().rev().collect()
    }

    /// Canonical form padded to exactly `config.decimals` fractional digits
    pub fn to_fixed_string(&self) -> String {
        if !self.is_finite() {
            return self.to_string();
        }
        let places = self.config.decimals;
        let m = self.magnitude.narrowed(places, !self.config.truncate);
        let mut s = String::new();
        if self.sign == Sign::Negative && !m.is_zero() {
            s.push('-');
        }
        for i in 0..m.int_len() {
            s.push(char::from(b'0' + m.digits[i]));
        }
        if places > 0 {
            s.push('.');
            for j in 0..places {
                let d = if j < m.decimals() { m.digits[m.int_len() + j] } else { 0 };
                s.push(char::from(b'0' + d));
            }
        }
        s
    }

    fn integer_string(&self) -> String {
        let t = self.magnitude.narrowed(0, false);
        let mut s = String::new();
        if self.sign == Sign::Negative && !t.is_zero() {
            s.push('-');
        }
        for &d in &t.digits {
            s.push(char::from(b'0' + d));
        }
        s
    }

    /// Total conversion to f64; precision loss is expected
    pub fn to_f64(&self) -> f64 {
        match self.kind {
            Kind::Nan => f64::NAN,
            Kind::Infinite => {
                if self.sign == Sign::Negative {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            Kind::Finite => self.to_string().parse().unwrap_or(0.0),
        }
    }

    /// Total conversion to f32; precision loss is expected
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

// ========== Display / FromStr ==========

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Nan => write!(f, "NaN"),
            Kind::Infinite => {
                if self.sign == Sign::Negative {
                    write!(f, "-inf")
                } else {
                    write!(f, "inf")
                }
            }
            Kind::Finite => {
                if self.sign == Sign::Negative {
                    write!(f, "-")?;
                }
                for i in 0..self.magnitude.int_len() {
                    write!(f, "{}", self.magnitude.digits[i])?;
                }
                if self.magnitude.decimals() > 0 {
                    write!(f, ".")?;
                    for j in self.magnitude.int_len()..self.magnitude.len() {
                        write!(f, "{}", self.magnitude.digits[j])?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ========== Primitive constructors ==========

macro_rules! impl_from_signed {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Decimal {
            fn from(n: $t) -> Self {
                let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                Self::finite(sign, DigitBuffer::from_int(u128::from(n.unsigned_abs())), PrecisionConfig::default())
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Decimal {
            fn from(n: $t) -> Self {
                Self::finite(Sign::Positive, DigitBuffer::from_int(u128::from(n)), PrecisionConfig::default())
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<i128> for Decimal {
    fn from(n: i128) -> Self {
        let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
        Self::finite(sign, DigitBuffer::from_int(n.unsigned_abs()), PrecisionConfig::default())
    }
}

impl From<f64> for Decimal {
    fn from(f: f64) -> Self {
        if f.is_nan() {
            return Self::nan();
        }
        if f.is_infinite() {
            return if f < 0.0 { Self::neg_infinity() } else { Self::infinity() };
        }
        format!("{}", f).parse().unwrap_or_else(|_| Self::nan())
    }
}

impl From<f32> for Decimal {
    fn from(f: f32) -> Self {
        if f.is_nan() {
            return Self::nan();
        }
        if f.is_infinite() {
            return if f < 0.0 { Self::neg_infinity() } else { Self::infinity() };
        }
        format!("{}", f).parse().unwrap_or_else(|_| Self::nan())
    }
}

// ========== Primitive narrowing ==========

macro_rules! impl_narrowing {
    ($($t:ty => $fits:ident, $to:ident);* $(;)?) => {$(
        impl Decimal {
            /// True iff the value is finite, integral and inside the
            /// target range
            pub fn $fits(&self) -> bool {
                self.is_integer()
                    && *self >= Decimal::from(<$t>::MIN)
                    && *self <= Decimal::from(<$t>::MAX)
            }

            /// Narrow to the target type. A misfit raises under a strict
            /// config and saturates to the nearest representable value
            /// otherwise (NaN saturates to 0).
            pub fn $to(&self) -> Result<$t, DecimalError> {
                if self.$fits() {
                    return self.integer_string().parse::<$t>().map_err(|_| DecimalError::Narrow {
                        target: stringify!($t),
                        value: self.to_string(),
                    });
                }
                if self.config.strict {
                    return Err(DecimalError::Narrow {
                        target: stringify!($t),
                        value: self.to_string(),
                    });
                }
                if self.is_nan() {
                    return Ok(0);
                }
                if *self <= Decimal::from(<$t>::MIN) {
                    return Ok(<$t>::MIN);
                }
                if *self >= Decimal::from(<$t>::MAX) {
                    return Ok(<$t>::MAX);
                }
                Ok(self.trunc().integer_string().parse::<$t>().unwrap_or_default())
            }
        }
    )*};
}

impl_narrowing! {
    i8 => fits_i8, to_i8;
    i16 => fits_i16, to_i16;
    i32 => fits_i32, to_i32;
    i64 => fits_i64, to_i64;
    u8 => fits_u8, to_u8;
    u16 => fits_u16, to_u16;
    u32 => fits_u32, to_u32;
    u64 => fits_u64, to_u64;
}

// ========== Serde ==========

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
