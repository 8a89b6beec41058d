//! Magnitude arithmetic on digit buffers
//!
//! Sign algebra is resolved by `Decimal`; these routines see unsigned
//! magnitudes only. Operands are aligned at the decimal point by reading
//! the shorter fractional part as zero-padded.

use crate::digits::DigitBuffer;
use std::collections::VecDeque;

/// The i-th digit from the right after virtually padding `x` to `frac`
/// fractional digits
fn padded_digit(x: &DigitBuffer, frac: usize, i: usize) -> u8 {
    let pad = frac - x.decimals;
    if i < pad {
        return 0;
    }
    let j = i - pad;
    if j < x.digits.len() {
        x.digits[x.digits.len() - 1 - j]
    } else {
        0
    }
}

/// Right-to-left digit addition with carry
pub(crate) fn add(a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
    let frac = a.decimals.max(b.decimals);
    let la = a.digits.len() + frac - a.decimals;
    let lb = b.digits.len() + frac - b.decimals;
    let len = la.max(lb);
    let mut out = VecDeque::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let s = padded_digit(a, frac, i) + padded_digit(b, frac, i) + carry;
        out.push_front(s % 10);
        carry = s / 10;
    }
    if carry > 0 {
        out.push_front(carry);
    }
    DigitBuffer::from_parts(out, frac)
}

/// Right-to-left digit subtraction with borrow; requires |a| >= |b|
pub(crate) fn sub(a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
    let frac = a.decimals.max(b.decimals);
    let len = (a.digits.len() + frac - a.decimals).max(b.digits.len() + frac - b.decimals);
    let mut out = VecDeque::with_capacity(len);
    let mut borrow = 0i16;
    for i in 0..len {
        let mut d = i16::from(padded_digit(a, frac, i)) - i16::from(padded_digit(b, frac, i)) - borrow;
        if d < 0 {
            d += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push_front(d as u8);
    }
    DigitBuffer::from_parts(out, frac)
}

/// Grade-school long multiplication: per-digit partial products summed
/// into position-shifted columns, then a single carry pass
pub(crate) fn mul(a: &DigitBuffer, b: &DigitBuffer) -> DigitBuffer {
    if a.is_zero() || b.is_zero() {
        return DigitBuffer::zero();
    }
    let mut cols = vec![0u64; a.digits.len() + b.digits.len()];
    for (i, &da) in a.digits.iter().rev().enumerate() {
        if da == 0 {
            continue;
        }
        for (j, &db) in b.digits.iter().rev().enumerate() {
            cols[i + j] += u64::from(da) * u64::from(db);
        }
    }
    let mut out = VecDeque::with_capacity(cols.len() + 1);
    let mut carry = 0u64;
    for c in cols {
        let cur = c + carry;
        out.push_front((cur % 10) as u8);
        carry = cur / 10;
    }
    while carry > 0 {
        out.push_front((carry % 10) as u8);
        carry /= 10;
    }
    DigitBuffer::from_parts(out, a.decimals + b.decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn buf(digits: &[u8], decimals: usize) -> DigitBuffer {
        DigitBuffer::from_parts(digits.iter().copied().collect(), decimals)
    }

    fn assert_mag_eq(a: &DigitBuffer, b: &DigitBuffer) {
        assert_eq!(a.cmp_magnitude(b), Ordering::Equal, "expected {:?} == {:?}", a, b);
    }

    #[test]
    fn test_add_with_carry() {
        // 9.95 + 0.06 = 10.01
        let a = buf(&[9, 9, 5], 2);
        let b = buf(&[0, 0, 6], 2);
        assert_mag_eq(&add(&a, &b), &buf(&[1, 0, 0, 1], 2));
    }

    #[test]
    fn test_add_aligns_fractions() {
        // 1.5 + 0.25 = 1.75
        let a = buf(&[1, 5], 1);
        let b = buf(&[2, 5], 2);
        assert_mag_eq(&add(&a, &b), &buf(&[1, 7, 5], 2));
    }

    #[test]
    fn test_sub_with_borrow() {
        // 10.01 - 0.02 = 9.99
        let a = buf(&[1, 0, 0, 1], 2);
        let b = buf(&[0, 0, 2], 2);
        assert_mag_eq(&sub(&a, &b), &buf(&[9, 9, 9], 2));
    }

    #[test]
    fn test_sub_trims_result() {
        // 1.25 - 0.25 = 1
        let a = buf(&[1, 2, 5], 2);
        let b = buf(&[0, 2, 5], 2);
        let d = sub(&a, &b);
        assert_eq!(d.decimals(), 0);
        assert_mag_eq(&d, &DigitBuffer::from_int(1));
    }

    #[test]
    fn test_mul_fraction_lengths_sum() {
        // 1.5 * 2.25 = 3.375
        let a = buf(&[1, 5], 1);
        let b = buf(&[2, 2, 5], 2);
        assert_mag_eq(&mul(&a, &b), &buf(&[3, 3, 7, 5], 3));
    }

    #[test]
    fn test_mul_large() {
        let a = DigitBuffer::from_int(99_999);
        let b = DigitBuffer::from_int(99_999);
        assert_mag_eq(&mul(&a, &b), &DigitBuffer::from_int(9_999_800_001));
    }

    #[test]
    fn test_mul_by_zero() {
        let a = buf(&[7, 5], 1);
        assert!(mul(&a, &DigitBuffer::zero()).is_zero());
    }
}
