//! powi(x, n) implementation.
//!
//! Right-to-left binary exponentiation. The exponent bits are consumed from
//! the LSB: a set bit folds the current power-of-two factor of the base into
//! the accumulator, then the base is squared. Negative exponents work on the
//! reciprocal of the base.
//!
//! The result is not correctly rounded. Every squaring rounds, so the error
//! grows with the exponent; `powi(10.0, 308)` returns
//! `1.0000000000000006e308` (bits `0x7fe1ccf385ebc8a3`), two bits off the
//! nearest double to 1e308. The operation order is kept fixed so results are
//! reproducible bit for bit.

use super::{f32_to_bits, f64_to_bits, is_nan_bits, is_nan_bits_f32};

/// Raises `x` to the integer power `y`.
///
/// Special cases, in order of precedence:
///
/// - `x` is NaN: NaN, even for `y == 0`.
/// - `x` is `±0` and `y < 0`: `±∞` when `y` is odd (sign of the zero),
///   `+∞` when `y` is even.
/// - `y == 0`: exactly `1.0`, including `x = ±0` and `x = ±∞`.
///
/// `y = i32::MIN` is handled as the exact magnitude `2^31`.
///
/// ```
/// use intpow::fastlibm::powi;
///
/// assert_eq!(powi(2.0, 3), 8.0);
/// assert_eq!(powi(2.0, -2), 0.25);
/// assert_eq!(powi(0.0, 0), 1.0);
/// assert_eq!(powi(-0.0, -3), f64::NEG_INFINITY);
/// assert!(powi(f64::NAN, 0).is_nan());
/// ```
#[inline]
pub fn powi(mut x: f64, y: i32) -> f64 {
    if is_nan_bits(f64_to_bits(x)) {
        return f64::NAN;
    }
    let mut n = y.unsigned_abs();
    if y < 0 {
        if x == 0.0 {
            x = 1.0 / x; // +-inf
            if (n & 1) == 1 {
                // odd: keeps the sign of the zero
                return x;
            }
            return f64::INFINITY;
        }
        x = 1.0 / x;
    } else if n == 0 {
        return 1.0;
    }

    let mut v = 1.0;
    while n != 0 {
        if (n & 1) == 1 {
            v *= x;
        }
        x *= x; // may overflow
        n >>= 1;
    }
    v
}

/// Single precision [`powi`]. Same special cases and evaluation order.
#[inline]
pub fn powi_f32(mut x: f32, y: i32) -> f32 {
    if is_nan_bits_f32(f32_to_bits(x)) {
        return f32::NAN;
    }
    let mut n = y.unsigned_abs();
    if y < 0 {
        if x == 0.0 {
            x = 1.0 / x;
            if (n & 1) == 1 {
                return x;
            }
            return f32::INFINITY;
        }
        x = 1.0 / x;
    } else if n == 0 {
        return 1.0;
    }

    let mut v = 1.0;
    while n != 0 {
        if (n & 1) == 1 {
            v *= x;
        }
        x *= x;
        n >>= 1;
    }
    v
}
