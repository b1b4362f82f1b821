//! Numbers and numerics.

use bytemuck::Pod;
use num_traits as nt;
use std::fmt;

/// Gathers what the vector operations need from a component type.
///
/// The two implementors are [`f64`] for real-domain vectors and [`i64`] for
/// integer-domain vectors. Geometric results (lengths, normalized components)
/// are always computed with real numbers and then converted back with
/// [`Scalar::from_real`], which truncates for integers.
pub trait Scalar:
    nt::Num + nt::Signed + Copy + PartialOrd + Pod + fmt::Debug + fmt::Display
{
    /// The value `0`.
    const ZERO: Self;

    /// Converts the value to a real number.
    fn to_real(self) -> f64;

    /// Converts a real number to this scalar type. For integers the
    /// fractional part is discarded (truncation toward zero), and values
    /// outside the representable range saturate.
    fn from_real(value: f64) -> Self;

    /// Restricts the value to the closed interval `[0, 1]` as
    /// `max(min(value, 1), 0)`.
    fn unit_clamped(self) -> Self;

    /// Scales the value by 255, truncates it to an integer and keeps the
    /// lowest 8 bits.
    fn color_channel(self) -> u32;

    /// Adds, wrapping around at the bounds of integer types.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtracts, wrapping around at the bounds of integer types.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplies, wrapping around at the bounds of integer types.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Divides, truncating toward zero for integers. The only integer
    /// overflow, `MIN / -1`, wraps to `MIN`. Callers must reject a zero
    /// divisor.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// The absolute value. For integers, `MIN` maps to itself.
    fn wrapping_abs(self) -> Self;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn to_real(self) -> f64 {
        self
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value
    }

    #[inline]
    fn unit_clamped(self) -> Self {
        self.min(1.0).max(0.0)
    }

    #[inline]
    fn color_channel(self) -> u32 {
        ((self * 255.0) as i64 & 0xff) as u32
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn wrapping_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn wrapping_abs(self) -> Self {
        self.abs()
    }
}

impl Scalar for i64 {
    const ZERO: Self = 0;

    #[inline]
    fn to_real(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value as i64
    }

    #[inline]
    fn unit_clamped(self) -> Self {
        self.min(1).max(0)
    }

    #[inline]
    fn color_channel(self) -> u32 {
        (i64::wrapping_mul(self, 255) & 0xff) as u32
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i64::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        i64::wrapping_sub(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        i64::wrapping_mul(self, rhs)
    }

    #[inline]
    fn wrapping_div(self, rhs: Self) -> Self {
        i64::wrapping_div(self, rhs)
    }

    #[inline]
    fn wrapping_abs(self) -> Self {
        i64::wrapping_abs(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_from_real_truncates_toward_zero() {
        assert_eq!(i64::from_real(1.414), 1);
        assert_eq!(i64::from_real(0.999), 0);
        assert_eq!(i64::from_real(-2.7), -2);
        assert_eq!(i64::from_real(5.0), 5);
    }

    #[test]
    fn integer_from_real_saturates_out_of_range() {
        assert_eq!(i64::from_real(f64::INFINITY), i64::MAX);
        assert_eq!(i64::from_real(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(i64::from_real(f64::NAN), 0);
    }

    #[test]
    fn unit_clamping_works() {
        assert_eq!(1.5_f64.unit_clamped(), 1.0);
        assert_eq!((-0.5_f64).unit_clamped(), 0.0);
        assert_eq!(0.25_f64.unit_clamped(), 0.25);
        assert_eq!(7_i64.unit_clamped(), 1);
        assert_eq!((-3_i64).unit_clamped(), 0);
        assert_eq!(0_i64.unit_clamped(), 0);
    }

    #[test]
    fn real_color_channel_truncates_instead_of_rounding() {
        assert_eq!(1.0_f64.color_channel(), 0xff);
        assert_eq!(0.5_f64.color_channel(), 127);
        assert_eq!(0.999_f64.color_channel(), 254);
        assert_eq!(0.0_f64.color_channel(), 0);
    }

    #[test]
    fn color_channel_keeps_lowest_byte_of_out_of_range_values() {
        // 2 * 255 = 510 = 0x1fe
        assert_eq!(2.0_f64.color_channel(), 0xfe);
        assert_eq!(2_i64.color_channel(), 0xfe);
        // -1 * 255 = -255, whose lowest byte is 0x01
        assert_eq!((-1.0_f64).color_channel(), 0x01);
        assert_eq!((-1_i64).color_channel(), 0x01);
    }

    #[test]
    fn integer_arithmetic_wraps_at_bounds() {
        assert_eq!(Scalar::wrapping_add(i64::MAX, 1), i64::MIN);
        assert_eq!(Scalar::wrapping_sub(i64::MIN, 1), i64::MAX);
        assert_eq!(Scalar::wrapping_mul(i64::MAX, 2), -2);
        assert_eq!(Scalar::wrapping_div(i64::MIN, -1), i64::MIN);
        assert_eq!(Scalar::wrapping_div(-7_i64, 2), -3);
        assert_eq!(Scalar::wrapping_abs(i64::MIN), i64::MIN);
        assert_eq!(Scalar::wrapping_abs(-5_i64), 5);
    }

    #[test]
    fn real_arithmetic_is_plain_arithmetic() {
        assert_eq!(Scalar::wrapping_add(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(Scalar::wrapping_div(1.0_f64, 4.0), 0.25);
        assert_eq!(Scalar::wrapping_abs(-2.5_f64), 2.5);
    }

    #[test]
    fn integer_color_channel_works() {
        assert_eq!(1_i64.color_channel(), 0xff);
        assert_eq!(0_i64.color_channel(), 0);
    }
}
