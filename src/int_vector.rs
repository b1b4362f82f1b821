//! Integer-valued vectors.
//!
//! Geometric results are computed with real numbers but stored as integers,
//! truncated toward zero. The length of `(1, 1, 0)` is thus 1, and
//! normalizing a vector sets every component whose unit-length value lies
//! strictly between -1 and 1 to zero. This is how integer vectors behave, so
//! callers needing fractional precision should use the real-valued vectors in
//! [`crate::vector`].
//!
//! Component arithmetic wraps around on overflow instead of panicking, so
//! dividing `i64::MIN` by -1 gives `i64::MIN`.

use crate::ops::{Abs, Arithmetic, Clamp, ComponentMul, Cross, Distance, Dot, Normalize, Vector};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 2-dimensional vector of integers.
///
/// Only used as the source of the [`IVector4::from_ivector2`] widening, so it
/// has no operations.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IVector2 {
    x: i64,
    y: i64,
}

/// A 3-dimensional vector of integers.
///
/// Has neither [`Abs`], [`Clamp`] nor [`ComponentMul`], but does have the
/// [`Cross`] product.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IVector3 {
    x: i64,
    y: i64,
    z: i64,
}

/// A 4-dimensional vector of integers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
pub struct IVector4 {
    x: i64,
    y: i64,
    z: i64,
    w: i64,
}

impl IVector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// The components in declaration order.
    #[inline]
    pub const fn raw(&self) -> [i64; 2] {
        [self.x, self.y]
    }
}

impl From<[i64; 2]> for IVector2 {
    #[inline]
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<IVector2> for [i64; 2] {
    #[inline]
    fn from(vector: IVector2) -> Self {
        vector.raw()
    }
}

impl fmt::Display for IVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IVector2({}, {})", self.x, self.y)
    }
}

impl IVector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: i64) -> Self {
        Self::new(value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> i64 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut i64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut i64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut i64 {
        &mut self.z
    }
}

impl Vector for IVector3 {
    type Scalar = i64;
    const DIMENSION: usize = 3;
}

impl Normalize for IVector3 {}

impl Dot for IVector3 {}

impl Distance for IVector3 {}

impl Arithmetic for IVector3 {}

impl Cross for IVector3 {
    fn cross_into(left: &Self, right: &Self, result: &mut Self) {
        let x = left.y.wrapping_mul(right.z).wrapping_sub(left.z.wrapping_mul(right.y));
        let y = left.z.wrapping_mul(right.x).wrapping_sub(left.x.wrapping_mul(right.z));
        let z = left.x.wrapping_mul(right.y).wrapping_sub(left.y.wrapping_mul(right.x));
        *result = Self::new(x, y, z);
    }
}

impl From<[i64; 3]> for IVector3 {
    #[inline]
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<IVector3> for [i64; 3] {
    #[inline]
    fn from(vector: IVector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_arithmetic_ops!(IVector3, i64);
impl_component_index!(IVector3, i64);
impl_display!(IVector3, "IVector3");

impl IVector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64, w: i64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: i64) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> i64 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> i64 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut i64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut i64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut i64 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut i64 {
        &mut self.w
    }
}

impl Vector for IVector4 {
    type Scalar = i64;
    const DIMENSION: usize = 4;
}

impl Normalize for IVector4 {}

impl Abs for IVector4 {}

/// Every component ends up as either 0 or 1.
impl Clamp for IVector4 {}

impl Dot for IVector4 {}

impl Distance for IVector4 {}

impl Arithmetic for IVector4 {}

impl ComponentMul for IVector4 {}

impl From<[i64; 4]> for IVector4 {
    #[inline]
    fn from([x, y, z, w]: [i64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<IVector4> for [i64; 4] {
    #[inline]
    fn from(vector: IVector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_arithmetic_ops!(IVector4, i64);
impl_component_index!(IVector4, i64);
impl_display!(IVector4, "IVector4");

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::error::VectorError;
    use proptest::prelude::*;

    prop_compose! {
        fn ivector3_strategy(max_coord: i64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
        ) -> IVector3 {
            IVector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn ivector4_strategy(max_coord: i64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
            w in -max_coord..max_coord,
        ) -> IVector4 {
            IVector4::new(x, y, z, w)
        }
    }

    // === IVector3 Tests ===

    #[test]
    fn computing_exact_ivector3_length_works() {
        assert_eq!(IVector3::new(3, 4, 0).length(), 5);
        assert_eq!(IVector3::new(-2, 3, 6).length(), 7);
    }

    #[test]
    fn computing_inexact_ivector3_length_truncates() {
        // sqrt(2) = 1.414...
        assert_eq!(IVector3::new(1, 1, 0).length(), 1);
        // sqrt(3) = 1.732...
        assert_eq!(IVector3::new(1, 1, 1).length(), 1);
        // sqrt(8) = 2.828...
        assert_eq!(IVector3::new(2, 2, 0).length(), 2);
    }

    #[test]
    fn normalizing_ivector3_truncates_fractional_components() {
        // Length 5, so the unit components 0.6 and 0.8 truncate to zero
        assert_eq!(IVector3::new(3, 4, 0).normalized(), IVector3::zeros());
    }

    #[test]
    fn normalizing_axis_aligned_ivector3_gives_unit_vector() {
        assert_eq!(IVector3::new(0, -7, 0).normalized(), IVector3::new(0, -1, 0));
        assert_eq!(IVector3::new(5, 0, 0).normalized(), IVector3::new(1, 0, 0));
    }

    #[test]
    fn normalizing_ivector3_uses_truncated_length() {
        // The length sqrt(2) is truncated to 1 before taking the reciprocal
        let mut v = IVector3::new(1, 1, 0);
        v.normalize();
        assert_eq!(v, IVector3::new(1, 1, 0));
    }

    #[test]
    fn normalizing_zero_ivector3_gives_zero_vector() {
        assert_eq!(IVector3::zeros().normalized(), IVector3::zeros());
    }

    #[test]
    fn ivector3_dot_product_works() {
        let v1 = IVector3::new(1, 2, 3);
        let v2 = IVector3::new(4, -5, 6);
        assert_eq!(v1.dot(&v2), 12);
    }

    #[test]
    fn ivector3_distance_truncates() {
        let v1 = IVector3::new(0, 0, 0);
        assert_eq!(v1.distance(&IVector3::new(3, 4, 0)), 5);
        assert_eq!(v1.distance(&IVector3::new(1, 1, 0)), 1);
        assert_eq!(IVector3::new(1, 1, 1).distance(&IVector3::new(-1, -1, -1)), 3);
    }

    #[test]
    fn ivector3_cross_product_works() {
        let cross = IVector3::new(1, 0, 0).crossed(&IVector3::new(0, 1, 0));
        assert_eq!(cross, IVector3::new(0, 0, 1));
    }

    #[test]
    fn ivector3_cross_product_in_place_uses_original_components() {
        let mut v = IVector3::new(1, 2, 3);
        v.cross(&IVector3::new(4, 5, 6));
        assert_eq!(v, IVector3::new(-3, 6, -3));
    }

    #[test]
    fn ivector3_arithmetic_operations_work() {
        let v1 = IVector3::new(1, 2, 3);
        let v2 = IVector3::new(4, 5, 6);

        assert_eq!(v1.added(&v2), IVector3::new(5, 7, 9));
        assert_eq!(v1.subtracted(&v2), IVector3::new(-3, -3, -3));
        assert_eq!(v1.multiplied(3), IVector3::new(3, 6, 9));
        assert_eq!(&v1 + &v2, IVector3::new(5, 7, 9));
        assert_eq!(&v1 - &v2, IVector3::new(-3, -3, -3));
        assert_eq!(&v1 * 2, IVector3::new(2, 4, 6));
        assert_eq!(2 * &v1, IVector3::new(2, 4, 6));
        assert_eq!(-&v1, IVector3::new(-1, -2, -3));
    }

    #[test]
    fn dividing_ivector3_truncates_toward_zero() {
        let v = IVector3::new(7, -7, 6);
        assert_eq!(v.divided(2), Ok(IVector3::new(3, -3, 3)));
        assert_eq!(v.divided(-4), Ok(IVector3::new(-1, 1, -1)));
    }

    #[test]
    fn dividing_ivector3_by_zero_fails_and_leaves_it_unchanged() {
        let mut v = IVector3::new(7, -7, 6);
        assert_eq!(v.divide(0).err(), Some(VectorError::DivisionByZero));
        assert_eq!(v, IVector3::new(7, -7, 6));
    }

    #[test]
    fn dividing_ivector3_with_minimum_component_by_minus_one_wraps() {
        let v = IVector3::new(i64::MIN, 0, 6);
        assert_eq!(v.divided(-1), Ok(IVector3::new(i64::MIN, 0, -6)));
    }

    #[test]
    fn ivector3_operations_on_extreme_components_wrap() {
        let v = IVector3::new(i64::MAX, 0, 0);
        assert_eq!(v.dot(&v), 1);
        assert_eq!(v.added(&IVector3::new(1, 0, 0)), IVector3::new(i64::MIN, 0, 0));
        assert_eq!(v.multiplied(2), IVector3::new(-2, 0, 0));
        assert_eq!(-IVector3::new(i64::MIN, 1, 0), IVector3::new(i64::MIN, -1, 0));
        assert_eq!(v.crossed(&IVector3::new(0, i64::MAX, 0)), IVector3::new(0, 0, 1));
    }

    #[test]
    fn packing_ivector3_as_color_gives_24_bits() {
        assert_eq!(IVector3::new(1, 0, 0).to_color_int(), 0xff0000);
        assert_eq!(IVector3::new(0, 1, 1).to_color_int(), 0x00ffff);
        // 2 * 255 = 0x1fe, of which only the lowest byte is kept
        assert_eq!(IVector3::new(0, 0, 2).to_color_int(), 0x0000fe);
    }

    #[test]
    fn ivector3_raw_view_and_display_work() {
        let v = IVector3::new(1, -2, 3);
        assert_eq!(v.raw(), &[1, -2, 3]);
        assert_eq!(<[i64; 3]>::from(v), [1, -2, 3]);
        assert_eq!(v.to_string(), "IVector3(1, -2, 3)");
    }

    #[test]
    fn ivector3_indexing_works() {
        let mut v = IVector3::new(1, 2, 3);
        v[2] = 30;
        *v.x_mut() = 10;
        assert_eq!(v[0], 10);
        assert_eq!(v[1], 2);
        assert_eq!(v, IVector3::new(10, 2, 30));
    }

    // === IVector4 Tests ===

    #[test]
    fn computing_ivector4_length_truncates() {
        assert_eq!(IVector4::new(1, 2, 2, 4).length(), 5);
        // sqrt(4) = 2 exactly, sqrt(5) = 2.236...
        assert_eq!(IVector4::new(1, 1, 1, 1).length(), 2);
        assert_eq!(IVector4::new(1, 2, 0, 0).length(), 2);
    }

    #[test]
    fn normalizing_ivector4_truncates_components() {
        assert_eq!(IVector4::new(1, 1, 1, 1).normalized(), IVector4::zeros());
        assert_eq!(IVector4::new(0, 0, 0, 9).normalized(), IVector4::new(0, 0, 0, 1));
        assert_eq!(IVector4::zeros().normalized(), IVector4::zeros());
    }

    #[test]
    fn ivector4_component_operations_work() {
        let v1 = IVector4::new(-1, 2, -3, 4);
        let v2 = IVector4::new(5, -6, 7, -8);

        assert_eq!(v1.absolute(), IVector4::new(1, 2, 3, 4));
        assert_eq!(v1.component_mul(&v2), IVector4::new(-5, -12, -21, -32));
        assert_eq!(v1.dot(&v2), -70);
        // sqrt(344) = 18.547...
        assert_eq!(v1.distance(&v2), 18);
    }

    #[test]
    fn absolute_of_minimum_ivector4_component_wraps() {
        let v = IVector4::new(i64::MIN, -1, 0, 1);
        assert_eq!(v.absolute(), IVector4::new(i64::MIN, 1, 0, 1));
        assert_eq!(
            v.component_mul(&IVector4::same(-1)),
            IVector4::new(i64::MIN, 1, 0, -1)
        );
    }

    #[test]
    fn clamping_ivector4_gives_zeros_and_ones() {
        let mut v = IVector4::new(-5, 0, 1, 9);
        v.clamp();
        assert_eq!(v, IVector4::new(0, 0, 1, 1));
    }

    #[test]
    fn ivector4_arithmetic_operations_work() {
        let mut v = IVector4::new(1, 2, 3, 4);
        v.add(&IVector4::same(1))
            .multiply(3)
            .subtract(&IVector4::new(0, 0, 0, 15));
        assert_eq!(v, IVector4::new(6, 9, 12, 0));

        v.divide(4).unwrap();
        assert_eq!(v, IVector4::new(1, 2, 3, 0));
    }

    #[test]
    fn dividing_ivector4_by_zero_fails() {
        let v = IVector4::new(1, 2, 3, 4);
        assert_eq!(v.divided(0), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn packing_ivector4_as_color_gives_32_bits() {
        assert_eq!(IVector4::new(1, 0, 0, 0).to_color_int(), 0xff000000);
        assert_eq!(IVector4::new(1, 1, 0, 1).to_color_int(), 0xffff00ff);
        assert_eq!(IVector4::new(0, 0, 0, 1).to_color_int(), 0x000000ff);
    }

    #[test]
    fn ivector4_display_works() {
        assert_eq!(IVector4::new(1, 2, 3, -4).to_string(), "IVector4(1, 2, 3, -4)");
    }

    // === IVector2 Tests ===

    #[test]
    fn ivector2_components_and_display_work() {
        let v = IVector2::new(3, -4);
        assert_eq!(v.x(), 3);
        assert_eq!(v.y(), -4);
        assert_eq!(v.raw(), [3, -4]);
        assert_eq!(IVector2::from([3, -4]), v);
        assert_eq!(v.to_string(), "IVector2(3, -4)");
    }

    // === Properties ===

    proptest! {
        #[test]
        fn adding_then_subtracting_recovers_ivector_exactly(
            v in ivector3_strategy(1_000_000),
            w in ivector3_strategy(1_000_000),
            u in ivector4_strategy(1_000_000),
            t in ivector4_strategy(1_000_000),
        ) {
            prop_assert_eq!(v.added(&w).subtracted(&w), v);
            prop_assert_eq!(u.added(&t).subtracted(&t), u);
        }
    }

    proptest! {
        #[test]
        fn ivector3_cross_product_is_anticommutative_and_perpendicular(
            a in ivector3_strategy(1000),
            b in ivector3_strategy(1000),
        ) {
            let cross = a.crossed(&b);
            prop_assert_eq!(cross, -b.crossed(&a));
            prop_assert_eq!(a.dot(&cross), 0);
            prop_assert_eq!(b.dot(&cross), 0);
        }
    }

    proptest! {
        #[test]
        fn ivector_length_is_truncated_real_length(v in ivector3_strategy(1000)) {
            let real_length = ((v.x() * v.x() + v.y() * v.y() + v.z() * v.z()) as f64).sqrt();
            prop_assert_eq!(v.length(), real_length.trunc() as i64);
        }
    }

    proptest! {
        #[test]
        fn clamping_ivector4_is_idempotent(v in ivector4_strategy(1000)) {
            prop_assert_eq!(v.clamped().clamped(), v.clamped());
        }
    }

    proptest! {
        #[test]
        fn dividing_any_ivector_by_zero_fails(
            v in ivector3_strategy(1000),
            u in ivector4_strategy(1000),
        ) {
            prop_assert_eq!(v.divided(0), Err(VectorError::DivisionByZero));
            prop_assert_eq!(u.divided(0), Err(VectorError::DivisionByZero));
        }
    }
}
