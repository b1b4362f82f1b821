//! Real-valued vectors.

use crate::ops::{
    Abs, Arithmetic, Clamp, ComponentMul, Cross, Distance, Dot, Normalize, Vector,
};
use bytemuck::{Pod, Zeroable};

/// A 2-dimensional vector of real numbers.
///
/// Supports the basic arithmetic and geometric operations, but not
/// [`Abs`], [`Clamp`] or [`ComponentMul`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

/// A 3-dimensional vector of real numbers.
///
/// This is the vector type with the richest set of operations, including the
/// [`Cross`] product and the [`Clamp`] used to prepare colors for
/// [`Vector::to_color_int`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

/// A 4-dimensional vector of real numbers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }
}

impl Vector for Vector2 {
    type Scalar = f64;
    const DIMENSION: usize = 2;
}

impl Normalize for Vector2 {
    /// Unlike the other real vectors, the components are divided by the
    /// length directly rather than multiplied by its reciprocal.
    fn normalize_into(vector: &Self, result: &mut Self) {
        let length = vector.length();
        if length > 0.0 {
            result.x = vector.x / length;
            result.y = vector.y / length;
        } else {
            *result = Self::zeros();
        }
    }
}

impl Dot for Vector2 {}

impl Distance for Vector2 {}

impl Arithmetic for Vector2 {}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_arithmetic_ops!(Vector2, f64);
impl_component_index!(Vector2, f64);
impl_display!(Vector2, "Vector2");

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    approx::AbsDiffEq::abs_diff_eq(a.raw(), b.raw(), epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    approx::RelativeEq::relative_eq(a.raw(), b.raw(), epsilon, max_relative)
});

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }
}

impl Vector for Vector3 {
    type Scalar = f64;
    const DIMENSION: usize = 3;
}

impl Normalize for Vector3 {}

impl Abs for Vector3 {}

impl Clamp for Vector3 {}

impl Dot for Vector3 {}

impl Distance for Vector3 {}

impl Arithmetic for Vector3 {}

impl ComponentMul for Vector3 {}

impl Cross for Vector3 {
    fn cross_into(left: &Self, right: &Self, result: &mut Self) {
        let x = left.y * right.z - left.z * right.y;
        let y = left.z * right.x - left.x * right.z;
        let z = left.x * right.y - left.y * right.x;
        *result = Self::new(x, y, z);
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_arithmetic_ops!(Vector3, f64);
impl_component_index!(Vector3, f64);
impl_display!(Vector3, "Vector3");

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    approx::AbsDiffEq::abs_diff_eq(a.raw(), b.raw(), epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    approx::RelativeEq::relative_eq(a.raw(), b.raw(), epsilon, max_relative)
});

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f64 {
        &mut self.w
    }
}

impl Vector for Vector4 {
    type Scalar = f64;
    const DIMENSION: usize = 4;
}

impl Normalize for Vector4 {}

impl Abs for Vector4 {}

impl Clamp for Vector4 {}

impl Dot for Vector4 {}

impl Distance for Vector4 {}

impl Arithmetic for Vector4 {}

impl ComponentMul for Vector4 {}

impl From<[f64; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f64; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_arithmetic_ops!(Vector4, f64);
impl_component_index!(Vector4, f64);
impl_display!(Vector4, "Vector4");

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    approx::AbsDiffEq::abs_diff_eq(a.raw(), b.raw(), epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    approx::RelativeEq::relative_eq(a.raw(), b.raw(), epsilon, max_relative)
});
