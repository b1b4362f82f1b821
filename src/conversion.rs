//! Widening conversions between vectors of different dimensions.
//!
//! The components that do not exist in the source vector get a default value.
//! That value is zero, except for the `w`-component when widening a 3D vector
//! to 4D, which becomes one so that the result is a homogeneous point.
//! Widening a 2D vector to 4D gives `w = 0`.

use crate::{
    int_vector::{IVector2, IVector3, IVector4},
    vector::{Vector2, Vector3, Vector4},
};

impl Vector3 {
    /// Creates a 3D vector from the given 2D vector, with `z = 0`.
    #[inline]
    pub const fn from_vector2(vector: &Vector2) -> Self {
        Self::new(vector.x(), vector.y(), 0.0)
    }
}

impl Vector4 {
    /// Creates a 4D vector from the given 2D vector, with `z = 0` and
    /// `w = 0`.
    #[inline]
    pub const fn from_vector2(vector: &Vector2) -> Self {
        Self::new(vector.x(), vector.y(), 0.0, 0.0)
    }

    /// Creates a 4D vector from the given 3D vector, with `w = 1`.
    #[inline]
    pub const fn from_vector3(vector: &Vector3) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), 1.0)
    }
}

impl IVector4 {
    /// Creates a 4D vector from the given 2D vector, with `z = 0` and
    /// `w = 0`.
    #[inline]
    pub const fn from_ivector2(vector: &IVector2) -> Self {
        Self::new(vector.x(), vector.y(), 0, 0)
    }

    /// Creates a 4D vector from the given 3D vector, with `w = 1`.
    #[inline]
    pub const fn from_ivector3(vector: &IVector3) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), 1)
    }
}

macro_rules! impl_widening_from {
    ($from:ty => $to:ty, $constructor:ident) => {
        impl From<$from> for $to {
            #[inline]
            fn from(vector: $from) -> Self {
                Self::$constructor(&vector)
            }
        }

        impl From<&$from> for $to {
            #[inline]
            fn from(vector: &$from) -> Self {
                Self::$constructor(vector)
            }
        }
    };
}

impl_widening_from!(Vector2 => Vector3, from_vector2);
impl_widening_from!(Vector2 => Vector4, from_vector2);
impl_widening_from!(Vector3 => Vector4, from_vector3);
impl_widening_from!(IVector2 => IVector4, from_ivector2);
impl_widening_from!(IVector3 => IVector4, from_ivector3);
