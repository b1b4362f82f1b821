//! Vector operations.
//!
//! Every operation is exposed through its own trait, and each vector type
//! only implements the traits for the operations it supports. An operation
//! has a single core function named `<operation>_into` that writes its
//! result into a caller-provided vector. The pure form (`normalized`,
//! `added`, ...) returns a fresh vector, and the mutating form (`normalize`,
//! `add`, ...) writes into the receiver and returns it for chaining. Both
//! delegate to the core function.
//!
//! Most operations have a provided implementation working on the flat
//! component view, so opting in is usually an empty `impl` block.

use crate::{
    color,
    error::{Result, VectorError},
    num::Scalar,
};
use bytemuck::Pod;
use std::fmt;

/// A fixed-dimension vector whose components are all of the same
/// [`Scalar`] type.
pub trait Vector: Pod + PartialEq + fmt::Debug + fmt::Display {
    type Scalar: Scalar;

    /// The number of components.
    const DIMENSION: usize;

    /// Creates a new vector with all zeros.
    #[inline]
    fn zeros() -> Self {
        bytemuck::Zeroable::zeroed()
    }

    /// The components in declaration order.
    #[inline]
    fn raw(&self) -> &[Self::Scalar] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// The components in declaration order, mutably.
    #[inline]
    fn raw_mut(&mut self) -> &mut [Self::Scalar] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// Computes the Euclidean length of the vector. The length is computed
    /// with real numbers and converted with [`Scalar::from_real`], so it is
    /// truncated for integer vectors.
    #[inline]
    fn length(&self) -> Self::Scalar {
        Self::Scalar::from_real(real_norm(self.raw().iter().copied()))
    }

    /// Packs the components into an integer color with one byte per
    /// component, the first component in the most significant byte. See
    /// [`color::pack_channels`].
    #[inline]
    fn to_color_int(&self) -> u32 {
        color::pack_channels(self.raw())
    }
}

/// Scaling to unit length.
pub trait Normalize: Vector {
    /// Writes the normalized version of `vector` into `result`. A vector of
    /// zero length normalizes to the zero vector.
    ///
    /// The components are multiplied by the reciprocal of
    /// [`Vector::length`]. For integer vectors both the length and the
    /// scaled components are truncated, so normalizing rarely gives anything
    /// but zeros.
    fn normalize_into(vector: &Self, result: &mut Self) {
        let length = vector.length();
        if length > Self::Scalar::ZERO {
            let inverse_length = 1.0 / length.to_real();
            for (r, &v) in result.raw_mut().iter_mut().zip(vector.raw()) {
                *r = Self::Scalar::from_real(v.to_real() * inverse_length);
            }
        } else {
            result.raw_mut().fill(Self::Scalar::ZERO);
        }
    }

    /// Computes the normalized version of the vector.
    #[inline]
    fn normalized(&self) -> Self {
        let mut result = Self::zeros();
        Self::normalize_into(self, &mut result);
        result
    }

    /// Normalizes the vector in place.
    #[inline]
    fn normalize(&mut self) -> &mut Self {
        let vector = *self;
        Self::normalize_into(&vector, self);
        self
    }
}

/// The dot product.
pub trait Dot: Vector {
    /// Computes the dot product of this vector with another.
    #[inline]
    fn dot(&self, other: &Self) -> Self::Scalar {
        self.raw()
            .iter()
            .zip(other.raw())
            .fold(Self::Scalar::ZERO, |sum, (&a, &b)| sum.wrapping_add(a.wrapping_mul(b)))
    }
}

/// The Euclidean distance between two vectors.
pub trait Distance: Vector {
    /// Computes the length of `self - other`. Truncated for integer
    /// vectors, like [`Vector::length`].
    #[inline]
    fn distance(&self, other: &Self) -> Self::Scalar {
        let differences = self
            .raw()
            .iter()
            .zip(other.raw())
            .map(|(&a, &b)| a.wrapping_sub(b));
        Self::Scalar::from_real(real_norm(differences))
    }
}

/// Component-wise addition and subtraction, and scaling and division by a
/// scalar.
pub trait Arithmetic: Vector {
    /// Writes `left + right` into `result`.
    fn add_into(left: &Self, right: &Self, result: &mut Self) {
        zip_into(left, right, result, |a, b| a.wrapping_add(b));
    }

    /// Writes `left - right` into `result`.
    fn subtract_into(left: &Self, right: &Self, result: &mut Self) {
        zip_into(left, right, result, |a, b| a.wrapping_sub(b));
    }

    /// Writes `vector * value` into `result`.
    fn multiply_into(vector: &Self, value: Self::Scalar, result: &mut Self) {
        map_into(vector, result, |a| a.wrapping_mul(value));
    }

    /// Writes `vector / value` into `result`. Integer components are
    /// truncated toward zero.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `value` is zero, in which
    /// case `result` is left untouched.
    fn divide_into(vector: &Self, value: Self::Scalar, result: &mut Self) -> Result<()> {
        if value == Self::Scalar::ZERO {
            log::debug!("Rejected division of {vector} by zero");
            return Err(VectorError::DivisionByZero);
        }
        map_into(vector, result, |a| a.wrapping_div(value));
        Ok(())
    }

    /// Computes the sum of this vector and another.
    #[inline]
    fn added(&self, right: &Self) -> Self {
        let mut result = Self::zeros();
        Self::add_into(self, right, &mut result);
        result
    }

    /// Adds another vector to this one in place.
    #[inline]
    fn add(&mut self, right: &Self) -> &mut Self {
        let left = *self;
        Self::add_into(&left, right, self);
        self
    }

    /// Computes the difference between this vector and another.
    #[inline]
    fn subtracted(&self, right: &Self) -> Self {
        let mut result = Self::zeros();
        Self::subtract_into(self, right, &mut result);
        result
    }

    /// Subtracts another vector from this one in place.
    #[inline]
    fn subtract(&mut self, right: &Self) -> &mut Self {
        let left = *self;
        Self::subtract_into(&left, right, self);
        self
    }

    /// Computes this vector scaled by the given value.
    #[inline]
    fn multiplied(&self, value: Self::Scalar) -> Self {
        let mut result = Self::zeros();
        Self::multiply_into(self, value, &mut result);
        result
    }

    /// Scales this vector by the given value in place.
    #[inline]
    fn multiply(&mut self, value: Self::Scalar) -> &mut Self {
        let vector = *self;
        Self::multiply_into(&vector, value, self);
        self
    }

    /// Computes this vector divided by the given value.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `value` is zero.
    #[inline]
    fn divided(&self, value: Self::Scalar) -> Result<Self> {
        let mut result = Self::zeros();
        Self::divide_into(self, value, &mut result)?;
        Ok(result)
    }

    /// Divides this vector by the given value in place.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `value` is zero, in which
    /// case the vector is unchanged.
    #[inline]
    fn divide(&mut self, value: Self::Scalar) -> Result<&mut Self> {
        let vector = *self;
        Self::divide_into(&vector, value, self)?;
        Ok(self)
    }
}

/// The component-wise (Hadamard) product.
pub trait ComponentMul: Vector {
    /// Writes the product of each component in `left` with the
    /// corresponding component in `right` into `result`.
    fn component_mul_into(left: &Self, right: &Self, result: &mut Self) {
        zip_into(left, right, result, |a, b| a.wrapping_mul(b));
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    fn component_mul(&self, right: &Self) -> Self {
        let mut result = Self::zeros();
        Self::component_mul_into(self, right, &mut result);
        result
    }

    /// Multiplies each component by the corresponding component in another
    /// vector, in place.
    #[inline]
    fn component_mul_assign(&mut self, right: &Self) -> &mut Self {
        let left = *self;
        Self::component_mul_into(&left, right, self);
        self
    }
}

/// The absolute value of each component.
pub trait Abs: Vector {
    fn abs_into(vector: &Self, result: &mut Self) {
        map_into(vector, result, |a| a.wrapping_abs());
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    fn absolute(&self) -> Self {
        let mut result = Self::zeros();
        Self::abs_into(self, &mut result);
        result
    }

    /// Replaces each component with its absolute value.
    #[inline]
    fn abs(&mut self) -> &mut Self {
        let vector = *self;
        Self::abs_into(&vector, self);
        self
    }
}

/// Restriction of each component to `[0, 1]`, typically before
/// [`Vector::to_color_int`].
pub trait Clamp: Vector {
    fn clamp_into(vector: &Self, result: &mut Self) {
        map_into(vector, result, |a| a.unit_clamped());
    }

    /// Returns a vector with each component clamped to `[0, 1]`.
    #[inline]
    fn clamped(&self) -> Self {
        let mut result = Self::zeros();
        Self::clamp_into(self, &mut result);
        result
    }

    /// Clamps each component to `[0, 1]` in place.
    #[inline]
    fn clamp(&mut self) -> &mut Self {
        let vector = *self;
        Self::clamp_into(&vector, self);
        self
    }
}

/// The 3D cross product.
pub trait Cross: Vector {
    /// Writes `left × right` into `result`. All components are computed
    /// before `result` is written.
    fn cross_into(left: &Self, right: &Self, result: &mut Self);

    /// Computes the cross product of this vector with another.
    #[inline]
    fn crossed(&self, right: &Self) -> Self {
        let mut result = Self::zeros();
        Self::cross_into(self, right, &mut result);
        result
    }

    /// Replaces this vector with its cross product with another. The
    /// original components are copied before anything is written.
    #[inline]
    fn cross(&mut self, right: &Self) -> &mut Self {
        let left = *self;
        Self::cross_into(&left, right, self);
        self
    }
}

fn real_norm<S: Scalar>(components: impl Iterator<Item = S>) -> f64 {
    components
        .map(|c| {
            let c = c.to_real();
            c * c
        })
        .sum::<f64>()
        .sqrt()
}

fn map_into<V: Vector>(vector: &V, result: &mut V, f: impl Fn(V::Scalar) -> V::Scalar) {
    for (r, &a) in result.raw_mut().iter_mut().zip(vector.raw()) {
        *r = f(a);
    }
}

fn zip_into<V: Vector>(
    left: &V,
    right: &V,
    result: &mut V,
    f: impl Fn(V::Scalar, V::Scalar) -> V::Scalar,
) {
    for ((r, &a), &b) in result.raw_mut().iter_mut().zip(left.raw()).zip(right.raw()) {
        *r = f(a, b);
    }
}
