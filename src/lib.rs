//! Fixed-dimension real and integer vectors for rendering.

#[macro_use]
mod macros;

pub mod color;
pub mod conversion;
pub mod error;
pub mod int_vector;
pub mod num;
pub mod ops;
pub mod vector;

pub use error::VectorError;
pub use int_vector::{IVector2, IVector3, IVector4};
pub use num::Scalar;
pub use ops::{Abs, Arithmetic, Clamp, ComponentMul, Cross, Distance, Dot, Normalize, Vector};
pub use vector::{Vector2, Vector3, Vector4};
