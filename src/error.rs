//! Errors produced by vector operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("Tried to divide a vector by zero")]
    DivisionByZero,
}
