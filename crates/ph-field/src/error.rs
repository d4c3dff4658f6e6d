use ph_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    EmptyField { width: usize, height: usize },

    #[error("buffer of length {got} does not match a {width}x{height} field")]
    BufferSize { width: usize, height: usize, got: usize },

    #[error("kernel mass must be positive and finite, got {0}")]
    KernelMass(f32),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type FieldResult<T> = Result<T, FieldError>;
