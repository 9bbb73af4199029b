pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("index {index} is out of range for a vector of dimension {dimension}")]
    OutOfRange { index: usize, dimension: usize },
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("cross product requires 3-dimensional vectors, got {left} and {right}")]
    UnsupportedDimension { left: usize, right: usize },
    #[error("range step must be positive, got {0}")]
    NonPositiveStep(f64),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use utils::{cosine_similarity, euclidean_distance, normalize};
pub use vector::Vector;
