//! ndint - dense integer N-dimensional arrays
//!
//! Features:
//! - Fixed-shape arrays of `i32` in row-major layout
//! - Point-addressed, bounds-checked element access
//! - Deep copies and aliasing views over a shared buffer
//! - In-place addition with trailing-axis broadcasting
//! - Matrix and matrix-vector products
//!
//! ```
//! use ndint::{NDArray, Point, Shape};
//!
//! let a = NDArray::ones(Shape::new([2, 3])?);
//! let b = a.view();
//! b.set(&Point::new([1, 2]), 5)?;
//! assert_eq!(a.at(&Point::new([1, 2]))?, 5);
//!
//! let v = NDArray::from_vec(Shape::new([3])?, vec![1, 2, 3])?;
//! let product = a.dot(&v)?;
//! assert_eq!(product.to_vec(), vec![6, 18]);
//! # Ok::<(), ndint::NdArrayError>(())
//! ```

pub mod config;
pub mod error;
pub mod tensor;


pub use config::{ConfigBuilder, NdConfig};
pub use error::{ErrorCode, NdArrayError, NdResult};
pub use tensor::{DimensionAware, NDArray, Point, Points, Shape, SizeAware, Storage};

/// Install a `tracing` subscriber using the global logging configuration
pub fn init() -> NdResult<()> {
    init_with_config(&config::get_config().logging)
}

/// Install a `tracing` subscriber with explicit settings.
///
/// Fails if the level does not parse or a global subscriber is already set.
pub fn init_with_config(logging: &config::LoggingConfig) -> NdResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(logging.max_level()?)
        .with_ansi(logging.ansi)
        .with_target(logging.with_target)
        .try_init()
        .map_err(|e| NdArrayError::configuration("install subscriber", e))?;

    tracing::info!("ndint initialized");
    Ok(())
}

/// Get the current crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
