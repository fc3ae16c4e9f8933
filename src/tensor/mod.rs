//! Dense integer N-dimensional arrays
//!
//! - [`Shape`] and [`Point`]: immutable axis sizes and coordinates
//! - [`Storage`]: the shared row-major buffer behind arrays and their views
//! - [`NDArray`]: element access, copy, view, broadcasting add and matrix dot

pub mod core;
pub mod dims;
pub mod point;
pub mod shape;
pub mod storage;

// Re-export main types for convenience
pub use self::core::NDArray;
pub use dims::{DimensionAware, SizeAware};
pub use point::Point;
pub use shape::{Points, Shape};
pub use storage::Storage;
