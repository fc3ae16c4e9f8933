//! Rank and extent accessors shared by shapes, points and arrays

/// Anything with a number of axes and a per-axis extent
pub trait DimensionAware {
    /// Sizes for shapes and arrays, coordinates for points
    type Extent;

    /// Number of axes
    fn ndim(&self) -> usize;

    /// Extent of axis `i`. Panics if `i >= self.ndim()`.
    fn dim(&self, i: usize) -> Self::Extent;
}

/// Anything with a total element count
pub trait SizeAware {
    fn size(&self) -> usize;
}
