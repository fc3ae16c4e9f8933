use std::fmt::{self, Display};
use serde::{Deserialize, Serialize};

use super::dims::DimensionAware;

/// Coordinates addressing one element.
///
/// A point is a bare tuple: coordinates may be negative or larger than any
/// axis. They are only checked when the point indexes a concrete shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coords: Vec<i64>,
}

impl Point {
    pub fn new(coords: impl Into<Vec<i64>>) -> Self {
        Self {
            coords: coords.into(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate on axis `i`. Panics if `i >= ndim()`.
    pub fn dim(&self, i: usize) -> i64 {
        self.coords[i]
    }

    pub fn coords(&self) -> &[i64] {
        &self.coords
    }
}

impl DimensionAware for Point {
    type Extent = i64;

    fn ndim(&self) -> usize {
        Point::ndim(self)
    }

    fn dim(&self, i: usize) -> i64 {
        Point::dim(self, i)
    }
}

impl<const N: usize> From<[i64; N]> for Point {
    fn from(coords: [i64; N]) -> Self {
        Point::new(coords)
    }
}

impl From<Vec<i64>> for Point {
    fn from(coords: Vec<i64>) -> Self {
        Point::new(coords)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.coords.iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point::new([3, -1, 7]);
        assert_eq!(point.ndim(), 3);
        assert_eq!(point.dim(0), 3);
        assert_eq!(point.dim(1), -1);
        assert_eq!(point.coords(), &[3, -1, 7]);
        assert_eq!(point.to_string(), "(3, -1, 7)");
    }

    #[test]
    fn test_point_conversions() {
        let from_array: Point = [1, 2].into();
        let from_vec: Point = vec![1, 2].into();
        assert_eq!(from_array, from_vec);
        assert_eq!(DimensionAware::ndim(&from_array), 2);
    }
}
