//! Array shapes and row-major linearization

use std::fmt::{self, Display};
use serde::{Deserialize, Serialize};

use crate::error::{NdArrayError, NdResult};
use super::dims::{DimensionAware, SizeAware};
use super::point::Point;

/// Ordered, immutable axis sizes of an array
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Shape {
    dims: Vec<usize>,
    size: usize,
}

impl Shape {
    /// Build a shape from one or more positive axis sizes.
    ///
    /// Fails with [`NdArrayError::InvalidShape`] for an empty list, a zero
    /// axis, or an element count that does not fit in `usize`.
    pub fn new(dims: impl Into<Vec<usize>>) -> NdResult<Self> {
        let dims = dims.into();
        if dims.is_empty() {
            return Err(NdArrayError::InvalidShape(
                "shape must have at least one axis".to_string(),
            ));
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(NdArrayError::InvalidShape(format!(
                "axis {} has size 0",
                axis
            )));
        }
        let size = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| {
                NdArrayError::InvalidShape(format!("element count of {:?} overflows", dims))
            })?;

        Ok(Self { dims, size })
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Size of axis `i`. Panics if `i >= ndim()`.
    pub fn dim(&self, i: usize) -> usize {
        self.dims[i]
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Map a point to its offset in a row-major buffer of this shape.
    ///
    /// Axes are checked in ascending order, so the reported axis is the first
    /// offending one.
    pub fn linear_index(&self, point: &Point) -> NdResult<usize> {
        if point.ndim() != self.ndim() {
            return Err(NdArrayError::dimension_mismatch(self.ndim(), point.ndim()));
        }

        let mut index = 0usize;
        for (axis, (&coord, &dim)) in point.coords().iter().zip(&self.dims).enumerate() {
            if coord < 0 || coord as u64 >= dim as u64 {
                return Err(NdArrayError::coordinate_out_of_range(axis));
            }
            index = index * dim + coord as usize;
        }
        Ok(index)
    }

    /// Every in-bounds point, last axis varying fastest
    pub fn points(&self) -> Points<'_> {
        Points {
            shape: self,
            next: Some(vec![0; self.ndim()]),
        }
    }
}

impl DimensionAware for Shape {
    type Extent = usize;

    fn ndim(&self) -> usize {
        Shape::ndim(self)
    }

    fn dim(&self, i: usize) -> usize {
        Shape::dim(self, i)
    }
}

impl SizeAware for Shape {
    fn size(&self) -> usize {
        self.size
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = NdArrayError;

    fn try_from(dims: Vec<usize>) -> NdResult<Self> {
        Shape::new(dims)
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.dims
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.dims.iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", "))
    }
}

/// Row-major odometer over the points of a [`Shape`]
#[derive(Debug, Clone)]
pub struct Points<'a> {
    shape: &'a Shape,
    next: Option<Vec<usize>>,
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next.take()?;

        let mut following = current.clone();
        let mut carried = true;
        for axis in (0..following.len()).rev() {
            following[axis] += 1;
            if following[axis] < self.shape.dim(axis) {
                carried = false;
                break;
            }
            following[axis] = 0;
        }
        if !carried {
            self.next = Some(following);
        }

        Some(Point::new(
            current.into_iter().map(|c| c as i64).collect::<Vec<_>>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_creation() {
        let shape = Shape::new([2, 3, 4]).unwrap();
        assert_eq!(shape.ndim(), 3);
        assert_eq!(shape.dim(1), 3);
        assert_eq!(shape.size(), 24);
        assert_eq!(shape.to_string(), "(2, 3, 4)");
    }

    #[test]
    fn test_shape_validation() {
        assert!(matches!(Shape::new(Vec::<usize>::new()), Err(NdArrayError::InvalidShape(_))));
        assert!(matches!(Shape::new([2, 0, 4]), Err(NdArrayError::InvalidShape(_))));
        assert!(matches!(
            Shape::new([usize::MAX, 2]),
            Err(NdArrayError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_linear_index_row_major() {
        let shape = Shape::new([2, 3, 4]).unwrap();
        assert_eq!(shape.linear_index(&Point::new([0, 0, 0])).unwrap(), 0);
        assert_eq!(shape.linear_index(&Point::new([0, 0, 3])).unwrap(), 3);
        assert_eq!(shape.linear_index(&Point::new([0, 1, 0])).unwrap(), 4);
        assert_eq!(shape.linear_index(&Point::new([1, 2, 3])).unwrap(), 23);
    }

    #[test]
    fn test_linear_index_errors() {
        let shape = Shape::new([2, 3]).unwrap();
        assert_eq!(
            shape.linear_index(&Point::new([1])),
            Err(NdArrayError::dimension_mismatch(2, 1))
        );
        assert_eq!(
            shape.linear_index(&Point::new([-1, 0])),
            Err(NdArrayError::coordinate_out_of_range(0))
        );
        assert_eq!(
            shape.linear_index(&Point::new([1, 3])),
            Err(NdArrayError::coordinate_out_of_range(1))
        );
        // first offending axis wins
        assert_eq!(
            shape.linear_index(&Point::new([5, -2])),
            Err(NdArrayError::coordinate_out_of_range(0))
        );
    }

    #[test]
    fn test_points_order() {
        let shape = Shape::new([2, 2]).unwrap();
        let points: Vec<Point> = shape.points().collect();
        assert_eq!(
            points,
            vec![
                Point::new([0, 0]),
                Point::new([0, 1]),
                Point::new([1, 0]),
                Point::new([1, 1]),
            ]
        );

        let shape = Shape::new([3, 1, 2]).unwrap();
        for (expected, point) in shape.points().enumerate() {
            assert_eq!(shape.linear_index(&point).unwrap(), expected);
        }
        assert_eq!(shape.points().count(), shape.size());
    }

    #[test]
    fn test_shape_serde() {
        let shape = Shape::new([2, 5]).unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, "[2,5]");
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
        assert!(serde_json::from_str::<Shape>("[2,0]").is_err());
    }
}
