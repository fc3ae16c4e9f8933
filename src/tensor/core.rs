//! Dense integer N-dimensional arrays

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::config;
use crate::error::{NdArrayError, NdResult};
use super::dims::{DimensionAware, SizeAware};
use super::point::Point;
use super::shape::Shape;
use super::storage::Storage;

/// Fixed-shape integer array over a row-major buffer.
///
/// Handles created by [`NDArray::view`] share both the buffer and the shape
/// with their source, so every mutation is visible through all of them.
/// [`NDArray::copy`] is the only way to get an independent buffer; the type
/// has no `Clone` impl.
pub struct NDArray {
    storage: Storage,
    shape: Arc<Shape>,
}

impl NDArray {
    fn filled(shape: Shape, value: i32) -> Self {
        tracing::trace!(shape = %shape, value, "allocating array");
        Self {
            storage: Storage::filled(shape.size(), value),
            shape: Arc::new(shape),
        }
    }

    pub fn zeros(shape: Shape) -> Self {
        Self::filled(shape, 0)
    }

    pub fn ones(shape: Shape) -> Self {
        Self::filled(shape, 1)
    }

    /// Wrap row-major `data`; its length must equal `shape.size()`
    pub fn from_vec(shape: Shape, data: Vec<i32>) -> NdResult<Self> {
        if data.len() != shape.size() {
            return Err(NdArrayError::dimension_mismatch(shape.size(), data.len()));
        }

        Ok(Self {
            storage: Storage::from_vec(data),
            shape: Arc::new(shape),
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Size of axis `i`. Panics if `i >= ndim()`.
    pub fn dim(&self, i: usize) -> usize {
        self.shape.dim(i)
    }

    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Read the element at `point`
    pub fn at(&self, point: &Point) -> NdResult<i32> {
        let index = self.shape.linear_index(point)?;
        Ok(self.storage.read()[index])
    }

    /// Overwrite the element at `point`, visible through every view
    pub fn set(&self, point: &Point, value: i32) -> NdResult<()> {
        let index = self.shape.linear_index(point)?;
        self.storage.write()[index] = value;
        Ok(())
    }

    /// New array with its own copy of the elements
    pub fn copy(&self) -> NDArray {
        tracing::trace!(shape = %self.shape, "copying array");
        NDArray {
            storage: self.storage.duplicate(),
            shape: Arc::clone(&self.shape),
        }
    }

    /// New handle on the same elements and shape
    pub fn view(&self) -> NDArray {
        NDArray {
            storage: self.storage.share(),
            shape: Arc::clone(&self.shape),
        }
    }

    /// Whether `self` and `other` read and write the same elements
    pub fn shares_storage_with(&self, other: &NDArray) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    /// Accumulate `other` into `self` in place.
    ///
    /// With equal ranks the shapes must match and elements are summed
    /// pairwise. When `other` has one axis fewer, its axes must match the
    /// leading axes of `self` and each of its elements is added along the
    /// trailing axis of `self`. Addition wraps on overflow.
    pub fn add(&self, other: &NDArray) -> NdResult<()> {
        let ndim = self.ndim();
        let other_ndim = other.ndim();
        if other_ndim != ndim && other_ndim + 1 != ndim {
            return Err(NdArrayError::dimension_mismatch(ndim, other_ndim));
        }
        for axis in 0..other_ndim {
            if self.dim(axis) != other.dim(axis) {
                return Err(NdArrayError::dimension_mismatch(
                    self.dim(axis),
                    other.dim(axis),
                ));
            }
        }

        let repeat = if other_ndim == ndim { 1 } else { self.dim(ndim - 1) };
        tracing::debug!(
            lhs = %self.shape,
            rhs = %other.shape,
            broadcast = other_ndim != ndim,
            "accumulating"
        );

        // other may alias self, so read it fully before taking the write lock
        let addend = other.to_vec();
        let mut data = self.storage.write();
        for (run, &value) in data.chunks_exact_mut(repeat).zip(&addend) {
            for element in run {
                *element = element.wrapping_add(value);
            }
        }
        Ok(())
    }

    /// Matrix product of a rank-2 `self` with a rank-1 or rank-2 `other`.
    ///
    /// A rank-1 `other` is a column vector and yields a `(rows, 1)` result.
    /// Products and sums wrap on overflow.
    pub fn dot(&self, other: &NDArray) -> NdResult<NDArray> {
        if self.ndim() != 2 {
            return Err(NdArrayError::dimension_mismatch(2, self.ndim()));
        }
        if other.ndim() > 2 {
            return Err(NdArrayError::dimension_mismatch(2, other.ndim()));
        }
        if other.dim(0) != self.dim(1) {
            return Err(NdArrayError::dimension_mismatch(self.dim(1), other.dim(0)));
        }

        let rows = self.dim(0);
        let inner = self.dim(1);
        let cols = if other.ndim() == 1 { 1 } else { other.dim(1) };
        tracing::debug!(rows, inner, cols, "matrix product");

        let lhs = self.to_vec();
        let rhs = other.to_vec();
        let mut out = vec![0i32; rows * cols];
        for i in 0..rows {
            let row = &lhs[i * inner..(i + 1) * inner];
            for j in 0..cols {
                out[i * cols + j] = row
                    .iter()
                    .enumerate()
                    .fold(0i32, |sum, (k, &a)| sum.wrapping_add(a.wrapping_mul(rhs[k * cols + j])));
            }
        }

        NDArray::from_vec(Shape::new([rows, cols])?, out)
    }

    /// Row-major copy of the elements
    pub fn to_vec(&self) -> Vec<i32> {
        self.storage.snapshot()
    }

    /// Nested-bracket rendering, eliding everything after `max_elements`
    pub fn render(&self, max_elements: usize) -> String {
        let data = self.storage.read();
        let mut out = String::new();
        let mut remaining = max_elements;
        render_block(&mut out, &data, self.shape.dims(), &mut remaining);
        out
    }
}

fn render_block(out: &mut String, data: &[i32], dims: &[usize], remaining: &mut usize) {
    out.push('[');
    if dims.len() == 1 {
        for (i, value) in data.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if *remaining == 0 {
                out.push_str("...");
                break;
            }
            *remaining -= 1;
            out.push_str(&value.to_string());
        }
    } else {
        let stride = data.len() / dims[0];
        for (i, block) in data.chunks(stride).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if *remaining == 0 {
                out.push_str("...");
                break;
            }
            render_block(out, block, &dims[1..], remaining);
        }
    }
    out.push(']');
}

impl DimensionAware for NDArray {
    type Extent = usize;

    fn ndim(&self) -> usize {
        NDArray::ndim(self)
    }

    fn dim(&self, i: usize) -> usize {
        NDArray::dim(self, i)
    }
}

impl SizeAware for NDArray {
    fn size(&self) -> usize {
        NDArray::size(self)
    }
}

impl PartialEq for NDArray {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && (self.shares_storage_with(other) || self.to_vec() == other.to_vec())
    }
}

impl Eq for NDArray {}

impl Debug for NDArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NDArray")
            .field("shape", &*self.shape)
            .field("size", &self.size())
            .field("handles", &self.storage.handle_count())
            .finish()
    }
}

impl Display for NDArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(config::get_config().display.max_elements))
    }
}
