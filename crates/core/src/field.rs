//! Two-dimensional scalar sample buffer.
//!
//! A `Field` stores `width * height` f64 values in row-major layout
//! (y outer, x inner). Values are nominally in [0, 1] but are **not**
//! clamped on construction: fractal normalization can overshoot the unit
//! interval marginally, and consumers clamp at the point of use.

use crate::error::StackError;

/// A 2D scalar field in row-major layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a field filled with `value`.
    ///
    /// Returns `StackError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, StackError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Creates a field from a pre-built sample vector, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, StackError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(StackError::SampleCountMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major samples.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Iterates over all cells yielding `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data.iter().enumerate().map(|(i, &v)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, v)
        })
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, StackError> {
    if width == 0 || height == 0 {
        return Err(StackError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(StackError::InvalidDimensions)
}
