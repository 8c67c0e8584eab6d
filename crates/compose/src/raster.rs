//! Square RGB pixel buffer produced by the 2D compositor.

use strata_core::{Rgb8, StackError};

/// A `size * size` RGB raster, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    size: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a raster filled with a single color.
    ///
    /// Returns `StackError::InvalidDimensions` if `size` is zero or the
    /// byte count overflows `usize`.
    pub fn filled(size: usize, color: Rgb8) -> Result<Self, StackError> {
        let pixels = checked_pixels(size)?;
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Ok(Self { size, data })
    }

    /// Creates a raster from pre-built RGB bytes, validating the length.
    pub fn from_data(size: usize, data: Vec<u8>) -> Result<Self, StackError> {
        let expected = checked_pixels(size)? * 3;
        if data.len() != expected {
            return Err(StackError::SampleCountMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only access to the RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb8 {
        assert!(x < self.size && y < self.size);
        let i = (y * self.size + x) * 3;
        Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Consumes the raster and returns the raw RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

fn checked_pixels(size: usize) -> Result<usize, StackError> {
    if size == 0 {
        return Err(StackError::InvalidDimensions);
    }
    size.checked_mul(size)
        .and_then(|p| p.checked_mul(3).map(|_| p))
        .ok_or(StackError::InvalidDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_creates_uniform_raster() {
        let raster = Raster::filled(4, Rgb8::new(1, 2, 3)).unwrap();
        assert_eq!(raster.size(), 4);
        assert_eq!(raster.data().len(), 4 * 4 * 3);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(raster.pixel(x, y), Rgb8::new(1, 2, 3));
            }
        }
    }

    #[test]
    fn filled_rejects_zero_size() {
        assert!(matches!(
            Raster::filled(0, Rgb8::gray(0)),
            Err(StackError::InvalidDimensions)
        ));
    }

    #[test]
    fn from_data_validates_length() {
        assert!(Raster::from_data(2, vec![0; 12]).is_ok());
        assert!(matches!(
            Raster::from_data(2, vec![0; 11]),
            Err(StackError::SampleCountMismatch { .. })
        ));
    }

    #[test]
    fn pixel_reads_row_major_triples() {
        let mut data = vec![0u8; 2 * 2 * 3];
        // Pixel (1, 0) = bytes 3..6.
        data[3] = 10;
        data[4] = 20;
        data[5] = 30;
        // Pixel (0, 1) = bytes 6..9.
        data[6] = 40;
        let raster = Raster::from_data(2, data).unwrap();
        assert_eq!(raster.pixel(1, 0), Rgb8::new(10, 20, 30));
        assert_eq!(raster.pixel(0, 1), Rgb8::new(40, 0, 0));
    }

    #[test]
    fn into_raw_returns_all_bytes() {
        let raster = Raster::filled(2, Rgb8::gray(9)).unwrap();
        let raw = raster.into_raw();
        assert_eq!(raw.len(), 12);
        assert!(raw.iter().all(|&b| b == 9));
    }

    #[test]
    #[should_panic]
    fn pixel_out_of_bounds_panics() {
        let raster = Raster::filled(2, Rgb8::gray(0)).unwrap();
        raster.pixel(2, 0);
    }
}
