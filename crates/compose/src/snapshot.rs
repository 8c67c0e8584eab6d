//! CPU-side PNG export of a [`Raster`].
//!
//! This module is feature-gated behind `png` (default on) so that embedders
//! can depend on the `compose` crate without pulling in the `image` crate.
//! The pixel buffer conversion itself lives in [`crate::pixel`] (always
//! available).

use std::path::Path;
use strata_core::StackError;

use crate::pixel::raster_to_rgba;
use crate::raster::Raster;

/// Writes a raster as a PNG image.
///
/// Returns `StackError::InvalidDimensions` if the raster size overflows
/// `u32`, or `StackError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), StackError> {
    let rgba = raster_to_rgba(raster);
    let edge = u32::try_from(raster.size()).map_err(|_| StackError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(edge, edge, rgba)
        .ok_or_else(|| StackError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| StackError::Io(e.to_string()))
}
