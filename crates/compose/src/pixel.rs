//! Pure-computation pixel buffer conversion from [`Raster`].
//!
//! This module is always available (no feature gate) so that both the `png`
//! snapshot path and any display-buffer consumer can share the same
//! conversion.

use crate::raster::Raster;

/// Expands a raster's RGB bytes into an RGBA8 pixel buffer.
///
/// Each pixel gains an opaque alpha byte. The buffer length is
/// `size * size * 4`.
pub fn raster_to_rgba(raster: &Raster) -> Vec<u8> {
    raster
        .data()
        .chunks_exact(3)
        .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255u8])
        .collect()
}
