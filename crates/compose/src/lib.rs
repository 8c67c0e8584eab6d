#![deny(unsafe_code)]
//! Layer compositing for the strata engine.
//!
//! Combines per-layer fractal noise fields into a single deliverable:
//! an RGB [`Raster`] for 2D display ([`compose_rgb`]) or a scalar
//! [`HeightField`] for mesh displacement ([`compose_heights`]). Field
//! generation is parallelized per layer; the blend fold itself is
//! sequential in layer order because Subtract/Multiply/Screen are
//! non-commutative.

pub mod compositor;
pub mod heights;
pub mod pixel;
pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

pub use compositor::compose_rgb;
pub use heights::{compose_heights, HeightField};
pub use raster::Raster;
