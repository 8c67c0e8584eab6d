#![deny(unsafe_code)]
//! Core types and algorithms for the strata noise compositing engine.
//!
//! Provides the seeded `ParkMiller` RNG, `PermutationTable`, single-octave
//! gradient noise (`perlin`), multi-octave `fractal` field generation, the
//! `LayerDescriptor`/`BlendMode` data model, composition settings with
//! hypsometric color ranges, and the `Rgb8` color type.

pub mod color;
pub mod error;
pub mod field;
pub mod fractal;
pub mod layer;
pub mod perlin;
pub mod permutation;
pub mod rng;
pub mod settings;

pub use color::Rgb8;
pub use error::StackError;
pub use field::Field;
pub use fractal::{generate_field, FractalParams};
pub use layer::{BlendMode, LayerDescriptor};
pub use permutation::PermutationTable;
pub use rng::ParkMiller;
pub use settings::{CompositionSettings, HypsometricRange};
