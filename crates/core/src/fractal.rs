//! Multi-octave fractal noise field generation.
//!
//! Sums single-octave gradient noise across a configurable octave count with
//! per-octave amplitude decay (persistence) and frequency growth
//! (lacunarity), then normalizes by the accumulated amplitude into a
//! nominally [0, 1] field. The permutation table is rebuilt from the seed on
//! every call; no state survives between generations.

use serde::{Deserialize, Serialize};

use crate::error::StackError;
use crate::field::Field;
use crate::perlin;
use crate::permutation::PermutationTable;

/// Fractal synthesis parameters for one layer.
///
/// `scale` is a spatial frequency divisor (larger = smoother), `octaves`
/// the number of summation passes (1..=8), `persistence` the per-octave
/// amplitude decay in [0, 1], `lacunarity` the per-octave frequency growth.
/// Two identical parameter sets always generate bit-identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    pub scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub seed: i64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            scale: 30.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 42,
        }
    }
}

impl FractalParams {
    /// Validates the parameters against their documented ranges.
    ///
    /// Out-of-range values are rejected with an explicit error rather than
    /// clamped: silent clamping would make two descriptors that serialize
    /// differently generate the same field.
    pub fn validate(&self) -> Result<(), StackError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(StackError::InvalidParam {
                name: "scale",
                value: self.scale,
            });
        }
        if self.octaves == 0 || self.octaves > 8 {
            return Err(StackError::InvalidOctaves(self.octaves));
        }
        if !self.persistence.is_finite() || !(0.0..=1.0).contains(&self.persistence) {
            return Err(StackError::InvalidParam {
                name: "persistence",
                value: self.persistence,
            });
        }
        if !self.lacunarity.is_finite() || self.lacunarity < 0.0 {
            return Err(StackError::InvalidParam {
                name: "lacunarity",
                value: self.lacunarity,
            });
        }
        Ok(())
    }
}

/// Generates a `width * height` fractal noise field, row-major.
///
/// For each cell, octave contributions accumulate as
/// `value += sample(nx * frequency, ny * frequency) * amplitude` with
/// `frequency` starting at 1 and growing by `lacunarity`, `amplitude`
/// starting at 1 and decaying by `persistence`. The final cell value is
/// `(value / max_amplitude + 1) / 2`, where `max_amplitude` is the running
/// sum of amplitudes. There is no per-octave clamping, so consumers must
/// clamp at the point of use.
pub fn generate_field(
    width: usize,
    height: usize,
    params: &FractalParams,
) -> Result<Field, StackError> {
    params.validate()?;
    if width == 0 || height == 0 {
        return Err(StackError::InvalidDimensions);
    }
    let len = width
        .checked_mul(height)
        .ok_or(StackError::InvalidDimensions)?;
    let table = PermutationTable::new(params.seed);

    let mut data = Vec::with_capacity(len);
    for y in 0..height {
        for x in 0..width {
            let nx = x as f64 / params.scale;
            let ny = y as f64 / params.scale;

            let mut value = 0.0;
            let mut frequency = 1.0;
            let mut amplitude = 1.0;
            let mut max_amplitude = 0.0;

            for _ in 0..params.octaves {
                value += perlin::sample(&table, nx * frequency, ny * frequency) * amplitude;
                max_amplitude += amplitude;
                amplitude *= params.persistence;
                frequency *= params.lacunarity;
            }

            data.push((value / max_amplitude + 1.0) / 2.0);
        }
    }
    Field::from_data(width, height, data)
}
