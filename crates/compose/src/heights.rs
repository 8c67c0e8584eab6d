//! Height-field compositing for mesh displacement.
//!
//! The 3D path carries no color or blend-mode logic: each visible layer's
//! biased, clamped noise value is weight-summed per grid point and divided
//! by the total visible weight. Zero visible layers, or a total weight of
//! zero, leave the accumulator untouched and yield a flat plane.

use strata_core::{LayerDescriptor, StackError};

use crate::compositor::generate_visible_fields;

/// A `grid_size * grid_size` scalar height field, row-major, values in [0, 1].
///
/// Heights are pre-vertical-scale; the caller applies its own mesh
/// displacement factor.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    grid_size: usize,
    data: Vec<f64>,
}

impl HeightField {
    /// Grid edge length in samples.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Read-only access to the row-major heights.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Height at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.grid_size && y < self.grid_size);
        self.data[y * self.grid_size + x]
    }
}

/// Composites an ordered layer stack into a height field.
///
/// Only visible layers participate; each contributes its biased, clamped
/// field scaled by its weight, and the sum is normalized by the total
/// weight when that total is positive. An empty stack or an all-zero
/// weight total yields the flat plane (all heights 0.0).
pub fn compose_heights(
    layers: &[LayerDescriptor],
    grid_size: usize,
) -> Result<HeightField, StackError> {
    if grid_size == 0 {
        return Err(StackError::InvalidDimensions);
    }
    let len = grid_size
        .checked_mul(grid_size)
        .ok_or(StackError::InvalidDimensions)?;

    let visible: Vec<&LayerDescriptor> = layers.iter().filter(|l| l.visible).collect();
    for layer in &visible {
        layer.validate()?;
    }

    let mut combined = vec![0.0_f64; len];
    if visible.is_empty() {
        return Ok(HeightField {
            grid_size,
            data: combined,
        });
    }

    let fields = generate_visible_fields(&visible, grid_size, grid_size)?;
    for (layer, field) in visible.iter().zip(fields.iter()) {
        for (acc, &v) in combined.iter_mut().zip(field.data()) {
            *acc += (v + layer.bias).clamp(0.0, 1.0) * layer.weight;
        }
    }

    let total_weight: f64 = visible.iter().map(|l| l.weight).sum();
    if total_weight > 0.0 {
        for v in &mut combined {
            *v /= total_weight;
        }
    }

    Ok(HeightField {
        grid_size,
        data: combined,
    })
}
