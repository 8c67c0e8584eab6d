//! 2D layer compositing into an RGB raster.
//!
//! Each visible layer's fractal field is generated independently (in
//! parallel), then folded pixel-by-pixel into an (r, g, b) accumulator in
//! the layer list's original order. Blend modes other than Normal/Add are
//! non-commutative, so the fold order is part of the contract. After the
//! fold, channels are normalized by the total visible weight and clamped
//! to [0, 255].

use rayon::prelude::*;

use strata_core::{
    generate_field, BlendMode, CompositionSettings, Field, LayerDescriptor, Rgb8, StackError,
};

use crate::raster::Raster;

/// Fill intensity for the empty-stack fallback raster.
const FALLBACK_INTENSITY: u8 = 0xdd;

/// Composites an ordered layer stack into an RGB raster.
///
/// Only visible layers participate. Zero visible layers, or a total
/// visible weight of zero, produce a flat light-gray raster rather than an
/// error: an empty stack is a legitimate state, not a failure.
///
/// Returns `StackError` if the settings or any visible layer fail
/// validation.
pub fn compose_rgb(
    layers: &[LayerDescriptor],
    settings: &CompositionSettings,
) -> Result<Raster, StackError> {
    settings.validate()?;
    let visible: Vec<&LayerDescriptor> = layers.iter().filter(|l| l.visible).collect();
    for layer in &visible {
        layer.validate()?;
    }

    let total_weight: f64 = visible.iter().map(|l| l.weight).sum();
    if visible.is_empty() || total_weight <= 0.0 {
        return Raster::filled(settings.resolution, Rgb8::gray(FALLBACK_INTENSITY));
    }

    let res = settings.resolution;
    let fields = generate_visible_fields(&visible, res, res)?;

    let mut data = Vec::with_capacity(res * res * 3);
    for i in 0..res * res {
        let mut r = 0.0_f64;
        let mut g = 0.0_f64;
        let mut b = 0.0_f64;

        // Sequential left fold over layers; order is observable.
        for (layer, field) in visible.iter().zip(fields.iter()) {
            let value = (field.data()[i] + layer.bias).clamp(0.0, 1.0);
            let intensity = (value * 255.0).floor() as u8;
            let color = settings.resolve_color(intensity);

            r = blend_channel(layer.blend_mode, r, color.r as f64, layer.weight);
            g = blend_channel(layer.blend_mode, g, color.g as f64, layer.weight);
            b = blend_channel(layer.blend_mode, b, color.b as f64, layer.weight);
        }

        data.push(quantize(r / total_weight));
        data.push(quantize(g / total_weight));
        data.push(quantize(b / total_weight));
    }
    Raster::from_data(res, data)
}

/// Generates one field per visible layer, in parallel, preserving order.
pub(crate) fn generate_visible_fields(
    visible: &[&LayerDescriptor],
    width: usize,
    height: usize,
) -> Result<Vec<Field>, StackError> {
    visible
        .par_iter()
        .map(|layer| generate_field(width, height, &layer.noise))
        .collect()
}

/// Folds one layer channel into the accumulator.
fn blend_channel(mode: BlendMode, acc: f64, channel: f64, weight: f64) -> f64 {
    match mode {
        BlendMode::Normal | BlendMode::Add => acc + channel * weight,
        BlendMode::Subtract => acc - channel * weight,
        BlendMode::Multiply => acc * channel * weight / 255.0,
        BlendMode::Screen => 255.0 - (255.0 - acc) * (255.0 - channel * weight) / 255.0,
    }
}

/// Clamps a normalized channel to [0, 255] and rounds to a byte.
fn quantize(channel: f64) -> u8 {
    channel.clamp(0.0, 255.0).round() as u8
}
