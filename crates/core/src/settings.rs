//! Composition settings and hypsometric color ranges.
//!
//! Hypsometric tinting maps an 8-bit intensity to a terrain-style color via
//! ordered elevation bands: the first range whose inclusive `[start, end]`
//! interval contains the intensity wins. Ranges may overlap or leave gaps;
//! gaps fall back to grayscale. The supplied order is preserved exactly and
//! is observable whenever ranges overlap.

use serde::{Deserialize, Serialize};

use crate::color::Rgb8;
use crate::error::StackError;

/// One elevation band: an inclusive intensity interval and its color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypsometricRange {
    /// Display label; carried through serialization, ignored by lookup.
    #[serde(default)]
    pub label: String,
    pub start: u8,
    pub end: u8,
    pub color: Rgb8,
}

impl HypsometricRange {
    /// Creates a band covering `start..=end`.
    pub fn new(label: impl Into<String>, start: u8, end: u8, color: Rgb8) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            color,
        }
    }

    /// Returns an error if `start > end`.
    pub fn validate(&self) -> Result<(), StackError> {
        if self.start > self.end {
            return Err(StackError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Whether the inclusive interval contains `intensity`.
    pub fn contains(&self, intensity: u8) -> bool {
        intensity >= self.start && intensity <= self.end
    }
}

/// Global settings for one composition call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionSettings {
    /// Output raster is `resolution` x `resolution` pixels.
    pub resolution: usize,
    /// When off, every layer renders grayscale regardless of ranges.
    pub hypsometric_tinting: bool,
    /// Ordered elevation bands; first containing range wins.
    pub ranges: Vec<HypsometricRange>,
}

impl Default for CompositionSettings {
    fn default() -> Self {
        Self {
            resolution: 400,
            hypsometric_tinting: true,
            ranges: default_ranges(),
        }
    }
}

impl CompositionSettings {
    /// Validates the resolution and every range.
    pub fn validate(&self) -> Result<(), StackError> {
        if self.resolution == 0 {
            return Err(StackError::InvalidDimensions);
        }
        for range in &self.ranges {
            range.validate()?;
        }
        Ok(())
    }

    /// Resolves an intensity to a color.
    ///
    /// Scans the ranges in list order and returns the first match; falls
    /// back to grayscale when tinting is off or no range contains the
    /// intensity.
    pub fn resolve_color(&self, intensity: u8) -> Rgb8 {
        if self.hypsometric_tinting {
            for range in &self.ranges {
                if range.contains(intensity) {
                    return range.color;
                }
            }
        }
        Rgb8::gray(intensity)
    }
}

/// The six default terrain bands, deep water through mountains.
pub fn default_ranges() -> Vec<HypsometricRange> {
    vec![
        HypsometricRange::new("Deep Water", 0, 50, Rgb8::new(0x00, 0x00, 0x8b)),
        HypsometricRange::new("Shallow Water", 51, 84, Rgb8::new(0x41, 0x69, 0xe1)),
        HypsometricRange::new("Lowlands", 85, 127, Rgb8::new(0x22, 0x8b, 0x22)),
        HypsometricRange::new("Midlands", 128, 169, Rgb8::new(0x90, 0xee, 0x90)),
        HypsometricRange::new("Highlands", 170, 211, Rgb8::new(0xf0, 0xe6, 0x8c)),
        HypsometricRange::new("Mountains", 212, 255, Rgb8::new(0xa0, 0x52, 0x2d)),
    ]
}
