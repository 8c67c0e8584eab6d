//! Layer descriptors and blend modes.
//!
//! A [`LayerDescriptor`] is the caller-owned specification for one noise
//! layer: fractal synthesis parameters plus bias, weight, visibility, and
//! the blend mode used when folding the layer into the composite. An
//! ordered `Vec<LayerDescriptor>` (bottom-to-top, index 0 first) is the
//! engine's entire input besides the composition settings, and a bare JSON
//! array of descriptors is the interchange format for save/load.

use serde::{Deserialize, Serialize};

use crate::error::StackError;
use crate::fractal::FractalParams;

/// Blend mode applied when folding a layer into the composite accumulator.
///
/// `Normal` and `Add` are the same additive operator; `Subtract`,
/// `Multiply`, and `Screen` are non-commutative, so layer order matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    Add,
    Subtract,
    Multiply,
    Screen,
}

/// One layer in the composition stack.
///
/// Descriptors are plain data: the engine reads them, never mutates them,
/// and holds no reference to them after a composition call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerDescriptor {
    /// Display label; carried through serialization, ignored by the engine.
    pub name: String,
    /// Fractal synthesis parameters.
    #[serde(flatten)]
    pub noise: FractalParams,
    /// Additive offset applied after normalization, before clamping. -1..=1.
    pub bias: f64,
    /// Contribution weight in the final blend. 0..=1.
    pub weight: f64,
    /// Hidden layers are excluded from composition entirely.
    pub visible: bool,
    /// Operator folding this layer into the accumulator.
    pub blend_mode: BlendMode,
}

impl Default for LayerDescriptor {
    fn default() -> Self {
        Self {
            name: "Base Layer".to_string(),
            noise: FractalParams::default(),
            bias: 0.0,
            weight: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }
}

impl LayerDescriptor {
    /// Creates a descriptor with the given name and default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the descriptor with the given seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.noise.seed = seed;
        self
    }

    /// Returns the descriptor with the given blend mode.
    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    /// Returns the descriptor with the given weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns the descriptor with the given bias.
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Returns the descriptor with the given visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Validates the noise parameters plus bias and weight ranges.
    pub fn validate(&self) -> Result<(), StackError> {
        self.noise.validate()?;
        if !self.bias.is_finite() || !(-1.0..=1.0).contains(&self.bias) {
            return Err(StackError::InvalidParam {
                name: "bias",
                value: self.bias,
            });
        }
        if !self.weight.is_finite() || !(0.0..=1.0).contains(&self.weight) {
            return Err(StackError::InvalidParam {
                name: "weight",
                value: self.weight,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- BlendMode --

    #[test]
    fn blend_mode_default_is_normal() {
        assert_eq!(BlendMode::default(), BlendMode::Normal);
    }

    #[test]
    fn blend_mode_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&BlendMode::Normal).unwrap(),
            "\"normal\""
        );
        assert_eq!(serde_json::to_string(&BlendMode::Add).unwrap(), "\"add\"");
        assert_eq!(
            serde_json::to_string(&BlendMode::Subtract).unwrap(),
            "\"subtract\""
        );
        assert_eq!(
            serde_json::to_string(&BlendMode::Multiply).unwrap(),
            "\"multiply\""
        );
        assert_eq!(
            serde_json::to_string(&BlendMode::Screen).unwrap(),
            "\"screen\""
        );
    }

    #[test]
    fn blend_mode_serde_round_trip() {
        let modes = [
            BlendMode::Normal,
            BlendMode::Add,
            BlendMode::Subtract,
            BlendMode::Multiply,
            BlendMode::Screen,
        ];
        for mode in &modes {
            let json = serde_json::to_string(mode).unwrap();
            let restored: BlendMode = serde_json::from_str(&json).unwrap();
            assert_eq!(*mode, restored);
        }
    }

    // -- Defaults --

    #[test]
    fn default_descriptor_matches_starter_layer() {
        let layer = LayerDescriptor::default();
        assert_eq!(layer.name, "Base Layer");
        assert_eq!(layer.noise.scale, 30.0);
        assert_eq!(layer.noise.octaves, 4);
        assert_eq!(layer.noise.persistence, 0.5);
        assert_eq!(layer.noise.lacunarity, 2.0);
        assert_eq!(layer.noise.seed, 42);
        assert_eq!(layer.bias, 0.0);
        assert_eq!(layer.weight, 1.0);
        assert!(layer.visible);
        assert_eq!(layer.blend_mode, BlendMode::Normal);
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let layer = LayerDescriptor::new("detail")
            .with_seed(7)
            .with_blend_mode(BlendMode::Screen)
            .with_weight(0.4)
            .with_bias(-0.1)
            .with_visible(false);
        assert_eq!(layer.name, "detail");
        assert_eq!(layer.noise.seed, 7);
        assert_eq!(layer.blend_mode, BlendMode::Screen);
        assert_eq!(layer.weight, 0.4);
        assert_eq!(layer.bias, -0.1);
        assert!(!layer.visible);
    }

    // -- Validation --

    #[test]
    fn default_descriptor_validates() {
        assert!(LayerDescriptor::default().validate().is_ok());
    }

    #[test]
    fn bias_outside_range_is_rejected() {
        let layer = LayerDescriptor::default().with_bias(1.5);
        assert!(matches!(
            layer.validate(),
            Err(StackError::InvalidParam { name: "bias", .. })
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let layer = LayerDescriptor::default().with_weight(-0.1);
        assert!(matches!(
            layer.validate(),
            Err(StackError::InvalidParam { name: "weight", .. })
        ));
    }

    #[test]
    fn invalid_noise_params_propagate() {
        let mut layer = LayerDescriptor::default();
        layer.noise.octaves = 0;
        assert!(matches!(
            layer.validate(),
            Err(StackError::InvalidOctaves(0))
        ));
    }

    // -- Serde --

    #[test]
    fn descriptor_json_round_trip() {
        let layer = LayerDescriptor::new("ridges")
            .with_seed(-9)
            .with_blend_mode(BlendMode::Multiply)
            .with_weight(0.6)
            .with_bias(0.2);
        let json = serde_json::to_string_pretty(&layer).unwrap();
        let restored: LayerDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(layer, restored);
    }

    #[test]
    fn descriptor_json_is_flat() {
        // The fractal params flatten into the layer object so documents
        // stay a single level deep.
        let json = serde_json::to_value(LayerDescriptor::default()).unwrap();
        assert!(json.get("scale").is_some());
        assert!(json.get("octaves").is_some());
        assert!(json.get("seed").is_some());
        assert!(json.get("blend_mode").is_some());
        assert!(json.get("noise").is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let layer: LayerDescriptor =
            serde_json::from_str(r#"{"name": "sparse", "seed": 5}"#).unwrap();
        assert_eq!(layer.name, "sparse");
        assert_eq!(layer.noise.seed, 5);
        assert_eq!(layer.noise.octaves, 4);
        assert_eq!(layer.weight, 1.0);
        assert!(layer.visible);
    }

    #[test]
    fn layer_list_round_trips_in_order() {
        let stack = vec![
            LayerDescriptor::new("base"),
            LayerDescriptor::new("detail").with_seed(2),
            LayerDescriptor::new("ridges").with_seed(3),
        ];
        let json = serde_json::to_string(&stack).unwrap();
        let restored: Vec<LayerDescriptor> = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = restored.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["base", "detail", "ridges"]);
    }
}
