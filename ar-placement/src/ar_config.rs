use crate::ArSessionInit;

/// Appearance of the placed model. Defaults match the stock demo: a red
/// 20 cm cube at unit scale spinning slowly about Y.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde-serialization", serde(default))]
pub struct ArModelConfig {
    // Initial tint as #rrggbb.
    pub color: String,
    pub scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    // Scale values snap to multiples of this step above `min_scale`.
    pub scale_step: f32,
    // Radians added about Y every rendered frame.
    pub spin_per_frame: f32,
    // Cube edge in meters, before scaling.
    pub edge_length: f32,
}

impl Default for ArModelConfig {
    fn default() -> ArModelConfig {
        ArModelConfig {
            color: "#ff0000".into(),
            scale: 1.0,
            min_scale: 0.5,
            max_scale: 2.0,
            scale_step: 0.1,
            spin_per_frame: 0.01,
            edge_length: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde-serialization", serde(default))]
pub struct ArSceneConfig {
    pub session: ArSessionInit,
    pub model: ArModelConfig,
}
