use crate::{ArError, ArModelConfig, ArPose};
use crate::utils;
use std::f32::consts::PI;

/// State of the object drawn at the placement: tint, scale and spin.
#[derive(Debug, Clone, PartialEq)]
pub struct ArModel {
    color: [u8; 3],
    scale: f32,
    rotation_y: f32,
    min_scale: f32,
    max_scale: f32,
    scale_step: f32,
    spin_per_frame: f32,
    edge_length: f32,
}

impl ArModel {
    pub fn new(config: &ArModelConfig) -> Result<ArModel, ArError> {
        let mut model = ArModel {
            color: parse_hex_color(&config.color)?,
            scale: 1.0,
            rotation_y: 0.0,
            min_scale: config.min_scale,
            max_scale: config.max_scale.max(config.min_scale),
            scale_step: config.scale_step,
            spin_per_frame: config.spin_per_frame,
            edge_length: config.edge_length,
        };
        model.set_scale(config.scale);
        Ok(model)
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn color_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.color[0], self.color[1], self.color[2])
    }

    /// Linear 0..1 channels for the material.
    pub fn color_rgb(&self) -> [f32; 3] {
        [
            self.color[0] as f32 / 255.0,
            self.color[1] as f32 / 255.0,
            self.color[2] as f32 / 255.0,
        ]
    }

    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ArError> {
        self.color = parse_hex_color(hex)?;
        Ok(())
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Clamps to the configured range and snaps to the nearest step.
    pub fn set_scale(&mut self, scale: f32) {
        let clamped = scale.max(self.min_scale).min(self.max_scale);
        let snapped = if self.scale_step > 0.0 {
            let steps = ((clamped - self.min_scale) / self.scale_step).round();
            self.min_scale + steps * self.scale_step
        } else {
            clamped
        };
        self.scale = snapped.max(self.min_scale).min(self.max_scale);
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    pub fn advance_frame(&mut self) {
        self.rotation_y = (self.rotation_y + self.spin_per_frame) % (2.0 * PI);
    }

    pub fn reset_spin(&mut self) {
        self.rotation_y = 0.0;
    }

    /// Column-major model matrix: placement, then spin about Y, then scale.
    pub fn model_matrix(&self, placement: &ArPose) -> [f32; 16] {
        let (s, c) = self.rotation_y.sin_cos();
        let spin = [c, 0.0, -s, 0.0,
                    0.0, 1.0, 0.0, 0.0,
                    s, 0.0, c, 0.0,
                    0.0, 0.0, 0.0, 1.0];
        let k = self.scale;
        let scale = [k, 0.0, 0.0, 0.0,
                     0.0, k, 0.0, 0.0,
                     0.0, 0.0, k, 0.0,
                     0.0, 0.0, 0.0, 1.0];

        let mut spun = [0f32; 16];
        utils::multiply_matrix(&placement.to_matrix(), &spin, &mut spun);
        let mut out = [0f32; 16];
        utils::multiply_matrix(&spun, &scale, &mut out);
        out
    }
}

fn parse_hex_color(hex: &str) -> Result<[u8; 3], ArError> {
    let invalid = || ArError::InvalidColor(hex.to_owned());
    let digits = match hex.strip_prefix('#') {
        Some(digits) if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) => digits,
        _ => return Err(invalid()),
    };
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}
