use serde::Deserialize;

use crate::color::Rgb;
use crate::error::Result;
use crate::shaders;

pub const DEFAULT_COLOR: Rgb = Rgb::new(0.0, 10.0 / 255.0, 61.0 / 255.0);

/// Parameters fixed at creation. Keys use the camelCase names of the JS
/// options object; anything missing or `null` falls back to [`Default`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Options")]
pub struct LaserFlowConfig {
    pub color: Rgb,
    pub wisp_density: f32,
    pub flow_speed: f32,
    pub vertical_sizing: f32,
    pub horizontal_sizing: f32,
    pub fog_intensity: f32,
    pub fog_scale: f32,
    pub wisp_speed: f32,
    pub wisp_intensity: f32,
    pub flow_strength: f32,
    pub decay: f32,
    pub horizontal_beam_offset: f32,
    pub vertical_beam_offset: f32,
}

/// The options object as JS hands it over. `JSON.stringify` writes `NaN`
/// as `null`, so both land here as `None`.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Options {
    color: Option<Rgb>,
    wisp_density: Option<f32>,
    flow_speed: Option<f32>,
    vertical_sizing: Option<f32>,
    horizontal_sizing: Option<f32>,
    fog_intensity: Option<f32>,
    fog_scale: Option<f32>,
    wisp_speed: Option<f32>,
    wisp_intensity: Option<f32>,
    flow_strength: Option<f32>,
    decay: Option<f32>,
    horizontal_beam_offset: Option<f32>,
    vertical_beam_offset: Option<f32>,
}

impl From<Options> for LaserFlowConfig {
    fn from(o: Options) -> Self {
        let d = Self::default();
        Self {
            color: o.color.unwrap_or(d.color),
            wisp_density: o.wisp_density.unwrap_or(d.wisp_density),
            flow_speed: o.flow_speed.unwrap_or(d.flow_speed),
            vertical_sizing: o.vertical_sizing.unwrap_or(d.vertical_sizing),
            horizontal_sizing: o.horizontal_sizing.unwrap_or(d.horizontal_sizing),
            fog_intensity: o.fog_intensity.unwrap_or(d.fog_intensity),
            fog_scale: o.fog_scale.unwrap_or(d.fog_scale),
            wisp_speed: o.wisp_speed.unwrap_or(d.wisp_speed),
            wisp_intensity: o.wisp_intensity.unwrap_or(d.wisp_intensity),
            flow_strength: o.flow_strength.unwrap_or(d.flow_strength),
            decay: o.decay.unwrap_or(d.decay),
            horizontal_beam_offset: o.horizontal_beam_offset.unwrap_or(d.horizontal_beam_offset),
            vertical_beam_offset: o.vertical_beam_offset.unwrap_or(d.vertical_beam_offset),
        }
    }
}

impl Default for LaserFlowConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            wisp_density: 1.3,
            flow_speed: 0.65,
            vertical_sizing: 2.9,
            horizontal_sizing: 2.3,
            fog_intensity: 1.0,
            fog_scale: 0.4,
            wisp_speed: 30.0,
            wisp_intensity: 12.0,
            flow_strength: 0.0,
            decay: 1.4,
            horizontal_beam_offset: 0.0,
            vertical_beam_offset: -0.5,
        }
    }
}

impl LaserFlowConfig {
    /// Parse an options object serialized as JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The twelve scalar uniforms, paired with the names the fragment
    /// shader declares them under.
    pub fn scalar_uniforms(&self) -> [(&'static str, f32); 12] {
        [
            (shaders::U_WISP_DENSITY, self.wisp_density),
            (shaders::U_FLOW_SPEED, self.flow_speed),
            (shaders::U_VERTICAL_SIZING, self.vertical_sizing),
            (shaders::U_HORIZONTAL_SIZING, self.horizontal_sizing),
            (shaders::U_FOG_INTENSITY, self.fog_intensity),
            (shaders::U_FOG_SCALE, self.fog_scale),
            (shaders::U_WISP_SPEED, self.wisp_speed),
            (shaders::U_WISP_INTENSITY, self.wisp_intensity),
            (shaders::U_FLOW_STRENGTH, self.flow_strength),
            (shaders::U_DECAY, self.decay),
            (shaders::U_H_BEAM_OFFSET, self.horizontal_beam_offset),
            (shaders::U_V_BEAM_OFFSET, self.vertical_beam_offset),
        ]
    }
}
