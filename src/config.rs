//! Landing page configuration.
//!
//! Defaults mirror `assets/landing.json`, which is embedded into the binary and
//! validated at startup. A broken embedded file falls back to the defaults.

use glam::{Vec2, Vec3};
use serde::Deserialize;

use crate::error::ConfigError;

const EMBEDDED: &str = include_str!("../assets/landing.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub scene: SceneConfig,
    pub reveal: RevealConfig,
}

/// Camera path followed while the about overlay scrolls.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub base_position: Vec3,
    pub position_delta: Vec3,
    pub base_look_at: Vec3,
    pub look_at_delta: Vec3,
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            base_position: Vec3::new(5.0, 2.0, 20.0),
            position_delta: Vec3::new(8.0, 5.0, -12.0),
            base_look_at: Vec3::new(4.0, 2.0, 14.0),
            look_at_delta: Vec3::new(6.0, 3.0, -8.0),
            smoothing: 0.1,
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub initial_position: Vec3,
    pub rest_position: Vec3,
    /// Per-axis response to the pointer: x and z follow pointer x, y follows pointer y.
    pub pointer_gain: Vec3,
    pub shadow_map_size: u32,
    /// Half width of the orthographic shadow camera.
    pub shadow_extent: f32,
    pub shadow_near: f32,
    pub shadow_far: f32,
    pub shadow_bias: f32,
    pub shadow_opacity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            initial_position: Vec3::new(20.0, 15.0, -50.0),
            rest_position: Vec3::new(5.0, 3.0, -40.0),
            pointer_gain: Vec3::new(5.0, -2.0, 12.0),
            shadow_map_size: 4096,
            shadow_extent: 30.0,
            shadow_near: 0.5,
            shadow_far: 100.0,
            shadow_bias: 0.0005,
            shadow_opacity: 0.4,
        }
    }
}

/// A flat rectangle lying in the XZ plane.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlaneConfig {
    pub color: u32,
    /// Extent along x and z.
    pub size: Vec2,
    pub center: Vec3,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub content: String,
    /// Cap height in world units.
    pub size: f32,
    pub depth: f32,
    /// Shift to the right as a fraction of the text width.
    pub right_offset: f32,
    pub color: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: "ROW X 402".to_string(),
            size: 0.7,
            depth: 0.15,
            right_offset: 0.2,
            color: 0xffffff,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub back_ground: PlaneConfig,
    pub front_ground: PlaneConfig,
    pub shadow_plane: PlaneConfig,
    pub text: TextConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            back_ground: PlaneConfig {
                color: 0x0052fa,
                size: Vec2::new(100.0, 100.0),
                center: Vec3::new(0.0, 0.0, -50.0),
            },
            // back edge sits on z=0, under the text
            front_ground: PlaneConfig {
                color: 0xeac001,
                size: Vec2::new(400.0, 200.0),
                center: Vec3::new(0.0, 0.0, 100.0),
            },
            shadow_plane: PlaneConfig {
                color: 0x0052fa,
                size: Vec2::new(200.0, 200.0),
                center: Vec3::new(0.0, 0.01, 0.0),
            },
            text: TextConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !(cam.smoothing > 0.0 && cam.smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(cam.smoothing));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(ConfigError::ClipPlanes {
                near: cam.near,
                far: cam.far,
            });
        }
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(cam.fov_degrees));
        }
        let light = &self.light;
        if !light.shadow_map_size.is_power_of_two() {
            return Err(ConfigError::ShadowMapSize(light.shadow_map_size));
        }
        if !(light.shadow_near > 0.0 && light.shadow_near < light.shadow_far) {
            return Err(ConfigError::ClipPlanes {
                near: light.shadow_near,
                far: light.shadow_far,
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::RevealThreshold(self.reveal.threshold));
        }
        Ok(())
    }

    /// The embedded configuration, or the defaults if it does not load.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("embedded config rejected, using defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let cfg = LandingConfig::from_json(EMBEDDED).expect("embedded config loads");
        assert_eq!(cfg, LandingConfig::default());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = LandingConfig::from_json(r#"{ "camera": { "smoothing": 0.25 } }"#).unwrap();
        assert_eq!(cfg.camera.smoothing, 0.25);
        assert_eq!(cfg.camera.base_position, Vec3::new(5.0, 2.0, 20.0));
        assert_eq!(cfg.light, LightConfig::default());
    }

    #[test]
    fn rejects_zero_smoothing() {
        let err = LandingConfig::from_json(r#"{ "camera": { "smoothing": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Smoothing(_)));
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let err =
            LandingConfig::from_json(r#"{ "camera": { "near": 10.0, "far": 1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ClipPlanes { .. }));
    }

    #[test]
    fn rejects_odd_shadow_map() {
        let err = LandingConfig::from_json(r#"{ "light": { "shadow_map_size": 1000 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ShadowMapSize(1000)));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            LandingConfig::from_json("{ camera"),
            Err(ConfigError::Parse(_))
        ));
    }
}
