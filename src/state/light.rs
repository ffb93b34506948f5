// Pointer-driven directional light extracted from the hero view.
use glam::{Mat4, Vec2, Vec3};

use crate::config::LightConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub position: Vec3,
    rest: Vec3,
    gain: Vec3,
}

impl LightRig {
    pub fn new(cfg: &LightConfig) -> Self {
        Self {
            position: cfg.initial_position,
            rest: cfg.rest_position,
            gain: cfg.pointer_gain,
        }
    }

    /// Pointer position relative to a container rect, in [-1, 1] with y up.
    pub fn normalize_pointer(client: Vec2, origin: Vec2, size: Vec2) -> Option<Vec2> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }
        let rel = (client - origin) / size;
        Some(Vec2::new(rel.x * 2.0 - 1.0, -(rel.y * 2.0) + 1.0))
    }

    pub fn follow_pointer(&mut self, ndc: Vec2) {
        self.position = self.rest
            + Vec3::new(
                ndc.x * self.gain.x,
                ndc.y * self.gain.y,
                ndc.x * self.gain.z,
            );
    }

    pub fn pointer_left(&mut self) {
        self.position = self.rest;
    }

    /// Orthographic view-projection of the shadow camera aimed at the origin.
    pub fn shadow_view_proj(&self, cfg: &LightConfig) -> Mat4 {
        let e = cfg.shadow_extent;
        let proj = Mat4::orthographic_rh_gl(-e, e, -e, e, cfg.shadow_near, cfg.shadow_far);
        let view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_position() {
        let rig = LightRig::new(&LightConfig::default());
        assert_eq!(rig.position, Vec3::new(20.0, 15.0, -50.0));
    }

    #[test]
    fn pointer_in_corner_moves_light() {
        let mut rig = LightRig::new(&LightConfig::default());
        // top-right corner
        rig.follow_pointer(Vec2::new(1.0, 1.0));
        assert_eq!(rig.position, Vec3::new(10.0, 1.0, -28.0));
        // bottom-left corner
        rig.follow_pointer(Vec2::new(-1.0, -1.0));
        assert_eq!(rig.position, Vec3::new(0.0, 5.0, -52.0));
    }

    #[test]
    fn leaving_restores_rest_position() {
        let mut rig = LightRig::new(&LightConfig::default());
        rig.follow_pointer(Vec2::new(0.3, -0.7));
        rig.pointer_left();
        assert_eq!(rig.position, Vec3::new(5.0, 3.0, -40.0));
    }

    #[test]
    fn pointer_is_normalized_with_y_up() {
        let origin = Vec2::new(10.0, 20.0);
        let size = Vec2::new(200.0, 100.0);
        let centre = LightRig::normalize_pointer(Vec2::new(110.0, 70.0), origin, size).unwrap();
        assert_eq!(centre, Vec2::ZERO);
        let top_left = LightRig::normalize_pointer(origin, origin, size).unwrap();
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));
        assert!(LightRig::normalize_pointer(origin, origin, Vec2::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn origin_projects_inside_shadow_frustum() {
        let cfg = LightConfig::default();
        let rig = LightRig::new(&cfg);
        let clip = rig.shadow_view_proj(&cfg).project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
        assert!(clip.z > -1.0 && clip.z < 1.0);
    }
}
