// Hero camera pose and the scroll-driven path it travels along.
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }
}

/// Affine path from the base pose, parameterized by progress in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    pub base_position: Vec3,
    pub position_delta: Vec3,
    pub base_look_at: Vec3,
    pub look_at_delta: Vec3,
}

impl CameraPath {
    pub fn base(&self) -> CameraPose {
        self.at(0.0)
    }

    pub fn at(&self, progress: f32) -> CameraPose {
        CameraPose {
            position: self.base_position + self.position_delta * progress,
            look_at: self.base_look_at + self.look_at_delta * progress,
        }
    }
}

impl From<&CameraConfig> for CameraPath {
    fn from(cfg: &CameraConfig) -> Self {
        Self {
            base_position: cfg.base_position,
            position_delta: cfg.position_delta,
            base_look_at: cfg.base_look_at,
            look_at_delta: cfg.look_at_delta,
        }
    }
}

/// Perspective lens; the aspect ratio tracks the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub fov_y_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Lens {
    pub fn new(cfg: &CameraConfig, aspect: f32) -> Self {
        Self {
            fov_y_radians: cfg.fov_degrees.to_radians(),
            aspect,
            near: cfg.near,
            far: cfg.far,
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_radians, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> CameraPath {
        CameraPath::from(&CameraConfig::default())
    }

    #[test]
    fn base_pose_matches_config() {
        let pose = path().base();
        assert_eq!(pose.position, Vec3::new(5.0, 2.0, 20.0));
        assert_eq!(pose.look_at, Vec3::new(4.0, 2.0, 14.0));
    }

    #[test]
    fn full_progress_reaches_end_of_path() {
        let pose = path().at(1.0);
        assert_eq!(pose.position, Vec3::new(13.0, 7.0, 8.0));
        assert_eq!(pose.look_at, Vec3::new(10.0, 5.0, 6.0));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let pose = path().base();
        let eye = pose.view_matrix().transform_point3(pose.position);
        assert!(eye.length() < 1e-5);
        // look-at target lies straight ahead on -Z
        let target = pose.view_matrix().transform_point3(pose.look_at);
        assert!(target.x.abs() < 1e-4 && target.y.abs() < 1e-4);
        assert!(target.z < 0.0);
    }

    #[test]
    fn viewport_ignores_degenerate_sizes() {
        let mut lens = Lens::new(&CameraConfig::default(), 1.0);
        lens.set_viewport(0.0, 600.0);
        assert_eq!(lens.aspect, 1.0);
        lens.set_viewport(1200.0, 600.0);
        assert_eq!(lens.aspect, 2.0);
    }
}
