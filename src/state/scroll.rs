//! Scroll-driven camera easing for the about overlay.
//!
//! The overlay's scroll offset sets a target progress in `[0, 1]`; each frame
//! the current progress moves a fixed fraction of the way there and the camera
//! pose is re-derived from it. There is no snap threshold: the pose approaches
//! the target asymptotically.

use super::camera::{CameraPath, CameraPose};

/// Normalized scroll progress, both values in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub target: f32,
    pub current: f32,
}

impl ScrollState {
    /// Progress for a raw offset within a scrollable range. An empty range
    /// yields 0.
    pub fn progress_for(raw_offset: f64, max_offset: f64) -> f32 {
        if max_offset > 0.0 {
            (raw_offset / max_offset).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }

    /// Moves `current` toward `target` by `smoothing` of the remaining gap.
    pub fn ease(&mut self, smoothing: f32) {
        self.current += (self.target - self.current) * smoothing;
    }
}

/// Owns the scroll state and the overlay activity flag.
#[derive(Debug, Clone)]
pub struct ScrollCameraAnimator {
    state: ScrollState,
    path: CameraPath,
    smoothing: f32,
    active: bool,
}

impl ScrollCameraAnimator {
    pub fn new(path: CameraPath, smoothing: f32) -> Self {
        Self {
            state: ScrollState::default(),
            path,
            smoothing,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Pose for the current progress.
    pub fn pose(&self) -> CameraPose {
        self.path.at(self.state.current)
    }

    /// Enters overlay mode from a clean slate.
    pub fn activate(&mut self) -> CameraPose {
        let pose = self.reset();
        self.active = true;
        pose
    }

    /// Leaves overlay mode; the camera returns to the base pose.
    pub fn deactivate(&mut self) -> CameraPose {
        self.active = false;
        self.reset()
    }

    /// Zeroes progress and returns the base pose.
    pub fn reset(&mut self) -> CameraPose {
        self.state = ScrollState::default();
        self.path.base()
    }

    /// Records the latest scroll position. Ignored while inactive.
    pub fn on_scroll(&mut self, raw_offset: f64, max_offset: f64) {
        if !self.active {
            return;
        }
        self.state.target = ScrollState::progress_for(raw_offset, max_offset);
    }

    /// One animation frame. `None` once the overlay has been closed.
    pub fn step(&mut self) -> Option<CameraPose> {
        if !self.active {
            return None;
        }
        self.state.ease(self.smoothing);
        Some(self.pose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;
    use proptest::prelude::*;

    fn animator() -> ScrollCameraAnimator {
        let cfg = CameraConfig::default();
        ScrollCameraAnimator::new(CameraPath::from(&cfg), cfg.smoothing)
    }

    #[test]
    fn empty_range_yields_zero() {
        assert_eq!(ScrollState::progress_for(120.0, 0.0), 0.0);
        assert_eq!(ScrollState::progress_for(120.0, -5.0), 0.0);
    }

    #[test]
    fn first_step_covers_a_tenth() {
        let mut a = animator();
        a.activate();
        a.on_scroll(500.0, 500.0);
        a.step();
        assert!((a.state().current - 0.1).abs() < 1e-6);
    }

    #[test]
    fn fifty_steps_get_close() {
        let mut a = animator();
        a.activate();
        a.on_scroll(800.0, 800.0);
        for _ in 0..50 {
            a.step();
        }
        assert!(a.state().current > 0.99);
        assert!(a.state().current < 1.0);
    }

    #[test]
    fn step_while_inactive_does_nothing() {
        let mut a = animator();
        assert!(a.step().is_none());
        a.activate();
        a.on_scroll(10.0, 10.0);
        a.step();
        a.deactivate();
        assert!(a.step().is_none());
        assert_eq!(a.state(), ScrollState::default());
    }

    #[test]
    fn scroll_ignored_while_inactive() {
        let mut a = animator();
        a.on_scroll(300.0, 600.0);
        assert_eq!(a.state().target, 0.0);
    }

    #[test]
    fn last_scroll_wins() {
        let mut a = animator();
        a.activate();
        a.on_scroll(100.0, 400.0);
        a.on_scroll(300.0, 400.0);
        a.on_scroll(200.0, 400.0);
        assert_eq!(a.state().target, 0.5);
    }

    #[test]
    fn activation_resets_progress() {
        let mut a = animator();
        a.activate();
        a.on_scroll(1.0, 1.0);
        for _ in 0..10 {
            a.step();
        }
        a.deactivate();
        let pose = a.activate();
        assert_eq!(a.state(), ScrollState::default());
        assert_eq!(pose, a.pose());
    }

    #[test]
    fn step_pose_follows_progress() {
        let mut a = animator();
        a.activate();
        a.on_scroll(1.0, 1.0);
        let pose = a.step().unwrap();
        let cfg = CameraConfig::default();
        let expected = cfg.base_position + cfg.position_delta * a.state().current;
        assert!((pose.position - expected).length() < 1e-5);
    }

    proptest! {
        #[test]
        fn scroll_target_is_clamped_ratio(raw in -1.0e4f64..1.0e5, max in 1.0e-3f64..1.0e5) {
            let mut a = animator();
            a.activate();
            a.on_scroll(raw, max);
            let expected = (raw / max).clamp(0.0, 1.0) as f32;
            prop_assert_eq!(a.state().target, expected);
        }

        #[test]
        fn non_positive_range_is_zero(raw in -1.0e4f64..1.0e4, max in -1.0e4f64..=0.0) {
            let mut a = animator();
            a.activate();
            a.on_scroll(raw, max);
            prop_assert_eq!(a.state().target, 0.0);
        }

        #[test]
        fn easing_is_monotone_without_overshoot(target in 0.0f32..=1.0, current in 0.0f32..=1.0) {
            let mut s = ScrollState { target, current };
            let mut gap = (s.target - s.current).abs();
            for _ in 0..40 {
                let before = s.current;
                s.ease(0.1);
                let next_gap = (s.target - s.current).abs();
                if gap > 1e-3 {
                    prop_assert!(next_gap < gap);
                } else {
                    prop_assert!(next_gap <= gap);
                }
                // never crosses the target
                prop_assert!((s.target - before) * (s.target - s.current) >= 0.0);
                gap = next_gap;
            }
        }

        #[test]
        fn reset_returns_base_pose(raw in 0.0f64..1000.0, steps in 0usize..30) {
            let mut a = animator();
            a.activate();
            a.on_scroll(raw, 1000.0);
            for _ in 0..steps {
                a.step();
            }
            let pose = a.reset();
            prop_assert_eq!(a.state(), ScrollState::default());
            prop_assert_eq!(pose, CameraPath::from(&CameraConfig::default()).base());
            prop_assert_eq!(a.pose(), pose);
        }
    }
}
