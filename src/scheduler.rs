//! Frame scheduling for the scroll camera.
//!
//! A [`FrameLoop`] holds at most one pending frame request. The request is
//! cancelled when the overlay closes and again (as a no-op) when the loop is
//! dropped, so a recurring callback can never outlive the overlay.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::{LandingError, Result};
use crate::state::{CameraPose, ScrollCameraAnimator};

/// Something that can call us back on the next frame.
pub trait FrameHost {
    type Handle: Copy + std::fmt::Debug;

    fn request_frame(&self) -> Result<Self::Handle>;
    fn cancel_frame(&self, handle: Self::Handle);
}

#[derive(Debug)]
pub struct FrameLoop<H: FrameHost> {
    host: H,
    pending: Option<H::Handle>,
}

impl<H: FrameHost> FrameLoop<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            pending: None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests the next frame unless one is already pending.
    pub fn schedule(&mut self) -> Result<()> {
        if self.pending.is_none() {
            self.pending = Some(self.host.request_frame()?);
        }
        Ok(())
    }

    /// The pending frame has run; its handle is spent.
    pub fn frame_fired(&mut self) {
        self.pending = None;
    }

    /// Cancels the pending frame. Returns false when nothing was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                self.host.cancel_frame(handle);
                true
            }
            None => false,
        }
    }
}

impl<H: FrameHost> Drop for FrameLoop<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs the scroll animator on the frame loop while the overlay is open.
pub struct CameraDriver<H: FrameHost> {
    animator: ScrollCameraAnimator,
    frames: FrameLoop<H>,
}

impl<H: FrameHost> CameraDriver<H> {
    pub fn new(animator: ScrollCameraAnimator, host: H) -> Self {
        Self {
            animator,
            frames: FrameLoop::new(host),
        }
    }

    pub fn animator(&self) -> &ScrollCameraAnimator {
        &self.animator
    }

    pub fn frames(&self) -> &FrameLoop<H> {
        &self.frames
    }

    /// Overlay opened: reset, apply the first step now, then keep stepping.
    pub fn open(&mut self) -> Result<CameraPose> {
        self.animator.activate();
        let pose = self.animator.step().unwrap_or_else(|| self.animator.pose());
        self.frames.schedule()?;
        Ok(pose)
    }

    /// Overlay closed: stop stepping and return the base pose.
    pub fn close(&mut self) -> CameraPose {
        let pose = self.animator.deactivate();
        if self.frames.cancel() {
            log::debug!("cancelled pending camera frame");
        }
        pose
    }

    pub fn scroll(&mut self, raw_offset: f64, max_offset: f64) {
        self.animator.on_scroll(raw_offset, max_offset);
    }

    /// Frame callback. Returns the new pose, or `None` once halted.
    pub fn tick(&mut self) -> Result<Option<CameraPose>> {
        self.frames.frame_fired();
        match self.animator.step() {
            Some(pose) => {
                self.frames.schedule()?;
                Ok(Some(pose))
            }
            None => {
                self.frames.cancel();
                Ok(None)
            }
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` on the browser window.
pub struct RafHost {
    window: web_sys::Window,
    callback: FrameCallback,
}

impl FrameHost for RafHost {
    type Handle = i32;

    fn request_frame(&self) -> Result<i32> {
        let slot = self.callback.borrow();
        let cb = slot
            .as_ref()
            .ok_or(LandingError::Allocation("frame callback"))?;
        Ok(self.window.request_animation_frame(cb.as_ref().unchecked_ref())?)
    }

    fn cancel_frame(&self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({handle}) failed: {e:?}");
        }
    }
}

pub type SharedDriver = Rc<RefCell<CameraDriver<RafHost>>>;

/// Builds a driver whose frames write the eased pose through `on_pose`.
pub fn raf_camera_driver(
    animator: ScrollCameraAnimator,
    on_pose: impl Fn(CameraPose) + 'static,
) -> Result<SharedDriver> {
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let host = RafHost {
        window,
        callback: callback.clone(),
    };
    let driver = Rc::new(RefCell::new(CameraDriver::new(animator, host)));
    let weak: Weak<RefCell<CameraDriver<RafHost>>> = Rc::downgrade(&driver);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(driver) = weak.upgrade() else {
            return;
        };
        let outcome = driver.borrow_mut().tick();
        match outcome {
            Ok(Some(pose)) => on_pose(pose),
            Ok(None) => {}
            Err(e) => log::error!("camera frame failed: {e}"),
        }
    }) as Box<dyn FnMut()>));
    Ok(driver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;
    use crate::state::CameraPath;
    use std::cell::Cell;

    #[derive(Default)]
    struct ManualHost {
        next: Cell<u32>,
        requested: RefCell<Vec<u32>>,
        cancelled: RefCell<Vec<u32>>,
    }

    impl FrameHost for Rc<ManualHost> {
        type Handle = u32;

        fn request_frame(&self) -> Result<u32> {
            let id = self.next.get() + 1;
            self.next.set(id);
            self.requested.borrow_mut().push(id);
            Ok(id)
        }

        fn cancel_frame(&self, handle: u32) {
            self.cancelled.borrow_mut().push(handle);
        }
    }

    fn driver() -> (CameraDriver<Rc<ManualHost>>, Rc<ManualHost>) {
        let host = Rc::new(ManualHost::default());
        let cfg = CameraConfig::default();
        let animator = ScrollCameraAnimator::new(CameraPath::from(&cfg), cfg.smoothing);
        (CameraDriver::new(animator, host.clone()), host)
    }

    #[test]
    fn schedule_is_idempotent() {
        let host = Rc::new(ManualHost::default());
        let mut frames = FrameLoop::new(host.clone());
        frames.schedule().unwrap();
        frames.schedule().unwrap();
        assert_eq!(host.requested.borrow().len(), 1);
        assert!(frames.is_scheduled());
    }

    #[test]
    fn cancel_happens_once() {
        let host = Rc::new(ManualHost::default());
        let mut frames = FrameLoop::new(host.clone());
        frames.schedule().unwrap();
        assert!(frames.cancel());
        assert!(!frames.cancel());
        drop(frames);
        assert_eq!(*host.cancelled.borrow(), vec![1]);
    }

    #[test]
    fn drop_releases_pending_frame() {
        let host = Rc::new(ManualHost::default());
        {
            let mut frames = FrameLoop::new(host.clone());
            frames.schedule().unwrap();
        }
        assert_eq!(*host.cancelled.borrow(), vec![1]);
    }

    #[test]
    fn open_steps_and_schedules() {
        let (mut d, host) = driver();
        let pose = d.open().unwrap();
        assert!(d.animator().is_active());
        assert!(d.frames().is_scheduled());
        // target is zero on entry, so the first step stays at the base pose
        assert_eq!(pose, d.animator().pose());
        assert_eq!(host.requested.borrow().len(), 1);
    }

    #[test]
    fn ticks_reschedule_while_open() {
        let (mut d, host) = driver();
        d.open().unwrap();
        d.scroll(1000.0, 1000.0);
        for _ in 0..5 {
            assert!(d.tick().unwrap().is_some());
        }
        assert_eq!(host.requested.borrow().len(), 6);
        assert!(host.cancelled.borrow().is_empty());
        assert!(d.animator().state().current > 0.4);
    }

    #[test]
    fn closing_with_pending_frame_halts_updates() {
        let (mut d, host) = driver();
        d.open().unwrap();
        d.scroll(500.0, 1000.0);
        d.tick().unwrap();
        let base = d.close();
        assert_eq!(base, CameraPath::from(&CameraConfig::default()).base());
        assert_eq!(host.cancelled.borrow().len(), 1);
        // a frame that was already in flight still fires once
        assert!(d.tick().unwrap().is_none());
        assert!(d.tick().unwrap().is_none());
        assert!(!d.frames().is_scheduled());
        assert_eq!(host.cancelled.borrow().len(), 1);
        assert_eq!(host.requested.borrow().len(), 2);
    }

    #[test]
    fn reopen_starts_from_base() {
        let (mut d, _host) = driver();
        d.open().unwrap();
        d.scroll(1.0, 1.0);
        for _ in 0..20 {
            d.tick().unwrap();
        }
        d.close();
        d.open().unwrap();
        assert_eq!(d.animator().state().current, 0.0);
        assert_eq!(d.animator().state().target, 0.0);
    }
}
