pub mod camera;
pub mod light;
pub mod route;
pub mod scroll;

pub use camera::{CameraPath, CameraPose, Lens};
pub use light::LightRig;
pub use route::Mode;
pub use scroll::ScrollCameraAnimator;
