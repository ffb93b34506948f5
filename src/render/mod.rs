pub mod gl;
pub mod glyphs;
pub mod mesh;
pub mod renderer;
pub mod scene;

pub use renderer::{FrameView, Renderer};
