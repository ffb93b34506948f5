//! Error types for the browser and WebGL plumbing.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised while wiring the page to the browser.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("element not found: {0}")]
    ElementMissing(&'static str),
    #[error("WebGL2 is not available")]
    NoWebGl2,
    #[error("shader compile failed: {0}")]
    ShaderCompile(String),
    #[error("program link failed: {0}")]
    ProgramLink(String),
    #[error("could not allocate {0}")]
    Allocation(&'static str),
    #[error("shadow framebuffer incomplete (status {0:#x})")]
    IncompleteFramebuffer(u32),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Problems with the embedded landing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("camera smoothing must be in (0, 1], got {0}")]
    Smoothing(f32),
    #[error("camera clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("shadow map size must be a non-zero power of two, got {0}")]
    ShadowMapSize(u32),
    #[error("reveal threshold must be in [0, 1], got {0}")]
    RevealThreshold(f64),
}

pub type Result<T, E = LandingError> = std::result::Result<T, E>;
