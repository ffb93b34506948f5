pub mod about_overlay;
pub mod app;
pub mod chrome;
pub mod hero_canvas;

pub use app::App;
