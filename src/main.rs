mod components;
mod config;
mod content;
mod error;
mod logging;
mod render;
mod scheduler;
mod state;
mod util;

fn main() {
    logging::init(log::LevelFilter::Info);
    yew::Renderer::<components::App>::new().render();
}
