use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::config::LandingConfig;
use crate::error::{LandingError, Result};
use crate::render::{FrameView, Renderer, scene};
use crate::state::{CameraPose, Lens, LightRig};
use crate::util::{Shared, window};

#[derive(Properties, PartialEq, Clone)]
pub struct HeroCanvasProps {
    pub config: Rc<LandingConfig>,
    pub pose: Shared<CameraPose>,
    pub light: Shared<LightRig>,
}

/// Sizes the drawing buffer to the window in device pixels and returns the
/// CSS size.
fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(f64, f64)> {
    let win = window()?;
    let w = win.inner_width()?.as_f64().unwrap_or(1.0);
    let h = win.inner_height()?.as_f64().unwrap_or(1.0);
    let dpr = win.device_pixel_ratio();
    canvas.set_width((w * dpr).round() as u32);
    canvas.set_height((h * dpr).round() as u32);
    Ok((w, h))
}

#[function_component(HeroCanvas)]
pub fn hero_canvas(props: &HeroCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let props = props.clone();
        use_effect_with((), move |_| {
            let teardown = match start(&canvas_ref, props) {
                Ok(stop) => Some(stop),
                Err(e) => {
                    log::error!("hero scene disabled: {e}");
                    None
                }
            };
            move || {
                if let Some(stop) = teardown {
                    stop();
                }
            }
        });
    }

    html! { <canvas id="three-canvas" ref={canvas_ref}></canvas> }
}

/// Builds the renderer and starts the render loop. The returned closure stops
/// the loop and removes listeners.
fn start(canvas_ref: &NodeRef, props: HeroCanvasProps) -> Result<Box<dyn FnOnce()>> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(LandingError::ElementMissing("three-canvas"))?;
    let win = window()?;
    let cfg = props.config.clone();

    let (w, h) = fit_to_window(&canvas)?;
    let objects = scene::build(&cfg.scene, &cfg.light);
    let renderer = Rc::new(RefCell::new(Renderer::new(&canvas, &objects, &cfg.light)?));
    let mut lens = Lens::new(&cfg.camera, 1.0);
    lens.set_viewport(w, h);
    let lens = Rc::new(RefCell::new(lens));

    // Render loop
    let raf_id = Rc::new(RefCell::new(None::<i32>));
    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id = raf_id.clone();
        let closure_cell_loop = closure_cell.clone();
        let renderer = renderer.clone();
        let lens = lens.clone();
        let win_loop = win.clone();
        let cfg = cfg.clone();
        *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let view = FrameView {
                camera: *props.pose.borrow(),
                lens: *lens.borrow(),
                light_view_proj: props.light.borrow().shadow_view_proj(&cfg.light),
            };
            renderer.borrow().render(&view);
            if let Some(cb) = closure_cell_loop.borrow().as_ref() {
                if let Ok(id) = win_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = closure_cell.borrow().as_ref() {
        *raf_id.borrow_mut() = Some(win.request_animation_frame(cb.as_ref().unchecked_ref())?);
    }

    // Resize
    let resize_cb = {
        let canvas = canvas.clone();
        let renderer = renderer.clone();
        let lens = lens.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| match fit_to_window(&canvas) {
            Ok((w, h)) => {
                lens.borrow_mut().set_viewport(w, h);
                renderer.borrow_mut().resize(canvas.width(), canvas.height());
            }
            Err(e) => log::warn!("resize failed: {e}"),
        }) as Box<dyn FnMut(_)>)
    };
    win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    Ok(Box::new(move || {
        if let Some(id) = raf_id.borrow_mut().take() {
            let _ = win.cancel_animation_frame(id);
        }
        let _ = win.remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        drop(resize_cb);
        // breaks the closure's reference to itself
        closure_cell.borrow_mut().take();
    }))
}
