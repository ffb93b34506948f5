use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use yew::prelude::*;

use super::{about_overlay::AboutOverlay, chrome::Footer, chrome::Header, hero_canvas::HeroCanvas};
use crate::config::LandingConfig;
use crate::scheduler::{SharedDriver, raf_camera_driver};
use crate::state::{CameraPath, CameraPose, LightRig, Mode, ScrollCameraAnimator};
use crate::util::{Shared, set_body_overflow};

#[function_component(App)]
pub fn app() -> Html {
    let config: Rc<LandingConfig> = use_memo((), |_| LandingConfig::load());
    let mode = use_state(Mode::current);
    let pose = (*use_state(|| Shared::new(CameraPath::from(&config.camera).base()))).clone();
    let light = (*use_state(|| Shared::new(LightRig::new(&config.light)))).clone();

    // Scroll camera; frames write the eased pose straight into the shared pose
    let driver = use_mut_ref(|| -> Option<SharedDriver> {
        let animator =
            ScrollCameraAnimator::new(CameraPath::from(&config.camera), config.camera.smoothing);
        let pose = pose.clone();
        match raf_camera_driver(animator, move |p: CameraPose| pose.set(p)) {
            Ok(d) => Some(d),
            Err(e) => {
                log::error!("scroll camera disabled: {e}");
                None
            }
        }
    });

    // Hash navigation
    {
        let mode = mode.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let on_hash = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                mode.set(Mode::current());
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                if let Err(e) =
                    win.add_event_listener_with_callback("hashchange", on_hash.as_ref().unchecked_ref())
                {
                    log::error!("hashchange listener not installed: {e:?}");
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "hashchange",
                        on_hash.as_ref().unchecked_ref(),
                    );
                }
                drop(on_hash);
            }
        });
    }

    // Mode transitions
    {
        let driver = driver.clone();
        let pose = pose.clone();
        use_effect_with(*mode, move |mode| {
            log::info!("mode -> {mode:?}");
            if let Err(e) = set_body_overflow(mode.body_overflow()) {
                log::warn!("body overflow not updated: {e}");
            }
            if let Some(d) = driver.borrow().as_ref() {
                let mut d = d.borrow_mut();
                match mode {
                    Mode::About => match d.open() {
                        Ok(p) => pose.set(p),
                        Err(e) => log::error!("scroll camera did not start: {e}"),
                    },
                    Mode::Hero => pose.set(d.close()),
                }
            }
            || ()
        });
    }

    let on_scroll = {
        let driver = driver.clone();
        Callback::from(move |(top, max): (f64, f64)| {
            if let Some(d) = driver.borrow().as_ref() {
                d.borrow_mut().scroll(top, max);
            }
        })
    };

    let container_ref = use_node_ref();
    let on_mouse_move = {
        let light = light.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(container) = container_ref.cast::<Element>() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let ndc = LightRig::normalize_pointer(
                Vec2::new(e.client_x() as f32, e.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            if let Some(ndc) = ndc {
                light.borrow_mut().follow_pointer(ndc);
            }
        })
    };
    let on_mouse_leave = {
        let light = light.clone();
        Callback::from(move |_: MouseEvent| light.borrow_mut().pointer_left())
    };

    let to_hero = Callback::from(|_: ()| Mode::Hero.navigate());
    let to_about = Callback::from(|_: ()| Mode::About.navigate());

    html! {
        <div class="container" ref={container_ref} onmousemove={on_mouse_move} onmouseleave={on_mouse_leave}>
            <HeroCanvas config={config.clone()} pose={pose.clone()} light={light.clone()} />
            <Header on_logo={to_hero} on_about={to_about} />
            <Footer />
            <AboutOverlay
                active={*mode == Mode::About}
                reveal={config.reveal.clone()}
                {on_scroll}
            />
        </div>
    }
}
