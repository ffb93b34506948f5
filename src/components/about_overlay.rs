use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::RevealConfig;
use crate::content::{ABOUT, AboutBlock, REVEAL_SELECTOR};
use crate::error::Result;

#[derive(Properties, PartialEq, Clone)]
pub struct AboutOverlayProps {
    pub active: bool,
    pub reveal: RevealConfig,
    /// `(scroll_top, max_scroll)` of the overlay.
    pub on_scroll: Callback<(f64, f64)>,
}

fn block_html(block: &AboutBlock) -> Html {
    let class = block.class();
    match *block {
        AboutBlock::Title(t) => html! { <h1 class={class}>{ t }</h1> },
        AboutBlock::Text(t) => html! { <p class={class}>{ t }</p> },
        AboutBlock::Subtitle(t) => html! { <h2 class={class}>{ t }</h2> },
        AboutBlock::SectionTitle(t) => html! { <h3 class={class}>{ t }</h3> },
        AboutBlock::Feature { title, text } => html! {
            <div class={class}>
                <h4 class="about-feature-title">{ title }</h4>
                <p class="about-text">{ text }</p>
            </div>
        },
        AboutBlock::CallToAction(t) => html! { <p class={class}>{ t }</p> },
    }
}

/// Hides every revealable element and watches it scroll into view.
fn observe_reveals(
    overlay: &Element,
    cfg: &RevealConfig,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)> {
    let on_intersect = Closure::wrap(Box::new(|entries: js_sys::Array, _obs: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("visible");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(&cfg.root_margin);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;

    let nodes = overlay.query_selector_all(REVEAL_SELECTOR)?;
    let mut watched = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        el.class_list().remove_1("visible")?;
        observer.observe(&el);
        watched += 1;
    }
    log::debug!("watching {watched} about elements");
    Ok((observer, on_intersect))
}

#[function_component(AboutOverlay)]
pub fn about_overlay(props: &AboutOverlayProps) -> Html {
    let overlay_ref = use_node_ref();

    {
        let overlay_ref = overlay_ref.clone();
        let reveal = props.reveal.clone();
        use_effect_with(props.active, move |active| {
            let mut armed = None;
            if *active {
                if let Some(overlay) = overlay_ref.cast::<Element>() {
                    match observe_reveals(&overlay, &reveal) {
                        Ok(pair) => armed = Some(pair),
                        Err(e) => log::warn!("reveal animations disabled: {e}"),
                    }
                }
            }
            move || {
                if let Some((observer, on_intersect)) = armed {
                    observer.disconnect();
                    drop(on_intersect);
                }
            }
        });
    }

    let onscroll = {
        let cb = props.on_scroll.clone();
        Callback::from(move |e: Event| {
            let Some(el) = e.target_dyn_into::<Element>() else {
                return;
            };
            let top = el.scroll_top() as f64;
            let max = (el.scroll_height() - el.client_height()) as f64;
            cb.emit((top, max));
        })
    };

    html! {
        <div
            id="about-overlay"
            class={classes!("about-overlay", props.active.then_some("active"))}
            ref={overlay_ref}
            {onscroll}
        >
            <div class="about-content">
                { for ABOUT.iter().map(block_html) }
            </div>
        </div>
    }
}
