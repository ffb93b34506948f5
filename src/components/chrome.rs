use yew::prelude::*;

use crate::content::{BRAND, COPYRIGHT, LOGO_SRC, NAV_LINKS};
use crate::state::route::ABOUT_HASH;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub on_logo: Callback<()>,
    pub on_about: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let logo_click = {
        let cb = props.on_logo.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let about_click = {
        let cb = props.on_about.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    html! {
        <header class="header">
            <div class="header-content">
                <div class="logo-container" id="logo-link" style="cursor: pointer;" onclick={logo_click}>
                    <img src={LOGO_SRC} alt={format!("{BRAND} Logo")} class="logo-image" />
                    <div class="logo">{ BRAND }</div>
                </div>
                <nav class="nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} target="_blank" rel="noopener" class="nav-link">{ link.label }</a>
                    }) }
                    <a href={ABOUT_HASH} class="nav-link" id="about-link" onclick={about_click}>{"ABOUT"}</a>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="copyright">{ COPYRIGHT }</div>
        </footer>
    }
}
