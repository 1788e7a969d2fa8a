//! Floating "back to top" button, shown once the visitor has scrolled
//! past the hero.

use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;

const SHOW_AFTER_PX: f64 = 500.0;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: web_sys::Event| {
            visible.set(dom::scroll_y() > SHOW_AFTER_PX);
        });
    }

    let scroll_up = Callback::from(|_: MouseEvent| dom::scroll_to_top());

    html! {
        <button
            class={classes!("back-to-top", visible.then_some("back-to-top--visible"))}
            onclick={scroll_up}
            aria-label="Retour en haut de page"
        >
            <svg
                width="18" height="18" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round"
            >
                <line x1="12" y1="19" x2="12" y2="5" />
                <polyline points="5 12 12 5 19 12" />
            </svg>
        </button>
    }
}
