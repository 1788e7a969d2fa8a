//! Dismissible announcement ribbon above the navbar. The dismissal is
//! remembered across visits, and the ribbon mirrors its height into the
//! `--banner-height` CSS variable so the fixed navbar can offset itself.

use yew::prelude::*;

use crate::components::legal_modals::CloseIcon;
use crate::dom;
use crate::storage;

const BANNER_HEIGHT: &str = "44px";

const TICKER_TEXT: &str =
    "Bénéficiez de -15% sur votre premier site web — Offre réservée aux nouveaux clients.";

#[function_component(AnnouncementBanner)]
pub fn announcement_banner() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                if !storage::banner_dismissed() {
                    visible.set(true);
                    dom::set_root_css_var("--banner-height", BANNER_HEIGHT);
                }
                || ()
            },
            (),
        );
    }

    let dismiss = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            storage::dismiss_banner();
            dom::set_root_css_var("--banner-height", "0px");
            visible.set(false);
        })
    };

    // The in-text CTA dismisses the ribbon and jumps to the contact form.
    let claim_offer = {
        let dismiss = dismiss.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dom::scroll_to_section("contact");
            dismiss.emit(event);
        })
    };

    if !*visible {
        return html! {};
    }

    let cta = |onclick: Callback<MouseEvent>| {
        html! {
            <a href="#contact" class="announcement-banner__link" {onclick}>
                {"En profiter maintenant"}
            </a>
        }
    };

    html! {
        <div class="announcement-banner" role="banner" aria-label="Offre spéciale">
            <div class="announcement-banner__desktop">
                <span class="announcement-banner__badge">{"Offre de bienvenue"}</span>
                <p class="announcement-banner__text">
                    {"Bénéficiez de "}
                    <strong>{"-15% sur votre premier site web"}</strong>
                    {" — Offre réservée aux nouveaux clients. "}
                    { cta(claim_offer.clone()) }
                </p>
            </div>

            // Small screens get a fixed badge plus a scrolling ticker;
            // the duplicated item keeps the loop seamless.
            <div class="announcement-banner__mobile">
                <span class="announcement-banner__badge">{"Offre de bienvenue"}</span>
                <div class="announcement-banner__ticker">
                    <div class="announcement-banner__ticker-track">
                        <span class="announcement-banner__ticker-item">
                            {TICKER_TEXT}
                            {"\u{a0}\u{a0}·\u{a0}\u{a0}"}
                            { cta(claim_offer.clone()) }
                        </span>
                        <span class="announcement-banner__ticker-item" aria-hidden="true">
                            {TICKER_TEXT}
                            {"\u{a0}\u{a0}·\u{a0}\u{a0}"}
                            { cta(claim_offer) }
                        </span>
                    </div>
                </div>
            </div>

            <button
                class="announcement-banner__close"
                onclick={dismiss}
                aria-label="Fermer la bannière"
            >
                <CloseIcon />
            </button>
        </div>
    }
}
