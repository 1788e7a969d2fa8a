//! Page footer: brand block with the newsletter field, anchor link
//! columns, and the legal column wired to the modal controller from
//! context.

use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::legal_modals::{LegalDoc, LegalModalsHandle};
use crate::dom;

const SERVICE_LINKS: [(&str, &str); 4] = [
    ("Site Vitrine", "services"),
    ("E-Commerce", "services"),
    ("Application Web", "services"),
    ("Maintenance", "contact"),
];

const COMPANY_LINKS: [(&str, &str); 4] = [
    ("À propos", "hero"),
    ("Portfolio", "projects"),
    ("Tarifs", "services"),
    ("Contact", "contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let modals = use_context::<LegalModalsHandle>();
    let year = Utc::now().year();

    let anchor = |(label, section): (&'static str, &'static str)| {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dom::scroll_to_section(section);
        });
        html! {
            <a key={label} href={format!("#{section}")} class="footer__link" {onclick}>
                {label}
            </a>
        }
    };

    let legal_actions: Html = match &modals {
        Some(handle) => {
            let legal_button = |label: &'static str, onclick: Callback<MouseEvent>| {
                html! {
                    <button
                        key={label}
                        type="button"
                        class="footer__link footer__link--btn"
                        {onclick}
                    >
                        {label}
                    </button>
                }
            };

            let open_mentions = {
                let open = handle.open.clone();
                Callback::from(move |_: MouseEvent| open.emit(LegalDoc::Mentions))
            };
            let open_confidentialite = {
                let open = handle.open.clone();
                Callback::from(move |_: MouseEvent| open.emit(LegalDoc::Confidentialite))
            };
            let manage_cookies = {
                let manage = handle.manage_cookies.clone();
                Callback::from(move |_: MouseEvent| manage.emit(()))
            };

            html! {
                <>
                    { legal_button("Mentions légales", open_mentions) }
                    { legal_button("Politique de confidentialité", open_confidentialite) }
                    { legal_button("Gérer mes cookies", manage_cookies) }
                </>
            }
        }
        None => html! {},
    };

    html! {
        <footer class="footer">
            <div class="footer__container">
                <div class="footer__main">
                    <div class="footer__brand">
                        <a href="/" class="footer__logo">
                            <span class="footer__logo-dot" />
                            {"Supaco Digital"}
                        </a>
                        <p class="footer__tagline">
                            {"Votre partenaire pour une présence web professionnelle. \
                              Sites livrés en 72h, prix transparents, satisfaction garantie."}
                        </p>
                        <div class="footer__newsletter">
                            <input
                                type="email"
                                class="footer__newsletter-input"
                                placeholder="Votre email"
                            />
                            <button class="footer__newsletter-btn">
                                {"S'abonner"}
                            </button>
                        </div>
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__column-title">{"Services"}</h4>
                        { for SERVICE_LINKS.iter().copied().map(anchor) }
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__column-title">{"Entreprise"}</h4>
                        { for COMPANY_LINKS.iter().copied().map(anchor) }
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__column-title">{"Légal"}</h4>
                        {legal_actions}
                    </div>
                </div>

                <div class="footer__bottom">
                    <p class="footer__copyright">
                        { format!("© {year} Supaco Digital. Tous droits réservés.") }
                    </p>
                </div>
            </div>

            <div class="footer__decoration" />
        </footer>
    }
}
