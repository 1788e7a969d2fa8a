//! Contact panel: a two-tab card with the message form and the Calendly
//! booking embed. The form walks Idle -> Submitting -> Success/Error;
//! one delivery call per attempt, the submit control is disabled while
//! a call is in flight, and a failure keeps the field values so the
//! visitor can correct and retry.

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::form::{ContactFields, SubmitStatus};
use crate::mailer;
use crate::viewport::{use_section_reveal, REVEAL_MARGIN};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ContactTab {
    Message,
    Calendly,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let revealed = use_section_reveal("contact", REVEAL_MARGIN);
    let active_tab = use_state_eq(|| ContactTab::Message);
    let fields = use_state(ContactFields::default);
    let status = use_state(|| SubmitStatus::Idle);

    let edit = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        move |value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        }
    };

    let on_name = {
        let edit = edit(|fields, value| fields.name = value);
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_email = {
        let edit = edit(|fields, value| fields.email = value);
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_phone = {
        let edit = edit(|fields, value| fields.phone = value);
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_service = {
        let edit = edit(|fields, value| fields.service = value);
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            edit(select.value());
        })
    };
    let on_message = {
        let edit = edit(|fields, value| fields.message = value);
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            edit(area.value());
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            // One delivery per attempt: nothing happens while a call is
            // already in flight.
            let Some(submitting) = status.begin() else {
                return;
            };
            if !fields.is_complete() {
                return;
            }
            status.set(submitting);

            let params = fields.template_params();
            let fields = fields.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = mailer::send_contact_message(&params).await;
                if outcome.is_ok() {
                    let mut cleared = (*fields).clone();
                    cleared.clear();
                    fields.set(cleared);
                } else if let Err(reason) = &outcome {
                    log!("contact message delivery failed:", reason.clone());
                }
                status.set(SubmitStatus::settle(outcome));
            });
        })
    };

    let reset_status = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| status.set(SubmitStatus::Idle))
    };

    let select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: ContactTab| active_tab.set(tab))
    };

    let tab_button = |tab: ContactTab, label: &'static str, icon: Html| {
        let onclick = {
            let select_tab = select_tab.clone();
            Callback::from(move |_: MouseEvent| select_tab.emit(tab))
        };
        let class = classes!(
            "contact__tab",
            (*active_tab == tab).then_some("contact__tab--active"),
        );
        html! {
            <button type="button" {class} {onclick}>
                {icon}
                {label}
            </button>
        }
    };

    let calendly_src = format!(
        "{}?hide_landing_page_details=1&hide_gdpr_banner=1&background_color=111111&text_color=ffffff&primary_color=00d4ff",
        config::CALENDLY_URL,
    );

    let section_class = classes!("contact", revealed.then_some("contact--visible"));

    html! {
        <section class={section_class} id="contact">
            <div class="contact__container">
                <div class="contact__wrapper">
                    <div class="contact__info">
                        <span class="contact__label">{"Contact"}</span>
                        <h2 class="contact__title">{"Parlons de votre projet"}</h2>
                        <p class="contact__description">
                            {"Une idée ? Un projet ? Contactez-nous pour un devis gratuit et \
                              sans engagement. Réponse garantie sous 24 heures."}
                        </p>

                        <div class="contact__details">
                            <ContactDetail label="Email" value={config::CONTACT_EMAIL} />
                            <ContactDetail label="Localisation" value="Pays de Gex, France" />
                            <ContactDetail label="Réponse" value="Sous 24 heures" />
                        </div>

                        <div class="contact__socials">
                            <a
                                href={config::INSTAGRAM_URL}
                                class="contact__social"
                                aria-label="Instagram"
                            >
                                <svg
                                    width="20" height="20" viewBox="0 0 24 24"
                                    fill="none" stroke="currentColor" stroke-width="2"
                                    stroke-linecap="round" stroke-linejoin="round"
                                >
                                    <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                                    <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
                                </svg>
                            </a>
                            <span>{"Suivez-nous !"}</span>
                        </div>
                    </div>

                    <div class="contact__form">
                        <div class="contact__tabs">
                            { tab_button(ContactTab::Message, "Envoyer un message", html! {
                                <svg
                                    width="16" height="16" viewBox="0 0 24 24"
                                    fill="none" stroke="currentColor" stroke-width="2"
                                    stroke-linecap="round" stroke-linejoin="round"
                                >
                                    <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                                    <polyline points="22,6 12,13 2,6" />
                                </svg>
                            }) }
                            { tab_button(ContactTab::Calendly, "Rendez-vous", html! {
                                <svg
                                    width="16" height="16" viewBox="0 0 24 24"
                                    fill="none" stroke="currentColor" stroke-width="2"
                                    stroke-linecap="round" stroke-linejoin="round"
                                >
                                    <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
                                    <line x1="16" y1="2" x2="16" y2="6" />
                                    <line x1="8" y1="2" x2="8" y2="6" />
                                    <line x1="3" y1="10" x2="21" y2="10" />
                                </svg>
                            }) }
                        </div>

                        if *active_tab == ContactTab::Calendly {
                            <div class="contact__calendly">
                                <iframe
                                    class="contact__calendly-iframe"
                                    src={calendly_src}
                                    title="Réserver un appel"
                                    frameborder="0"
                                    scrolling="no"
                                    loading="lazy"
                                />
                            </div>
                        }

                        if *active_tab == ContactTab::Message {
                            { match &*status {
                                SubmitStatus::Success => html! {
                                    <div class="contact__success">
                                        <div class="contact__success-icon">
                                            <svg
                                                width="48" height="48" viewBox="0 0 24 24"
                                                fill="none" stroke="currentColor" stroke-width="2"
                                                stroke-linecap="round" stroke-linejoin="round"
                                            >
                                                <polyline points="20 6 9 17 4 12" />
                                            </svg>
                                        </div>
                                        <h3 class="contact__success-title">{"Message envoyé !"}</h3>
                                        <p class="contact__success-text">
                                            {"Merci pour votre message. Nous vous répondrons dans \
                                              les 24 heures."}
                                        </p>
                                        <button
                                            class="contact__form-submit contact__form-submit--secondary"
                                            onclick={reset_status.clone()}
                                        >
                                            {"Envoyer un autre message"}
                                        </button>
                                    </div>
                                },
                                SubmitStatus::Error(message) => html! {
                                    <div class="contact__error">
                                        <div class="contact__error-icon">
                                            <svg
                                                width="48" height="48" viewBox="0 0 24 24"
                                                fill="none" stroke="currentColor" stroke-width="2"
                                                stroke-linecap="round" stroke-linejoin="round"
                                            >
                                                <line x1="18" y1="6" x2="6" y2="18" />
                                                <line x1="6" y1="6" x2="18" y2="18" />
                                            </svg>
                                        </div>
                                        <h3 class="contact__error-title">{"Erreur d'envoi"}</h3>
                                        <p class="contact__error-text">{message.clone()}</p>
                                        <p class="contact__error-alternative">
                                            {"Vous pouvez aussi nous contacter directement à "}
                                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                                {config::CONTACT_EMAIL}
                                            </a>
                                        </p>
                                        <button
                                            class="contact__form-submit"
                                            onclick={reset_status.clone()}
                                        >
                                            {"Réessayer"}
                                        </button>
                                    </div>
                                },
                                SubmitStatus::Idle | SubmitStatus::Submitting => html! {
                                    <form onsubmit={on_submit.clone()} class="contact__form-grid">
                                        <div class="contact__form-group">
                                            <label class="contact__form-label">{"Nom complet"}</label>
                                            <input
                                                type="text"
                                                name="name"
                                                value={fields.name.clone()}
                                                oninput={on_name.clone()}
                                                class="contact__form-input"
                                                placeholder="Jean Dupont"
                                                required={true}
                                            />
                                        </div>

                                        <div class="contact__form-group">
                                            <label class="contact__form-label">{"Email"}</label>
                                            <input
                                                type="email"
                                                name="email"
                                                value={fields.email.clone()}
                                                oninput={on_email.clone()}
                                                class="contact__form-input"
                                                placeholder="jean@exemple.com"
                                                required={true}
                                            />
                                        </div>

                                        <div class="contact__form-group">
                                            <label class="contact__form-label">{"Téléphone"}</label>
                                            <input
                                                type="tel"
                                                name="phone"
                                                value={fields.phone.clone()}
                                                oninput={on_phone.clone()}
                                                class="contact__form-input"
                                                placeholder="+33 6 12 34 56 78"
                                            />
                                        </div>

                                        <div class="contact__form-group">
                                            <label class="contact__form-label">{"Service"}</label>
                                            <select
                                                name="service"
                                                onchange={on_service.clone()}
                                                class="contact__form-select"
                                                required={true}
                                            >
                                                <option value="" selected={fields.service.is_empty()}>
                                                    {"Sélectionnez un service"}
                                                </option>
                                                <option value="vitrine" selected={fields.service == "vitrine"}>
                                                    {"Site Vitrine"}
                                                </option>
                                                <option value="ecommerce" selected={fields.service == "ecommerce"}>
                                                    {"E-Commerce"}
                                                </option>
                                                <option value="app" selected={fields.service == "app"}>
                                                    {"Application Web"}
                                                </option>
                                                <option value="autre" selected={fields.service == "autre"}>
                                                    {"Autre projet"}
                                                </option>
                                            </select>
                                        </div>

                                        <div class="contact__form-group contact__form-group--full">
                                            <label class="contact__form-label">{"Votre message"}</label>
                                            <textarea
                                                name="message"
                                                value={fields.message.clone()}
                                                oninput={on_message.clone()}
                                                class="contact__form-textarea"
                                                placeholder="Décrivez votre projet, vos besoins..."
                                                required={true}
                                            />
                                        </div>

                                        <div class="contact__form-group contact__form-group--full">
                                            <button
                                                type="submit"
                                                class="contact__form-submit"
                                                disabled={status.is_submitting()}
                                            >
                                                if status.is_submitting() {
                                                    <span class="spinner" />
                                                    {"Envoi en cours..."}
                                                } else {
                                                    {"Envoyer ma demande"}
                                                }
                                            </button>
                                        </div>
                                    </form>
                                },
                            } }
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactDetailProps {
    label: &'static str,
    value: &'static str,
}

#[function_component(ContactDetail)]
fn contact_detail(props: &ContactDetailProps) -> Html {
    html! {
        <div class="contact__detail">
            <div class="contact__detail-content">
                <span class="contact__detail-label">{props.label}</span>
                <span class="contact__detail-value">{props.value}</span>
            </div>
        </div>
    }
}
