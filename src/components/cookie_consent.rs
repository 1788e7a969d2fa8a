//! Cookie-consent prompt. On a first visit the banner appears after a
//! short delay so it does not compete with the initial paint; accepting
//! or declining persists the decision and the banner stays away until
//! the footer's "Gérer mes cookies" resets it through the reopen bus.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::legal_modals::CloseIcon;
use crate::dom;
use crate::events::ConsentReopenBus;
use crate::storage::ConsentState;

const PROMPT_DELAY_MS: u32 = 1_500;

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let visible = use_state_eq(|| false);
    let show_policy = use_state_eq(|| false);
    let reopen_bus = use_context::<ConsentReopenBus>();

    // First visit: show the prompt after the delay. The timeout handle
    // is dropped on unmount, which cancels it.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut delay = None;
                if ConsentState::load().needs_prompt() {
                    let visible = visible.clone();
                    delay = Some(Timeout::new(PROMPT_DELAY_MS, move || visible.set(true)));
                }
                move || drop(delay)
            },
            (),
        );
    }

    // A reopen notification shows the prompt immediately, no delay.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |bus: &Option<ConsentReopenBus>| {
                let subscription = bus.as_ref().map(|bus| {
                    let visible = visible.clone();
                    bus.subscribe(Callback::from(move |_| visible.set(true)))
                });
                move || drop(subscription)
            },
            reopen_bus,
        );
    }

    // Background scroll is suspended while the policy detail is open and
    // restored exactly once, including when the component unmounts with
    // the detail still open.
    use_effect_with_deps(
        move |shown| {
            if *shown {
                dom::set_body_scroll_locked(true);
            }
            move || dom::set_body_scroll_locked(false)
        },
        *show_policy,
    );

    let accept = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            ConsentState::Accepted.store();
            visible.set(false);
            log::info!("cookies accepted");
        })
    };
    let decline = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            ConsentState::Declined.store();
            visible.set(false);
            log::info!("cookies declined");
        })
    };

    let open_policy = {
        let show_policy = show_policy.clone();
        Callback::from(move |_: MouseEvent| show_policy.set(true))
    };
    let close_policy = {
        let show_policy = show_policy.clone();
        Callback::from(move |_: MouseEvent| show_policy.set(false))
    };
    let keep_policy_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            if *visible {
                <div class="cookie-consent">
                    <div class="cookie-consent__content">
                        <div class="cookie-consent__icon">
                            <svg
                                width="24" height="24" viewBox="0 0 24 24"
                                fill="none" stroke="currentColor" stroke-width="2"
                                stroke-linecap="round" stroke-linejoin="round"
                            >
                                <path d="M12 2a10 10 0 1 0 10 10 4 4 0 0 1-5-5 4 4 0 0 1-5-5" />
                                <path d="M8.5 8.5v.01" />
                                <path d="M16 15.5v.01" />
                                <path d="M12 12v.01" />
                            </svg>
                        </div>
                        <div class="cookie-consent__text">
                            <p>
                                {"Nous utilisons des cookies pour améliorer votre expérience sur \
                                  notre site. En continuant, vous acceptez notre "}
                                <button
                                    type="button"
                                    class="cookie-consent__link"
                                    onclick={open_policy}
                                >
                                    {"politique de cookies"}
                                </button>
                                {"."}
                            </p>
                        </div>
                    </div>
                    <div class="cookie-consent__actions">
                        <button
                            class="cookie-consent__btn cookie-consent__btn--decline"
                            onclick={decline.clone()}
                        >
                            {"Refuser"}
                        </button>
                        <button
                            class="cookie-consent__btn cookie-consent__btn--accept"
                            onclick={accept}
                        >
                            {"Accepter"}
                        </button>
                    </div>
                    <button
                        class="cookie-consent__close"
                        onclick={decline}
                        aria-label="Fermer"
                    >
                        <CloseIcon />
                    </button>
                </div>
            }

            if *show_policy {
                <div class="cookie-policy-overlay" onclick={close_policy.clone()}>
                    <div class="cookie-policy" onclick={keep_policy_open}>
                        <div class="cookie-policy__header">
                            <h2>{"Politique de Cookies"}</h2>
                            <button
                                class="cookie-policy__close"
                                onclick={close_policy.clone()}
                                aria-label="Fermer"
                            >
                                <CloseIcon size="20" />
                            </button>
                        </div>

                        <div class="cookie-policy__body">
                            <p class="cookie-policy__date">
                                {"Dernière mise à jour : Février 2026"}
                            </p>

                            <section>
                                <h3>{"1. Qu'est-ce qu'un cookie ?"}</h3>
                                <p>
                                    {"Un cookie est un petit fichier texte déposé sur votre \
                                      terminal (ordinateur, tablette, smartphone) lors de votre \
                                      visite sur notre site. Il permet de stocker des informations \
                                      relatives à votre navigation."}
                                </p>
                            </section>

                            <section>
                                <h3>{"2. Les cookies que nous utilisons"}</h3>
                                <p>
                                    <strong>{"Cookies strictement nécessaires"}</strong>
                                    {" : ces cookies sont indispensables au fonctionnement du site \
                                      (mémorisation de vos préférences de thème, consentement \
                                      cookies). Ils ne peuvent pas être désactivés."}
                                </p>
                                <p>
                                    <strong>{"Cookies analytiques"}</strong>
                                    {" : ils nous permettent de mesurer l'audience de notre site \
                                      et d'améliorer son contenu. Les données collectées sont \
                                      anonymisées."}
                                </p>
                            </section>

                            <section>
                                <h3>{"3. Durée de conservation"}</h3>
                                <p>
                                    {"Les cookies sont conservés pour une durée maximale de 13 \
                                      mois conformément aux recommandations de la CNIL. Votre \
                                      consentement est renouvelé à l'expiration de cette période."}
                                </p>
                            </section>

                            <section>
                                <h3>{"4. Gérer vos préférences"}</h3>
                                <p>
                                    {"Vous pouvez à tout moment modifier vos préférences en \
                                      matière de cookies via le lien \"Gérer mes cookies\" situé \
                                      en bas de chaque page, ou via les paramètres de votre \
                                      navigateur. La suppression des cookies peut affecter votre \
                                      expérience de navigation."}
                                </p>
                            </section>

                            <section>
                                <h3>{"5. Vos droits"}</h3>
                                <p>
                                    {"Conformément au RGPD, vous disposez d'un droit d'accès, de \
                                      rectification et de suppression de vos données. Pour exercer \
                                      ces droits, contactez-nous via notre formulaire de contact."}
                                </p>
                            </section>
                        </div>

                        <div class="cookie-policy__footer">
                            <button
                                class="cookie-consent__btn cookie-consent__btn--decline"
                                onclick={close_policy}
                            >
                                {"Fermer"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
