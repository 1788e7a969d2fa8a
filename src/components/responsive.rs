//! "Your site everywhere" showcase: a phone mockup that cycles through
//! three miniature screens while the section is on screen. Picking a
//! screen by hand pauses the rotation for a few seconds, then it
//! resumes. Small viewports get a static illustration instead.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::dom;
use crate::viewport::{self, use_section_reveal};

const SECTION_ID: &str = "responsive";
const SECTION_REVEAL_MARGIN: f64 = 80.0;

const AUTO_ADVANCE_MS: u32 = 2_500;
const RESUME_AFTER_MS: u32 = 3_000;

const SCREEN_LABELS: [&str; 3] = ["Accueil", "Services", "Contact"];

const FEATURES: [&str; 4] = [
    "Adapté à tous les écrans : mobile, tablette, desktop",
    "Navigation fluide et intuitive sur smartphone",
    "Temps de chargement optimisé sur mobile",
    "Expérience utilisateur cohérente sur tous les appareils",
];

fn next_screen(active: usize) -> usize {
    (active + 1) % SCREEN_LABELS.len()
}

#[function_component(PhoneMockup)]
fn phone_mockup() -> Html {
    let active = use_state_eq(|| 0usize);
    // Mirrors of the state the timers need, since their closures outlive
    // any single render.
    let current = use_mut_ref(|| 0usize);
    let paused = use_mut_ref(|| false);
    let resume_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let active = active.clone();
        let current = current.clone();
        let paused = paused.clone();
        let resume_timer = resume_timer.clone();
        use_effect_with_deps(
            move |_| {
                let ticker = Interval::new(AUTO_ADVANCE_MS, move || {
                    if *paused.borrow() {
                        return;
                    }
                    // Only rotate while the section is actually on
                    // screen; spinning in the background looks broken
                    // when the visitor scrolls back.
                    let on_screen = dom::section_rect(SECTION_ID)
                        .map(|rect| {
                            viewport::in_viewport(
                                rect.top(),
                                rect.bottom(),
                                dom::viewport_height(),
                            )
                        })
                        .unwrap_or(false);
                    if on_screen {
                        let next = next_screen(*current.borrow());
                        *current.borrow_mut() = next;
                        active.set(next);
                    }
                });
                move || {
                    drop(ticker);
                    resume_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let select = {
        let active = active.clone();
        let current = current.clone();
        let paused = paused.clone();
        let resume_timer = resume_timer.clone();
        Callback::from(move |idx: usize| {
            *current.borrow_mut() = idx;
            active.set(idx);
            *paused.borrow_mut() = true;
            // Replacing the previous timeout drops and cancels it.
            let paused = paused.clone();
            *resume_timer.borrow_mut() = Some(Timeout::new(RESUME_AFTER_MS, move || {
                *paused.borrow_mut() = false;
            }));
        })
    };

    html! {
        <div class="responsive__phone">
            <div class="responsive__phone-frame">
                <div class="responsive__phone-btn responsive__phone-btn--vol-up" />
                <div class="responsive__phone-btn responsive__phone-btn--vol-down" />
                <div class="responsive__phone-btn responsive__phone-btn--power" />

                <div class="responsive__phone-screen">
                    <div class="responsive__phone-notch" />

                    <div class="responsive__ui-navbar">
                        <img
                            src="/newlogo.png"
                            alt="logo"
                            class="responsive__ui-logo"
                            loading="lazy"
                        />
                        <div class="responsive__ui-nav-links">
                            { for SCREEN_LABELS.iter().enumerate().map(|(idx, label)| {
                                let onclick = {
                                    let select = select.clone();
                                    Callback::from(move |_: MouseEvent| select.emit(idx))
                                };
                                let class = classes!(
                                    "responsive__ui-nav-link",
                                    (*active == idx).then_some("responsive__ui-nav-link--active"),
                                );
                                html! {
                                    <button key={*label} {class} {onclick} aria-label={*label}>
                                        {*label}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="responsive__ui-content">
                        <div class="responsive__ui-screen">
                            { match *active {
                                0 => html! { <ScreenHome /> },
                                1 => html! { <ScreenServices /> },
                                _ => html! { <ScreenContact /> },
                            } }
                        </div>
                    </div>

                    <div class="responsive__ui-bottombar">
                        { for SCREEN_LABELS.iter().enumerate().map(|(idx, label)| {
                            let onclick = {
                                let select = select.clone();
                                Callback::from(move |_: MouseEvent| select.emit(idx))
                            };
                            let class = classes!(
                                "responsive__ui-dot",
                                (*active == idx).then_some("responsive__ui-dot--active"),
                            );
                            html! {
                                <button
                                    key={*label}
                                    {class}
                                    {onclick}
                                    aria-label={format!("Écran {}", idx + 1)}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>

            <div class="responsive__phone-glow" />
        </div>
    }
}

#[function_component(ScreenHome)]
fn screen_home() -> Html {
    html! {
        <div class="phone-screen__home">
            <div class="phone-screen__home-hero">
                <div class="phone-screen__home-badge" />
                <div class="phone-screen__home-title" />
                <div class="phone-screen__home-title phone-screen__home-title--short" />
                <div class="phone-screen__home-sub" />
                <div class="phone-screen__home-cta">{"Démarrer →"}</div>
            </div>

            <div class="phone-screen__home-stats">
                { for [("15+", "Projets"), ("98%", "Satisfaits"), ("5★", "Note")]
                    .iter()
                    .map(|(value, label)| html! {
                        <div key={*label} class="phone-screen__home-stat">
                            <span class="phone-screen__home-stat-value">{*value}</span>
                            <span class="phone-screen__home-stat-label">{*label}</span>
                        </div>
                    }) }
            </div>

            <div class="phone-screen__home-section-label">{"Derniers projets"}</div>
            <div class="phone-screen__home-projects">
                <div class="phone-screen__home-project phone-screen__home-project--cyan">
                    <div class="phone-screen__home-project-tag">{"Site Vitrine"}</div>
                    <div class="phone-screen__home-project-line" />
                </div>
                <div class="phone-screen__home-project phone-screen__home-project--blue">
                    <div class="phone-screen__home-project-tag">{"E-Commerce"}</div>
                    <div class="phone-screen__home-project-line" />
                </div>
            </div>
        </div>
    }
}

#[function_component(ScreenServices)]
fn screen_services() -> Html {
    html! {
        <div class="phone-screen__services">
            <div class="phone-screen__section-label">{"Nos services"}</div>
            { for ["Site Vitrine", "E-Commerce", "App Web"].iter().map(|label| html! {
                <div key={*label} class="phone-screen__service-card">
                    <div class="phone-screen__service-icon" />
                    <div class="phone-screen__service-text">
                        <div class="phone-screen__service-name">{*label}</div>
                        <div class="phone-screen__service-line" />
                        <div class="phone-screen__service-line phone-screen__service-line--short" />
                    </div>
                    <div class="phone-screen__service-arrow">{"›"}</div>
                </div>
            }) }
        </div>
    }
}

#[function_component(ScreenContact)]
fn screen_contact() -> Html {
    html! {
        <div class="phone-screen__contact">
            <div class="phone-screen__section-label">{"Nous contacter"}</div>
            { for ["Nom", "Email", "Message"].iter().map(|label| {
                let field_class = classes!(
                    "phone-screen__input-field",
                    (*label == "Message").then_some("phone-screen__input-field--textarea"),
                );
                html! {
                    <div key={*label} class="phone-screen__input">
                        <div class="phone-screen__input-label">{*label}</div>
                        <div class={field_class} />
                    </div>
                }
            }) }
            <div class="phone-screen__contact-btn">{"Envoyer"}</div>
        </div>
    }
}

#[function_component(MobileIllustration)]
fn mobile_illustration() -> Html {
    let device = |kind: &'static str| {
        html! {
            <div class={format!("responsive__mobile-device responsive__mobile-device--{kind}")}>
                <div class="responsive__mobile-device-screen">
                    <div class="responsive__mobile-device-line" />
                    <div class="responsive__mobile-device-line responsive__mobile-device-line--short" />
                    <div class="responsive__mobile-device-line responsive__mobile-device-line--shorter" />
                </div>
            </div>
        }
    };

    html! {
        <div class="responsive__mobile-illustration">
            <div class="responsive__mobile-devices">
                { device("phone") }
                { device("tablet") }
            </div>
        </div>
    }
}

#[function_component(Responsive)]
pub fn responsive() -> Html {
    let revealed = use_section_reveal(SECTION_ID, SECTION_REVEAL_MARGIN);
    let section_class = classes!("responsive", revealed.then_some("responsive--visible"));

    html! {
        <section class={section_class} id={SECTION_ID}>
            <div class="responsive__container">
                <div class="responsive__visual">
                    <div class="responsive__desktop-only">
                        <PhoneMockup />
                    </div>
                    <div class="responsive__mobile-only">
                        <MobileIllustration />
                    </div>
                </div>

                <div class="responsive__content">
                    <h2 class="responsive__title">
                        {"Votre site, "}
                        <span class="gradient-text">{"partout,"}</span>
                        {" toujours parfait"}
                    </h2>

                    <p class="responsive__description">
                        {"Chaque site que nous créons s'adapte automatiquement à tous les \
                          appareils. Que vos visiteurs naviguent sur téléphone, tablette ou \
                          ordinateur, ils profitent d'une expérience optimale sans aucun \
                          compromis."}
                    </p>

                    <ul class="responsive__features">
                        { for FEATURES.iter().map(|feature| html! {
                            <li key={*feature} class="responsive__feature">
                                <span>{*feature}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_after_the_last_screen() {
        assert_eq!(next_screen(0), 1);
        assert_eq!(next_screen(1), 2);
        assert_eq!(next_screen(2), 0);
    }
}
