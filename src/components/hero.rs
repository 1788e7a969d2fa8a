//! Above-the-fold hero: profile card on the left, pitch and CTAs on the
//! right. Purely presentational apart from the smooth-scroll CTAs.

use yew::prelude::*;

use crate::config;
use crate::dom;

const VALUE_BADGES: [&str; 3] = [
    "Réponse < 24h",
    "Livraison rapide",
    "100% de satisfaction",
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let go_to = |id: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dom::scroll_to_section(id);
        })
    };

    html! {
        <section class="hero" id="hero">
            <div class="hero__bg-logos">
                <img
                    src="/android-chrome-512x512.png" alt="" width="300" height="300"
                    loading="lazy" decoding="async"
                    class="hero__bg-logo hero__bg-logo--1"
                />
                <img
                    src="/android-chrome-512x512.png" alt="" width="250" height="250"
                    loading="lazy" decoding="async"
                    class="hero__bg-logo hero__bg-logo--2"
                />
                <img
                    src="/newlogo.png" alt="" width="200" height="60"
                    loading="lazy" decoding="async"
                    class="hero__bg-logo hero__bg-logo--3"
                />
                <img
                    src="/newlogo.png" alt="" width="200" height="60"
                    loading="lazy" decoding="async"
                    class="hero__bg-logo hero__bg-logo--4"
                />
            </div>

            <div class="hero__particles">
                <div class="hero__particle"></div>
                <div class="hero__particle"></div>
                <div class="hero__particle"></div>
                <div class="hero__particle"></div>
                <div class="hero__particle"></div>
            </div>

            <div class="hero__container">
                <div class="hero__left">
                    <div class="hero__profile-card">
                        <div class="hero__photo-wrapper">
                            <div class="hero__photo">
                                <img
                                    src="/supa.jpeg"
                                    alt="Kevin - Développeur web Supaco Digital"
                                    width="200" height="200"
                                    loading="eager" decoding="async"
                                />
                            </div>
                        </div>

                        <div class="hero__contacts">
                            <a href={config::CONTACT_PHONE_HREF} class="hero__contact-item">
                                <span class="hero__contact-icon">
                                    <svg
                                        width="14" height="14" viewBox="0 0 24 24"
                                        fill="none" stroke="currentColor" stroke-width="2"
                                        stroke-linecap="round" stroke-linejoin="round"
                                    >
                                        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07A19.5 19.5 0 0 1 4.69 13a19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 3.6 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L7.91 9.91a16 16 0 0 0 6.18 6.18l.97-.97a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z" />
                                    </svg>
                                </span>
                                <span>{config::CONTACT_PHONE_DISPLAY}</span>
                            </a>
                            <a
                                href={config::INSTAGRAM_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hero__contact-item"
                            >
                                <span class="hero__contact-icon">
                                    <svg
                                        width="14" height="14" viewBox="0 0 24 24"
                                        fill="none" stroke="currentColor" stroke-width="2"
                                        stroke-linecap="round" stroke-linejoin="round"
                                    >
                                        <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                                        <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                                        <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
                                    </svg>
                                </span>
                                <span>{"@supa_c0"}</span>
                            </a>
                            <div class="hero__contact-item hero__contact-item--location">
                                <span class="hero__contact-icon">
                                    <svg
                                        width="14" height="14" viewBox="0 0 24 24"
                                        fill="none" stroke="currentColor" stroke-width="2"
                                        stroke-linecap="round" stroke-linejoin="round"
                                    >
                                        <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" />
                                        <circle cx="12" cy="10" r="3" />
                                    </svg>
                                </span>
                                <span>{"Pays de Gex & Genève"}</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="hero__right">
                    <h1 class="hero__title">
                        {"Bonjour, je suis "}
                        <span class="gradient-text">{"Kevin"}</span>
                    </h1>

                    <p class="hero__subtitle">
                        {"J'accompagne les PME et indépendants du Pays de Gex dans la création \
                          de sites web sur-mesure. Un interlocuteur unique du brief à la mise \
                          en ligne, sans intermédiaire, sans délais inutiles."}
                    </p>

                    <p class="hero__bio">
                        {"J'aime prendre le temps de comprendre votre activité, vos objectifs \
                          et votre vision. Mon rôle ne se limite pas à créer un site, mais à \
                          construire avec vous un outil qui attire des clients, simplifie \
                          votre quotidien et soutient votre croissance. Chaque projet est \
                          pensé pour convertir, évoluer et réussir sur le long terme."}
                    </p>

                    <div class="hero__value-badges">
                        { for VALUE_BADGES.iter().map(|label| html! {
                            <span key={*label} class="hero__value-badge">
                                <span class="hero__value-badge-icon">
                                    <svg
                                        width="14" height="14" viewBox="0 0 24 24"
                                        fill="none" stroke="currentColor" stroke-width="2"
                                        stroke-linecap="round" stroke-linejoin="round"
                                    >
                                        <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" />
                                    </svg>
                                </span>
                                {*label}
                            </span>
                        }) }
                    </div>

                    <div class="hero__actions">
                        <a href="#contact" class="hero__cta" onclick={go_to("contact")}>
                            {"Lancer mon projet"}
                            <svg
                                width="20" height="20" viewBox="0 0 24 24"
                                fill="none" stroke="currentColor" stroke-width="2.5"
                                stroke-linecap="round" stroke-linejoin="round"
                            >
                                <line x1="5" y1="12" x2="19" y2="12" />
                                <polyline points="12 5 19 12 12 19" />
                            </svg>
                        </a>
                        <a href="#projects" class="hero__secondary" onclick={go_to("projects")}>
                            {"Voir mes réalisations"}
                        </a>
                    </div>
                </div>
            </div>

            <div class="hero__gradient"></div>
        </section>
    }
}
