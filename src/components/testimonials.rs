//! Client testimonials with star ratings and the outbound link to the
//! Google reviews page.

use yew::prelude::*;

use crate::config;
use crate::viewport::{use_section_reveal, REVEAL_MARGIN};

struct Testimonial {
    name: &'static str,
    role: Option<&'static str>,
    rating: u8,
    text: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Jeremy Morel",
        role: Some("Artisan, Dépannage Gémeaux"),
        rating: 5,
        text: "Professionnel, disponible et réactif. Les prestations sont de qualités. \
               Je recommande !",
    },
    Testimonial {
        name: "Béatrice S",
        role: None,
        rating: 5,
        text: "Très professionnel, rapide et rigoureux. Après un première échange, il a \
               tout de suite compris notre projet et a su nous accompagner sur la création \
               de notre boutique en ligne avec beaucoup de créativité !",
    },
    Testimonial {
        name: "Khaled Z",
        role: Some("Fondateur, Bellifood"),
        rating: 5,
        text: "Je ne connaissais rien au web et l'équipe m'a accompagnée de A à Z. Depuis \
               le lancement du site, j'ai de nouveaux clients chaque semaine.",
    },
];

#[derive(Properties, PartialEq)]
struct StarRatingProps {
    rating: u8,
}

#[function_component(StarRating)]
fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="testimonials__stars">
            { for (0..5u8).map(|star| {
                let class = if star < props.rating {
                    "testimonials__star--filled"
                } else {
                    "testimonials__star--empty"
                };
                html! {
                    <svg
                        key={star.to_string()}
                        {class}
                        width="16" height="16" viewBox="0 0 24 24"
                        fill="currentColor" stroke="none"
                    >
                        <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" />
                    </svg>
                }
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let revealed = use_section_reveal("testimonials", REVEAL_MARGIN);
    let section_class = classes!(
        "testimonials",
        revealed.then_some("testimonials--visible"),
    );

    html! {
        <section class={section_class} id="testimonials">
            <div class="testimonials__container">
                <div class="testimonials__header">
                    <span class="testimonials__label">{"Témoignages"}</span>
                    <h2 class="testimonials__title">{"Ce que disent nos clients"}</h2>
                    <p class="testimonials__subtitle">
                        {"La satisfaction de nos clients est notre meilleure carte de visite."}
                    </p>
                </div>

                <div class="testimonials__grid">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <div key={testimonial.name} class="testimonials__card">
                            <StarRating rating={testimonial.rating} />
                            <p class="testimonials__card-text">
                                { format!("\"{}\"", testimonial.text) }
                            </p>
                            <div class="testimonials__card-author">
                                <div class="testimonials__card-avatar">
                                    { testimonial.name.chars().next().map(String::from).unwrap_or_default() }
                                </div>
                                <div class="testimonials__card-info">
                                    <span class="testimonials__card-name">
                                        {testimonial.name}
                                    </span>
                                    if let Some(role) = testimonial.role {
                                        <span class="testimonials__card-role">{role}</span>
                                    }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="testimonials__google">
                    <a
                        href={config::GOOGLE_REVIEWS_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="testimonials__google-link"
                    >
                        <span>{"Voir tous nos avis sur Google"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
