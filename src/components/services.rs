//! Service offers on a circular carousel. The card layout is a pure
//! function of (index, selected index, count), so the wrap-around
//! arithmetic and the touch-swipe stepping are testable without a
//! browser; the component only binds them to clicks and touch events.

use yew::prelude::*;

use crate::viewport::{use_section_reveal, REVEAL_MARGIN};

pub struct ServiceOffer {
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub price: &'static str,
    pub stat_value: &'static str,
    pub stat_label: &'static str,
}

pub const SERVICES: [ServiceOffer; 4] = [
    ServiceOffer {
        id: "vitrine",
        label: "Site Vitrine",
        title: "Site Vitrine",
        description: "Je conçois votre site de A à Z pour refléter votre image et \
                      convaincre vos visiteurs de vous contacter.",
        features: [
            "Design sur-mesure",
            "Responsive mobile",
            "Optimisation SEO",
            "Formulaire de contact",
        ],
        price: "890€",
        stat_value: "5j",
        stat_label: "Livraison moyenne",
    },
    ServiceOffer {
        id: "ecommerce",
        label: "E-Commerce",
        title: "E-Commerce",
        description: "Je construis votre boutique en ligne pour que vos clients achètent \
                      facilement, même pendant que vous dormez.",
        features: [
            "Catalogue produits",
            "Paiement sécurisé",
            "Gestion des stocks",
            "Suivi commandes",
        ],
        price: "1 490€",
        stat_value: "14j",
        stat_label: "Livraison moyenne",
    },
    ServiceOffer {
        id: "app",
        label: "App Web",
        title: "Application Web",
        description: "Quand un outil standard ne suffit plus, je développe exactement ce \
                      dont vous avez besoin, rien de plus, rien de moins.",
        features: [
            "Développement sur-mesure",
            "Base de données",
            "API sur-mesure",
            "Dashboard admin",
        ],
        price: "2 990€",
        stat_value: "30j",
        stat_label: "Livraison moyenne",
    },
    ServiceOffer {
        id: "crm-erp",
        label: "CRM / ERP",
        title: "CRM / ERP",
        description: "Je centralise tout ce qui compte pour vous : vos clients, vos \
                      ventes, votre activité, dans un seul outil pensé pour vous.",
        features: [
            "Gestion des contacts",
            "Suivi des ventes",
            "Gestion des stocks",
            "Tableaux de bord",
        ],
        price: "3 990€",
        stat_value: "30j",
        stat_label: "Livraison moyenne",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPosition {
    Center,
    Right,
    Left,
    FarLeft,
}

impl CardPosition {
    /// Position of card `idx` on the circular carousel when `active` is
    /// front and center.
    pub fn compute(idx: usize, active: usize, len: usize) -> Self {
        let diff = (idx + len - active) % len;
        if diff == 0 {
            CardPosition::Center
        } else if diff == 1 {
            CardPosition::Right
        } else if diff == len - 1 {
            CardPosition::Left
        } else {
            CardPosition::FarLeft
        }
    }

    fn class_suffix(self) -> &'static str {
        match self {
            CardPosition::Center => "center",
            CardPosition::Right => "right",
            CardPosition::Left => "left",
            CardPosition::FarLeft => "far-left",
        }
    }
}

pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Converts a horizontal swipe delta (start x minus end x) into a
/// carousel step. Short drags are ignored.
pub fn swipe_step(delta: f64) -> Option<isize> {
    if delta > SWIPE_THRESHOLD_PX {
        Some(1)
    } else if delta < -SWIPE_THRESHOLD_PX {
        Some(-1)
    } else {
        None
    }
}

pub fn step_index(active: usize, step: isize, len: usize) -> usize {
    (active as isize + step).rem_euclid(len as isize) as usize
}

#[function_component(Services)]
pub fn services() -> Html {
    let revealed = use_section_reveal("services", REVEAL_MARGIN);
    let active = use_state_eq(|| 0usize);
    let touch_start_x = use_mut_ref(|| None::<f64>);

    let select = {
        let active = active.clone();
        Callback::from(move |idx: usize| active.set(idx))
    };

    let on_touch_start = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |event: TouchEvent| {
            *touch_start_x.borrow_mut() =
                event.touches().get(0).map(|touch| touch.client_x() as f64);
        })
    };

    let on_touch_end = {
        let active = active.clone();
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |event: TouchEvent| {
            let Some(start) = touch_start_x.borrow_mut().take() else {
                return;
            };
            let Some(end) = event.changed_touches().get(0).map(|touch| touch.client_x() as f64)
            else {
                return;
            };
            if let Some(step) = swipe_step(start - end) {
                active.set(step_index(*active, step, SERVICES.len()));
            }
        })
    };

    let section_class = classes!("services", revealed.then_some("services--visible"));

    html! {
        <section class={section_class} id="services">
            <div class="services__bg" aria-hidden="true">
                <div class="services__bg-orb services__bg-orb--1" />
                <div class="services__bg-orb services__bg-orb--2" />
                <div class="services__bg-grid" />
            </div>

            <div class="services__container">
                <div class="services__header">
                    <h2 class="services__title">{"Ce que je propose"}</h2>
                    <p class="services__subtitle">
                        {"Des solutions web adaptées à vos besoins et à votre budget, livrées \
                          rapidement avec un accompagnement personnalisé."}
                    </p>
                </div>

                <div class="services__tabs">
                    { for SERVICES.iter().enumerate().map(|(idx, offer)| {
                        let onclick = {
                            let select = select.clone();
                            Callback::from(move |_: MouseEvent| select.emit(idx))
                        };
                        let class = classes!(
                            "services__tab",
                            (*active == idx).then_some("services__tab--active"),
                        );
                        html! {
                            <button key={offer.id} {class} {onclick}>
                                <span>{offer.label}</span>
                            </button>
                        }
                    }) }
                </div>

                <div
                    class="services__carousel"
                    ontouchstart={on_touch_start}
                    ontouchend={on_touch_end}
                >
                    { for SERVICES.iter().enumerate().map(|(idx, offer)| {
                        let position = CardPosition::compute(idx, *active, SERVICES.len());
                        let onclick = (position != CardPosition::Center).then(|| {
                            let select = select.clone();
                            Callback::from(move |_: MouseEvent| select.emit(idx))
                        });
                        html! {
                            <ServiceCard
                                key={offer.id}
                                index={idx}
                                position={position}
                                {onclick}
                            />
                        }
                    }) }
                </div>

                <div class="services__dots">
                    { for SERVICES.iter().enumerate().map(|(idx, offer)| {
                        let onclick = {
                            let select = select.clone();
                            Callback::from(move |_: MouseEvent| select.emit(idx))
                        };
                        let class = classes!(
                            "services__dot",
                            (*active == idx).then_some("services__dot--active"),
                        );
                        html! {
                            <button key={offer.id} {class} {onclick} aria-label={offer.label} />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    position: CardPosition,
    #[prop_or_default]
    onclick: Option<Callback<MouseEvent>>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let offer = &SERVICES[props.index];
    let is_center = props.position == CardPosition::Center;
    let class = classes!(
        "services__card",
        format!("services__card--{}", props.position.class_suffix()),
    );
    let style = if is_center {
        "cursor: default;"
    } else {
        "cursor: pointer;"
    };

    html! {
        <div {class} {style} onclick={props.onclick.clone()}>
            <div class="services__card-topline" />

            <div class="services__card-header">
                <div class={classes!(
                    "services__card-icon",
                    is_center.then_some("services__card-icon--center"),
                )}>
                    <ServiceIcon id={offer.id} />
                </div>
                <h3 class="services__card-title">{offer.title}</h3>
            </div>

            <p class="services__card-description">{offer.description}</p>

            <div class="services__card-body">
                <div class="services__card-body-inner">
                    <ul class="services__card-features">
                        { for offer.features.iter().map(|feature| html! {
                            <li key={*feature} class="services__card-feature">
                                <CheckCircleIcon />
                                {*feature}
                            </li>
                        }) }
                    </ul>

                    <div class="services__card-pricing">
                        <div class="services__card-price">
                            <span class="services__card-price-from">{"À partir de"}</span>
                            <span class="services__card-price-value">{offer.price}</span>
                        </div>
                        <span class="services__card-installment">
                            {"Possibilité de paiement en 3 ou 4 fois sans frais"}
                        </span>
                    </div>

                    <div class="services__card-stat">
                        <span class="services__card-stat-value">{offer.stat_value}</span>
                        <span class="services__card-stat-label">{offer.stat_label}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceIconProps {
    id: &'static str,
}

#[function_component(ServiceIcon)]
fn service_icon(props: &ServiceIconProps) -> Html {
    let path = match props.id {
        "vitrine" => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="M2 12h20" />
                <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
            </>
        },
        "ecommerce" => html! {
            <>
                <circle cx="9" cy="21" r="1" />
                <circle cx="20" cy="21" r="1" />
                <path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6" />
            </>
        },
        "app" => html! {
            <polyline points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        },
        _ => html! {
            <>
                <line x1="18" y1="20" x2="18" y2="10" />
                <line x1="12" y1="20" x2="12" y2="4" />
                <line x1="6" y1="20" x2="6" y2="14" />
            </>
        },
    };

    html! {
        <svg
            width="24" height="24" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round"
        >
            {path}
        </svg>
    }
}

#[function_component(CheckCircleIcon)]
pub fn check_circle_icon() -> Html {
    html! {
        <svg
            class="services__card-feature-icon"
            width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round"
        >
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <polyline points="22 4 12 14.01 9 11.01" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_card_is_the_active_one() {
        for active in 0..SERVICES.len() {
            assert_eq!(
                CardPosition::compute(active, active, SERVICES.len()),
                CardPosition::Center
            );
        }
    }

    #[test]
    fn neighbors_wrap_around_the_ring() {
        let len = SERVICES.len();
        assert_eq!(CardPosition::compute(1, 0, len), CardPosition::Right);
        assert_eq!(CardPosition::compute(len - 1, 0, len), CardPosition::Left);
        assert_eq!(CardPosition::compute(2, 0, len), CardPosition::FarLeft);
        // Active at the end of the list: index 0 sits to its right.
        assert_eq!(CardPosition::compute(0, len - 1, len), CardPosition::Right);
    }

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(swipe_step(30.0), None);
        assert_eq!(swipe_step(-49.9), None);
    }

    #[test]
    fn swipes_step_in_drag_direction() {
        assert_eq!(swipe_step(80.0), Some(1));
        assert_eq!(swipe_step(-80.0), Some(-1));
    }

    #[test]
    fn stepping_is_circular() {
        let len = SERVICES.len();
        assert_eq!(step_index(len - 1, 1, len), 0);
        assert_eq!(step_index(0, -1, len), len - 1);
        assert_eq!(step_index(1, 1, len), 2);
    }
}
