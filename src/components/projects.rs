//! Portfolio grid: category filter, a collapsed view of three items
//! with a "show more" toggle, and a swipe hint that disappears once the
//! visitor has scrolled the horizontal list.

use yew::prelude::*;

use crate::dom;
use crate::viewport::{use_section_reveal, REVEAL_MARGIN};

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: [&'static str; 2],
    pub category: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: [Project; 7] = [
    Project {
        title: "Bellifood",
        description: "Site vitrine avec menu digital pour un restaurant de tacos et \
                      burgers à Oyonnax",
        image: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=600&h=400&fit=crop&q=75",
        tags: ["Site Vitrine", "Restaurant"],
        category: "vitrine",
        url: "https://bellifood.com/",
    },
    Project {
        title: "Lucie Conseil",
        description: "Site vitrine professionnel pour une conseillère en investissements, \
                      avec présentation des services et prise de contact",
        image: "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e?w=600&h=400&fit=crop&q=75",
        tags: ["Site Vitrine", "Finance"],
        category: "vitrine",
        url: "https://bea-gamma.vercel.app/",
    },
    Project {
        title: "Dépannage Gémeaux",
        description: "Site vitrine professionnel pour une entreprise de plomberie et \
                      chauffage avec formulaire de contact et présentation des services",
        image: "https://images.unsplash.com/photo-1607472586893-edb57bdc0e39?w=600&h=400&fit=crop&q=75",
        tags: ["Site Vitrine", "Artisan"],
        category: "vitrine",
        url: "https://depannage-gemeaux.fr/",
    },
    Project {
        title: "Le Comptoir",
        description: "Site vitrine élégant pour un restaurant, avec présentation du menu \
                      et ambiance soignée",
        image: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=600&h=400&fit=crop&q=75",
        tags: ["Site Vitrine", "Restaurant"],
        category: "vitrine",
        url: "https://restaurant-t.vercel.app/",
    },
    Project {
        title: "Yojeme",
        description: "Site vitrine moderne et responsive avec design épuré et \
                      optimisation SEO",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop&q=75",
        tags: ["Site Vitrine", "Services"],
        category: "vitrine",
        url: "https://www.yojeme.fr/",
    },
    Project {
        title: "Optical Store",
        description: "Landing page moderne avec effet 3D pour une boutique de lunettes \
                      à Lyon",
        image: "/optical.webp",
        tags: ["Site Vitrine", "Lunettes"],
        category: "vitrine",
        url: "https://cms-xi-self.vercel.app/",
    },
    Project {
        title: "Restaurant Sabai",
        description: "Application web complète de commande en ligne pour un restaurant \
                      de cuisine asiatique authentique à Thoiry",
        image: "https://images.unsplash.com/photo-1562565652-a0d8f0c59eb4?w=600&h=400&fit=crop&q=75",
        tags: ["Application Web", "Restaurant"],
        category: "app",
        url: "https://sabai-thoiry.com/",
    },
];

const FILTERS: [(&str, &str); 4] = [
    ("all", "Tous"),
    ("vitrine", "Sites Vitrine"),
    ("ecommerce", "E-Commerce"),
    ("app", "Applications"),
];

const INITIAL_COUNT: usize = 3;
const SWIPE_HINT_DISMISS_PX: f64 = 30.0;

pub fn matches_filter(project: &Project, filter: &str) -> bool {
    filter == "all" || project.category == filter
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let revealed = use_section_reveal("projects", REVEAL_MARGIN);
    let active_filter = use_state_eq(|| "all");
    let show_all = use_state_eq(|| false);
    let show_swipe_hint = use_state_eq(|| true);

    let change_filter = {
        let active_filter = active_filter.clone();
        let show_all = show_all.clone();
        Callback::from(move |filter: &'static str| {
            active_filter.set(filter);
            show_all.set(false);
        })
    };

    let toggle_show_all = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| show_all.set(!*show_all))
    };

    let on_list_scroll = {
        let show_swipe_hint = show_swipe_hint.clone();
        Callback::from(move |event: Event| {
            let list: web_sys::Element = event.target_unchecked_into();
            if f64::from(list.scroll_left()) > SWIPE_HINT_DISMISS_PX {
                show_swipe_hint.set(false);
            }
        })
    };

    let total_filtered = PROJECTS
        .iter()
        .filter(|project| matches_filter(project, *active_filter))
        .count();
    let visible_count = if *show_all {
        total_filtered
    } else {
        total_filtered.min(INITIAL_COUNT)
    };

    let section_class = classes!("projects", revealed.then_some("projects--visible"));

    html! {
        <section class={section_class} id="projects">
            <div class="projects__container">
                <div class="projects__header">
                    <div class="projects__header-content">
                        <span class="projects__label">{"Portfolio"}</span>
                        <h2 class="projects__title">{"Nos réalisations"}</h2>
                    </div>

                    <div class="projects__filter">
                        { for FILTERS.iter().map(|(id, label)| {
                            let onclick = {
                                let change_filter = change_filter.clone();
                                let id = *id;
                                Callback::from(move |_: MouseEvent| change_filter.emit(id))
                            };
                            let class = classes!(
                                "projects__filter-btn",
                                (*active_filter == *id).then_some("projects__filter-btn--active"),
                            );
                            html! {
                                <button key={*id} {class} {onclick}>{*label}</button>
                            }
                        }) }
                    </div>
                </div>

                <div class="projects__list-wrapper">
                    <div class="projects__list" onscroll={on_list_scroll}>
                        { for PROJECTS
                            .iter()
                            .enumerate()
                            .filter(|(_, project)| matches_filter(project, *active_filter))
                            .take(visible_count)
                            .enumerate()
                            .map(|(display, (catalog, _))| html! {
                                <ProjectItem key={catalog} number={display + 1} {catalog} />
                            }) }
                    </div>

                    if *show_swipe_hint {
                        <div class="projects__swipe-hint">
                            <svg
                                class="projects__swipe-hint-icon"
                                width="16" height="16" viewBox="0 0 24 24"
                                fill="none" stroke="currentColor" stroke-width="2"
                                stroke-linecap="round" stroke-linejoin="round"
                            >
                                <line x1="5" y1="12" x2="19" y2="12" />
                                <polyline points="12 5 19 12 12 19" />
                            </svg>
                            <span>{"Glissez pour voir plus"}</span>
                        </div>
                    }
                </div>

                if total_filtered > INITIAL_COUNT {
                    <div class="projects__show-more">
                        <button class="projects__show-more-btn" onclick={toggle_show_all}>
                            { if *show_all {
                                "Voir moins".to_string()
                            } else {
                                format!("Voir plus ({} projets)", total_filtered - INITIAL_COUNT)
                            } }
                        </button>
                    </div>
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectItemProps {
    /// 1-based position in the currently displayed list.
    number: usize,
    /// Index into [`PROJECTS`].
    catalog: usize,
}

#[function_component(ProjectItem)]
fn project_item(props: &ProjectItemProps) -> Html {
    let project = &PROJECTS[props.catalog];

    let open_project = {
        let url = project.url;
        Callback::from(move |_: MouseEvent| dom::open_in_new_tab(url))
    };
    let open_on_enter = {
        let url = project.url;
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                dom::open_in_new_tab(url);
            }
        })
    };

    html! {
        <article
            class="projects__item"
            role="link"
            tabindex="0"
            aria-label={format!("Voir le projet {}", project.title)}
            onclick={open_project}
            onkeydown={open_on_enter}
        >
            <span class="projects__item-number">
                { format!("{:02}", props.number) }
            </span>

            <div class="projects__item-image-wrapper">
                <img
                    src={project.image}
                    alt={project.title}
                    class="projects__item-image"
                    loading="lazy"
                    decoding="async"
                />
                <div class="projects__item-overlay">
                    <span class="projects__item-overlay-text">
                        <ExternalLinkIcon />
                        {"Voir le projet"}
                    </span>
                </div>
            </div>

            <div class="projects__item-content">
                <div class="projects__item-tags">
                    { for project.tags.iter().map(|tag| html! {
                        <span key={*tag} class="projects__item-tag">{*tag}</span>
                    }) }
                </div>
                <h3 class="projects__item-title">{project.title}</h3>
                <p class="projects__item-description">{project.description}</p>
            </div>

            <div class="projects__item-arrow">
                <ExternalLinkIcon />
            </div>
        </article>
    }
}

#[function_component(ExternalLinkIcon)]
fn external_link_icon() -> Html {
    html! {
        <svg
            class="projects__item-arrow-icon"
            width="18" height="18" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round"
        >
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
            <polyline points="15 3 21 3 21 9" />
            <line x1="10" y1="14" x2="21" y2="3" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_keeps_everything() {
        let count = PROJECTS
            .iter()
            .filter(|project| matches_filter(project, "all"))
            .count();
        assert_eq!(count, PROJECTS.len());
    }

    #[test]
    fn category_filters_partition_by_category() {
        let vitrine = PROJECTS
            .iter()
            .filter(|project| matches_filter(project, "vitrine"))
            .count();
        let app = PROJECTS
            .iter()
            .filter(|project| matches_filter(project, "app"))
            .count();
        assert_eq!(vitrine, 6);
        assert_eq!(app, 1);
        assert_eq!(
            PROJECTS
                .iter()
                .filter(|project| matches_filter(project, "ecommerce"))
                .count(),
            0
        );
    }
}
