//! Fixed navigation bar: translucent once scrolled, hidden while the
//! visitor scrolls down, active-link highlighting driven by the section
//! band tracker, mobile overlay menu and the theme toggle.

use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;
use crate::storage::ThemePreference;
use crate::viewport::use_active_section;

const NAV_LINKS: [(&str, &str); 3] = [
    ("services", "Services"),
    ("projects", "Projets"),
    ("contact", "Contact"),
];

const NAV_SECTION_IDS: [&str; 3] = ["services", "projects", "contact"];

const SCROLLED_AFTER_PX: f64 = 50.0;
const HIDE_AFTER_PX: f64 = 100.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state_eq(|| false);
    let hidden = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);
    let last_scroll_y = use_mut_ref(|| 0.0f64);
    let theme = use_state_eq(ThemePreference::load);
    let active_section = use_active_section(&NAV_SECTION_IDS);

    // Keep the document attribute in sync with the preference.
    use_effect_with_deps(
        move |theme: &ThemePreference| {
            theme.apply();
            || ()
        },
        *theme,
    );

    {
        let scrolled = scrolled.clone();
        let hidden = hidden.clone();
        let last_scroll_y = last_scroll_y.clone();
        use_event_with_window("scroll", move |_: web_sys::Event| {
            let y = dom::scroll_y();
            scrolled.set(y > SCROLLED_AFTER_PX);
            // Hide when moving down past the threshold, reappear as soon
            // as the visitor scrolls back up.
            let previous = *last_scroll_y.borrow();
            hidden.set(y > previous && y > HIDE_AFTER_PX);
            *last_scroll_y.borrow_mut() = y;
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            next.store();
            theme.set(next);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_to_section = {
        let menu_open = menu_open.clone();
        Callback::from(move |(event, id): (MouseEvent, &'static str)| {
            event.prevent_default();
            dom::scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let nav_link = |(id, label): (&'static str, &'static str)| {
        let onclick = {
            let go_to_section = go_to_section.clone();
            Callback::from(move |event: MouseEvent| go_to_section.emit((event, id)))
        };
        let class = classes!(
            "navbar__link",
            (active_section == Some(id)).then_some("navbar__link--active"),
        );
        html! {
            <a key={id} href={format!("#{id}")} {class} {onclick}>
                {label}
            </a>
        }
    };

    let theme_label = if theme.is_dark() {
        "Activer le mode clair"
    } else {
        "Activer le mode sombre"
    };

    html! {
        <>
            <nav class={classes!(
                "navbar",
                scrolled.then_some("navbar--scrolled"),
                hidden.then_some("navbar--hidden"),
            )}>
                <div class="navbar__container">
                    <a href="/" class="navbar__logo">
                        <img src="/newlogo.png" alt="logo" loading="eager" />
                    </a>

                    <div class="navbar__menu">
                        { for NAV_LINKS.iter().copied().map(nav_link) }
                    </div>

                    <button
                        class="navbar__theme-toggle"
                        onclick={toggle_theme.clone()}
                        aria-label={theme_label}
                    >
                        <ThemeIcon dark={theme.is_dark()} />
                    </button>

                    <button
                        class="navbar__mobile-toggle"
                        onclick={toggle_menu.clone()}
                        aria-label="Menu"
                    >
                        if *menu_open {
                            <CloseIcon />
                        } else {
                            <MenuIcon />
                        }
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="navbar__mobile-overlay" onclick={toggle_menu.clone()} />
                <div class="navbar__mobile-menu navbar__mobile-menu--open">
                    <button
                        class="navbar__mobile-close"
                        onclick={toggle_menu}
                        aria-label="Fermer le menu"
                    >
                        <CloseIcon />
                    </button>

                    <div class="navbar__mobile-links">
                        { for NAV_LINKS.iter().copied().map(|(id, label)| {
                            let onclick = {
                                let go_to_section = go_to_section.clone();
                                Callback::from(move |event: MouseEvent| {
                                    go_to_section.emit((event, id))
                                })
                            };
                            html! {
                                <a key={id} href={format!("#{id}")} class="navbar__link" {onclick}>
                                    {label}
                                </a>
                            }
                        }) }
                    </div>

                    <a
                        href="#contact"
                        class="navbar__cta"
                        onclick={{
                            let go_to_section = go_to_section.clone();
                            Callback::from(move |event: MouseEvent| {
                                go_to_section.emit((event, "contact"))
                            })
                        }}
                    >
                        {"Démarrer un projet"}
                    </a>

                    <button class="navbar__mobile-theme" onclick={toggle_theme}>
                        <ThemeIcon dark={theme.is_dark()} />
                        <span>
                            { if theme.is_dark() { "Mode clair" } else { "Mode sombre" } }
                        </span>
                    </button>
                </div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeIconProps {
    dark: bool,
}

/// Sun while dark (click for light), moon while light.
#[function_component(ThemeIcon)]
fn theme_icon(props: &ThemeIconProps) -> Html {
    if props.dark {
        html! {
            <svg
                width="20" height="20" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round"
            >
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2" />
                <path d="M12 20v2" />
                <path d="m4.93 4.93 1.41 1.41" />
                <path d="m17.66 17.66 1.41 1.41" />
                <path d="M2 12h2" />
                <path d="M20 12h2" />
                <path d="m6.34 17.66-1.41 1.41" />
                <path d="m19.07 4.93-1.41 1.41" />
            </svg>
        }
    } else {
        html! {
            <svg
                width="20" height="20" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round"
            >
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
            </svg>
        }
    }
}

#[function_component(MenuIcon)]
fn menu_icon() -> Html {
    html! {
        <svg
            width="28" height="28" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round"
        >
            <line x1="3" y1="6" x2="21" y2="6" />
            <line x1="3" y1="12" x2="21" y2="12" />
            <line x1="3" y1="18" x2="21" y2="18" />
        </svg>
    }
}

#[function_component(CloseIcon)]
fn close_icon() -> Html {
    html! {
        <svg
            width="28" height="28" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round"
        >
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </svg>
    }
}
