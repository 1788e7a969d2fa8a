//! Floating WhatsApp button with a small invitation popup. The CTA
//! opens a wa.me deep link with a pre-filled greeting.

use yew::prelude::*;

use crate::config;
use crate::dom;

pub fn chat_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_PHONE,
        urlencoding::encode(config::WHATSAPP_GREETING),
    )
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let open = use_state_eq(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let start_chat = Callback::from(|_: MouseEvent| dom::open_in_new_tab(&chat_url()));

    html! {
        <div class="whatsapp">
            if *open {
                <div class="whatsapp__popup">
                    <div class="whatsapp__popup-header">
                        <WhatsAppIcon size="20" />
                        <span>{"Une question ?"}</span>
                        <button
                            class="whatsapp__popup-close"
                            onclick={close}
                            aria-label="Fermer"
                        >
                            <svg
                                width="18" height="18" viewBox="0 0 24 24"
                                fill="none" stroke="currentColor" stroke-width="2"
                                stroke-linecap="round" stroke-linejoin="round"
                            >
                                <line x1="18" y1="6" x2="6" y2="18" />
                                <line x1="6" y1="6" x2="18" y2="18" />
                            </svg>
                        </button>
                    </div>
                    <p class="whatsapp__popup-text">
                        {"Discutons de votre projet directement sur WhatsApp !"}
                    </p>
                    <button class="whatsapp__popup-cta" onclick={start_chat}>
                        {"Démarrer la conversation"}
                    </button>
                </div>
            }

            <button
                class="whatsapp__button"
                onclick={toggle}
                aria-label="Contacter via WhatsApp"
            >
                <WhatsAppIcon size="28" />
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct WhatsAppIconProps {
    size: &'static str,
}

#[function_component(WhatsAppIcon)]
fn whatsapp_icon(props: &WhatsAppIconProps) -> Html {
    html! {
        <svg
            width={props.size} height={props.size} viewBox="0 0 24 24"
            fill="currentColor" stroke="none"
        >
            <path d="M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 0 1-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 0 1-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 0 1 2.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0 0 12.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 0 0 5.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 0 0-3.48-8.413Z" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_encodes_the_greeting() {
        let url = chat_url();
        assert!(url.starts_with("https://wa.me/33783052412?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("Bonjour%20Supaco%20Digital"));
    }
}
