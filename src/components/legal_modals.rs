//! Legal document modals and the context handle that lets any component
//! open them. At most one document is displayed at a time; opening a
//! second one replaces the first. "Gérer mes cookies" is the odd one
//! out: it opens nothing and instead resets the consent decision and
//! pings the reopen bus.

use yew::prelude::*;

use crate::dom;
use crate::events::ConsentReopenBus;
use crate::storage::ConsentState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDoc {
    Mentions,
    Confidentialite,
}

impl LegalDoc {
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Mentions => "Mentions Légales",
            LegalDoc::Confidentialite => "Politique de Confidentialité",
        }
    }
}

/// Capability set handed down through context so deeply nested UI (the
/// footer) can drive the modals without a direct parent link.
#[derive(Clone, PartialEq)]
pub struct LegalModalsHandle {
    pub open: Callback<LegalDoc>,
    pub close: Callback<()>,
    pub manage_cookies: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct LegalModalsProviderProps {
    pub children: Children,
}

#[function_component(LegalModalsProvider)]
pub fn legal_modals_provider(props: &LegalModalsProviderProps) -> Html {
    let active = use_state_eq(|| None::<LegalDoc>);
    let reopen_bus = use_context::<ConsentReopenBus>();

    let open = {
        let active = active.clone();
        Callback::from(move |doc: LegalDoc| active.set(Some(doc)))
    };
    let close = {
        let active = active.clone();
        Callback::from(move |_| active.set(None))
    };
    let manage_cookies = {
        let active = active.clone();
        Callback::from(move |_| {
            ConsentState::reset();
            active.set(None);
            if let Some(bus) = &reopen_bus {
                bus.notify();
            }
            log::info!("cookie consent reset, prompt reopened");
        })
    };

    let handle = LegalModalsHandle {
        open,
        close: close.clone(),
        manage_cookies,
    };

    html! {
        <ContextProvider<LegalModalsHandle> context={handle}>
            { for props.children.iter() }

            <LegalModal
                open={*active == Some(LegalDoc::Mentions)}
                title={LegalDoc::Mentions.title()}
                on_close={close.clone()}
            >
                <p class="legal-modal__date">{"Dernière mise à jour : Février 2026"}</p>
                <MentionsLegalesContent />
            </LegalModal>

            <LegalModal
                open={*active == Some(LegalDoc::Confidentialite)}
                title={LegalDoc::Confidentialite.title()}
                on_close={close}
            >
                <p class="legal-modal__date">{"Dernière mise à jour : Février 2026"}</p>
                <PolitiqueConfidentialiteContent />
            </LegalModal>
        </ContextProvider<LegalModalsHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct LegalModalProps {
    open: bool,
    title: &'static str,
    on_close: Callback<()>,
    children: Children,
}

#[function_component(LegalModal)]
fn legal_modal(props: &LegalModalProps) -> Html {
    // Background scroll is suspended while the modal is open and
    // restored on close or unmount, whichever comes first.
    use_effect_with_deps(
        move |open| {
            if *open {
                dom::set_body_scroll_locked(true);
            }
            move || dom::set_body_scroll_locked(false)
        },
        props.open,
    );

    if !props.open {
        return html! {};
    }

    let overlay_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let button_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="legal-modal-overlay" onclick={overlay_close}>
            <div class="legal-modal" onclick={keep_open}>
                <div class="legal-modal__header">
                    <h2>{props.title}</h2>
                    <button
                        class="legal-modal__close"
                        onclick={button_close.clone()}
                        aria-label="Fermer"
                    >
                        <CloseIcon size="20" />
                    </button>
                </div>
                <div class="legal-modal__body">{ for props.children.iter() }</div>
                <div class="legal-modal__footer">
                    <button class="legal-modal__btn" onclick={button_close}>
                        {"Fermer"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CloseIconProps {
    #[prop_or("16")]
    pub size: &'static str,
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &CloseIconProps) -> Html {
    html! {
        <svg
            width={props.size} height={props.size} viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round"
        >
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </svg>
    }
}

#[function_component(MentionsLegalesContent)]
fn mentions_legales_content() -> Html {
    html! {
        <>
            <section>
                <h3>{"1. Éditeur du site"}</h3>
                <p>
                    <strong>{"Supaco Digital"}</strong><br />
                    {"Forme juridique : EI"}<br />
                    {"Adresse : Saint-Genis-Pouilly"}<br />
                    {"Téléphone : 07.83.05.24.12"}<br />
                    {"Email : contact@supaco.digital.com"}
                </p>
            </section>

            <section>
                <h3>{"2. Hébergement"}</h3>
                <p>
                    {"Le site est hébergé par :"}<br />
                    <strong>{"Hostinger"}</strong><br />
                    {"Adresse : 61 Lordou Vironos Street, 6023 Larnaca, Chypre"}
                </p>
            </section>

            <section>
                <h3>{"3. Propriété intellectuelle"}</h3>
                <p>
                    {"L'ensemble du contenu de ce site (textes, images, logos, icônes, \
                      vidéos, sons, logiciels) est protégé par le droit d'auteur et le \
                      droit de la propriété intellectuelle. Toute reproduction, même \
                      partielle, est interdite sans autorisation préalable."}
                </p>
            </section>

            <section>
                <h3>{"4. Limitation de responsabilité"}</h3>
                <p>
                    {"Supaco Digital s'efforce de fournir des informations aussi précises \
                      que possible. Toutefois, elle ne pourra être tenue responsable des \
                      omissions, inexactitudes ou des carences dans la mise à jour des \
                      informations."}
                </p>
            </section>

            <section>
                <h3>{"5. Liens hypertextes"}</h3>
                <p>
                    {"Le site peut contenir des liens vers d'autres sites. Supaco Digital \
                      n'exerce aucun contrôle sur ces sites et décline toute \
                      responsabilité quant à leur contenu."}
                </p>
            </section>
        </>
    }
}

#[function_component(PolitiqueConfidentialiteContent)]
fn politique_confidentialite_content() -> Html {
    html! {
        <>
            <section>
                <h3>{"1. Responsable du traitement"}</h3>
                <p>
                    {"Le responsable du traitement des données personnelles est :"}<br />
                    <strong>{"Supaco Digital"}</strong><br />
                    {"Email : contact@supaco.digital"}
                </p>
            </section>

            <section>
                <h3>{"2. Données collectées"}</h3>
                <p>
                    {"Nous collectons les données suivantes dans le cadre de \
                      l'utilisation de notre site :"}
                </p>
                <ul>
                    <li>
                        <strong>{"Formulaire de contact :"}</strong>
                        {" nom, prénom, email, numéro de téléphone (optionnel), message"}
                    </li>
                    <li><strong>{"Newsletter :"}</strong>{" adresse email"}</li>
                    <li>
                        <strong>{"Cookies :"}</strong>
                        {" données de navigation (voir notre Politique de Cookies)"}
                    </li>
                </ul>
            </section>

            <section>
                <h3>{"3. Finalités du traitement"}</h3>
                <p>{"Vos données sont collectées pour :"}</p>
                <ul>
                    <li>{"Répondre à vos demandes via le formulaire de contact"}</li>
                    <li>{"Vous envoyer notre newsletter (avec votre consentement)"}</li>
                    <li>{"Améliorer notre site grâce aux données analytiques anonymisées"}</li>
                </ul>
            </section>

            <section>
                <h3>{"4. Base légale"}</h3>
                <p>
                    {"Le traitement de vos données repose sur votre "}
                    <strong>{"consentement"}</strong>
                    {" (newsletter, cookies analytiques) et notre "}
                    <strong>{"intérêt légitime"}</strong>
                    {" (réponse aux demandes de contact, amélioration du site)."}
                </p>
            </section>

            <section>
                <h3>{"5. Durée de conservation"}</h3>
                <ul>
                    <li><strong>{"Données de contact :"}</strong>{" 3 ans après le dernier échange"}</li>
                    <li><strong>{"Données newsletter :"}</strong>{" jusqu'à désinscription"}</li>
                    <li><strong>{"Cookies :"}</strong>{" 13 mois maximum"}</li>
                </ul>
            </section>

            <section>
                <h3>{"6. Destinataires des données"}</h3>
                <p>
                    {"Vos données ne sont transmises à aucun tiers, sauf obligation légale. \
                      Elles peuvent être traitées par nos sous-traitants techniques \
                      (hébergeur, service d'emailing) dans le respect du RGPD."}
                </p>
            </section>

            <section>
                <h3>{"7. Vos droits"}</h3>
                <p>{"Conformément au RGPD, vous disposez des droits suivants :"}</p>
                <ul>
                    <li>{"Droit d'accès à vos données personnelles"}</li>
                    <li>{"Droit de rectification"}</li>
                    <li>{"Droit à l'effacement (« droit à l'oubli »)"}</li>
                    <li>{"Droit à la limitation du traitement"}</li>
                    <li>{"Droit à la portabilité"}</li>
                    <li>{"Droit d'opposition"}</li>
                </ul>
                <p>{"Pour exercer ces droits, contactez-nous à : contact@supaco.digital"}</p>
                <p>
                    {"Vous pouvez également introduire une réclamation auprès de la "}
                    <strong>{"CNIL"}</strong>
                    {" (www.cnil.fr)."}
                </p>
            </section>

            <section>
                <h3>{"8. Sécurité"}</h3>
                <p>
                    {"Nous mettons en œuvre des mesures techniques et organisationnelles \
                      appropriées pour protéger vos données personnelles contre tout accès non \
                      autorisé, modification, divulgation ou destruction."}
                </p>
            </section>
        </>
    }
}
