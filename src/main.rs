use log::{info, Level};
use yew::prelude::*;

mod config;
mod dom;
mod events;
mod form;
mod mailer;
mod storage;
mod viewport;

mod components {
    pub mod back_to_top;
    pub mod banner;
    pub mod contact;
    pub mod cookie_consent;
    pub mod footer;
    pub mod hero;
    pub mod legal_modals;
    pub mod navbar;
    pub mod projects;
    pub mod responsive;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
    pub mod whatsapp;
}

use components::{
    back_to_top::BackToTop,
    banner::AnnouncementBanner,
    contact::Contact,
    cookie_consent::CookieConsent,
    footer::Footer,
    hero::Hero,
    legal_modals::LegalModalsProvider,
    navbar::Navbar,
    projects::Projects,
    responsive::Responsive,
    services::Services,
    stats::Stats,
    testimonials::Testimonials,
    whatsapp::WhatsAppButton,
};
use events::ConsentReopenBus;
use storage::ThemePreference;

#[function_component]
fn App() -> Html {
    // One bus for the whole page; the footer publishes on it and the
    // consent prompt listens.
    let reopen_bus = use_state(ConsentReopenBus::default);

    // Apply the stored theme before anything meaningful paints.
    use_effect_with_deps(
        |_| {
            ThemePreference::load().apply();
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ConsentReopenBus> context={(*reopen_bus).clone()}>
            <LegalModalsProvider>
                <AnnouncementBanner />
                <Navbar />
                <main>
                    <Hero />
                    <Services />
                    <Projects />
                    <Testimonials />
                    <Contact />
                    <Stats />
                    <Responsive />
                    <Footer />
                </main>
                <CookieConsent />
                <BackToTop />
                <WhatsAppButton />
            </LegalModalsProvider>
        </ContextProvider<ConsentReopenBus>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
