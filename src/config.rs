//! Site-wide constants: external service identifiers and displayed
//! contact details. The EmailJS public key is meant to be exposed
//! client-side.

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_SERVICE_ID: &str = "service_z9k3dwd";
pub const EMAILJS_TEMPLATE_ID: &str = "template_qr0hizb";
pub const EMAILJS_PUBLIC_KEY: &str = "crjyM7CbUuPkyfBTT";

pub const CALENDLY_URL: &str = "https://calendly.com/supaco-digital";

pub const WHATSAPP_PHONE: &str = "33783052412";
pub const WHATSAPP_GREETING: &str =
    "Bonjour Supaco Digital ! Je suis intéressé(e) par vos services.";

pub const GOOGLE_REVIEWS_URL: &str =
    "https://www.google.com/search?q=Supaco+Digital+%7C+Agence+Web";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/supa_c0/";

pub const CONTACT_EMAIL: &str = "contact@supaco.digital";
pub const CONTACT_PHONE_DISPLAY: &str = "+33 7 83 05 24 12";
pub const CONTACT_PHONE_HREF: &str = "tel:+33783052412";
