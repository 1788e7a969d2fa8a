//! Contact form model: field values, validation, the outbound EmailJS
//! template parameters and the submission status machine. Everything
//! here is synchronous and host-testable; the component and the mailer
//! do the wiring.

use serde_json::{json, Value};

pub const GENERIC_SEND_ERROR: &str =
    "Une erreur est survenue. Veuillez réessayer ou nous contacter directement.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    /// Name, email, service category and message are required; phone is
    /// optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.service.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn service_label(&self) -> &str {
        match self.service.as_str() {
            "vitrine" => "Site Vitrine",
            "ecommerce" => "E-Commerce",
            "app" => "Application Web",
            "autre" => "Autre projet",
            "" => "Non spécifié",
            other => other,
        }
    }

    /// Shapes the fixed template parameter set the delivery template
    /// expects. Unused template slots are filled with placeholder dashes
    /// so the received email keeps its layout.
    pub fn template_params(&self) -> Value {
        let phone = if self.phone.trim().is_empty() {
            "Non renseigné"
        } else {
            self.phone.as_str()
        };
        json!({
            "from_name": self.name,
            "company": "—",
            "from_email": self.email,
            "phone": phone,
            "service": self.service_label(),
            "has_site": "—",
            "budget": "—",
            "deadline": "—",
            "message": self.message,
            "reply_to": self.email,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmitStatus {
    /// Gate for a new submission attempt. While one is in flight the
    /// answer is `None` and no second delivery may be dispatched.
    pub fn begin(&self) -> Option<SubmitStatus> {
        if self.is_submitting() {
            None
        } else {
            Some(SubmitStatus::Submitting)
        }
    }

    /// Maps the delivery outcome onto the displayed status. The remote
    /// error text is kept verbatim when the service provided one.
    pub fn settle(outcome: Result<(), String>) -> SubmitStatus {
        match outcome {
            Ok(()) => SubmitStatus::Success,
            Err(reason) if reason.trim().is_empty() => {
                SubmitStatus::Error(GENERIC_SEND_ERROR.to_string())
            }
            Err(reason) => SubmitStatus::Error(reason),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Jean Dupont".into(),
            email: "jean@exemple.com".into(),
            phone: String::new(),
            service: "vitrine".into(),
            message: "Besoin d'un site".into(),
        }
    }

    #[test]
    fn requires_name_email_service_and_message() {
        assert!(filled().is_complete());
        for strip in ["name", "email", "service", "message"] {
            let mut fields = filled();
            match strip {
                "name" => fields.name.clear(),
                "email" => fields.email.clear(),
                "service" => fields.service.clear(),
                _ => fields.message.clear(),
            }
            assert!(!fields.is_complete(), "{strip} should be required");
        }
    }

    #[test]
    fn phone_is_optional() {
        let mut fields = filled();
        fields.phone = "   ".into();
        assert!(fields.is_complete());
        assert_eq!(fields.template_params()["phone"], "Non renseigné");

        fields.phone = "+33 6 12 34 56 78".into();
        assert_eq!(fields.template_params()["phone"], "+33 6 12 34 56 78");
    }

    #[test]
    fn service_labels_map_known_categories() {
        let mut fields = filled();
        for (value, label) in [
            ("vitrine", "Site Vitrine"),
            ("ecommerce", "E-Commerce"),
            ("app", "Application Web"),
            ("autre", "Autre projet"),
        ] {
            fields.service = value.into();
            assert_eq!(fields.service_label(), label);
        }
        fields.service = String::new();
        assert_eq!(fields.service_label(), "Non spécifié");
        fields.service = "refonte".into();
        assert_eq!(fields.service_label(), "refonte");
    }

    #[test]
    fn template_params_carry_sender_and_reply_to() {
        let params = filled().template_params();
        assert_eq!(params["from_name"], "Jean Dupont");
        assert_eq!(params["from_email"], "jean@exemple.com");
        assert_eq!(params["reply_to"], "jean@exemple.com");
        assert_eq!(params["service"], "Site Vitrine");
        assert_eq!(params["message"], "Besoin d'un site");
    }

    #[test]
    fn successful_submission_clears_fields() {
        let mut fields = filled();
        let status = SubmitStatus::Idle.begin().expect("idle may submit");
        assert_eq!(status, SubmitStatus::Submitting);

        let settled = SubmitStatus::settle(Ok(()));
        assert_eq!(settled, SubmitStatus::Success);

        fields.clear();
        assert_eq!(fields, ContactFields::default());
    }

    #[test]
    fn failed_submission_keeps_fields_for_correction() {
        let fields = filled();
        let settled = SubmitStatus::settle(Err("quota exceeded".into()));
        assert_eq!(settled, SubmitStatus::Error("quota exceeded".into()));
        assert_eq!(settled.error_message(), Some("quota exceeded"));

        // The model never touches the fields on failure.
        assert_eq!(fields.message, "Besoin d'un site");
        assert!(fields.is_complete());
    }

    #[test]
    fn blank_failure_reason_falls_back_to_generic_text() {
        let settled = SubmitStatus::settle(Err("  ".into()));
        assert_eq!(settled.error_message(), Some(GENERIC_SEND_ERROR));
    }

    #[test]
    fn submitting_blocks_a_second_attempt() {
        assert_eq!(SubmitStatus::Submitting.begin(), None);
        assert!(SubmitStatus::Idle.begin().is_some());
        assert!(SubmitStatus::Success.begin().is_some());
        assert!(SubmitStatus::Error("boom".into()).begin().is_some());
    }
}
