//! Outbound message delivery through the EmailJS REST endpoint. One call
//! per submission attempt, no retries; the caller decides what to do
//! with the failure text.

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::form::GENERIC_SEND_ERROR;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Value,
}

/// Delivers one contact message. On a non-2xx response the service's own
/// body text is returned so it can be shown verbatim.
pub async fn send_contact_message(template_params: &Value) -> Result<(), String> {
    let payload = SendRequest {
        service_id: config::EMAILJS_SERVICE_ID,
        template_id: config::EMAILJS_TEMPLATE_ID,
        user_id: config::EMAILJS_PUBLIC_KEY,
        template_params,
    };

    let response = Request::post(config::EMAILJS_ENDPOINT)
        .json(&payload)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        let text = response.text().await.unwrap_or_default();
        if text.trim().is_empty() {
            Err(GENERIC_SEND_ERROR.to_string())
        } else {
            Err(text)
        }
    }
}
