//! Payload construction and form submission
//!
//! A value policy decides, per field, what to send: `Some(value)` fills the
//! field, `None` leaves it out. Nameless fields are always skipped; the
//! original form could not be filled for them either.

use crate::http::{HttpClient, Method};
use crate::models::{FormMethod, FormModel, ProbeResponse};
use url::Url;

/// Builds the field-value pairs a check wants to submit for a form.
///
/// The policy receives each named field's name and type, in document order.
pub fn build_form_data<F>(form: &FormModel, mut policy: F) -> Vec<(String, String)>
where
    F: FnMut(&str, &str) -> Option<String>,
{
    let mut data = Vec::new();
    for field in &form.fields {
        if let Some(name) = field.name.as_deref() {
            if let Some(value) = policy(name, &field.kind) {
                data.push((name.to_string(), value));
            }
        }
    }
    data
}

/// Submits crafted values through a form and hands back the raw response.
///
/// The action URL resolves against the page URL; the form's own method
/// decides whether values travel in the query string or the body.
pub async fn submit_form(
    client: &HttpClient,
    form: &FormModel,
    page_url: &Url,
    data: &[(String, String)],
    follow_redirects: bool,
) -> ProbeResponse {
    let action = form.resolved_action(page_url);
    let method = match form.method {
        FormMethod::Get => Method::Get,
        FormMethod::Post => Method::Post,
    };
    client
        .fetch(method, action.as_str(), Some(data), follow_redirects)
        .await
}
