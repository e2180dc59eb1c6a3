//! CSRF token presence check
//!
//! Nothing is submitted: a form is flagged purely for lacking a field whose
//! name suggests a CSRF token. Presence of such a field is taken at face
//! value; whether the server actually validates it is out of scope.

use crate::http::HttpClient;
use crate::models::FormModel;
use crate::probe::discover_forms;
use tracing::debug;
use url::Url;

fn has_csrf_field(form: &FormModel) -> bool {
    form.fields.iter().any(|field| {
        field
            .name
            .as_deref()
            .map(|name| name.to_lowercase().contains("csrf"))
            .unwrap_or(false)
    })
}

/// Returns the forms on the page that carry no CSRF token field.
/// A form with no inputs at all is flagged too.
pub async fn scan(client: &HttpClient, target: &Url) -> Vec<FormModel> {
    let forms = discover_forms(client, target).await;
    debug!("csrf: inspecting {} forms on {target}", forms.len());
    forms.into_iter().filter(|f| !has_csrf_field(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormField, FormMethod};

    fn form(names: &[Option<&str>]) -> FormModel {
        FormModel {
            action: None,
            method: FormMethod::Post,
            fields: names
                .iter()
                .map(|n| FormField {
                    name: n.map(str::to_string),
                    kind: "text".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_csrf_field_detection() {
        assert!(has_csrf_field(&form(&[Some("user"), Some("csrf_token")])));
        assert!(has_csrf_field(&form(&[Some("CSRFToken")])));
        assert!(!has_csrf_field(&form(&[Some("user"), Some("pass")])));
        // nameless fields cannot carry a token; empty forms have none
        assert!(!has_csrf_field(&form(&[None])));
        assert!(!has_csrf_field(&form(&[])));
    }
}
