//! Open redirect detection

use crate::http::HttpClient;
use crate::probe::{build_form_data, discover_forms, submit_form};
use tracing::{debug, info};
use url::Url;

const REDIRECT_PAYLOAD: &str = "http://example.com";

/// Feeds an external URL to every redirect-looking field and reports form
/// actions that bounce the client straight to it.
///
/// Only fields whose name contains `url` are filled; a form with no such
/// field is skipped entirely. Submissions run with redirects disabled so
/// the 3xx response and its `Location` header can be inspected directly;
/// a form counts as vulnerable only on a 301/302 whose `Location` equals
/// the payload exactly.
pub async fn scan(client: &HttpClient, target: &Url) -> Vec<String> {
    let mut vulnerable = Vec::new();
    let forms = discover_forms(client, target).await;
    debug!("open_redirect: probing {} forms on {target}", forms.len());

    for form in &forms {
        let data = build_form_data(form, |name, _| {
            name.to_lowercase()
                .contains("url")
                .then(|| REDIRECT_PAYLOAD.to_string())
        });
        if data.is_empty() {
            continue;
        }

        let response = submit_form(client, form, target, &data, false).await;
        let redirected = matches!(response.status_code(), Some(301) | Some(302));
        if redirected && response.header("location") == Some(REDIRECT_PAYLOAD) {
            let action = form.resolved_action(target);
            info!("open_redirect: {action} redirects to attacker-supplied URL");
            vulnerable.push(action.to_string());
        }
    }
    vulnerable
}
