//! Reflected XSS detection

use crate::http::HttpClient;
use crate::probe::{build_form_data, discover_forms, submit_form};
use tracing::{debug, info};
use url::Url;

const XSS_PAYLOAD: &str = "<script>alert('XSS');</script>";

/// Submits a script payload through every form on the page and reports the
/// action URLs that echo it back unescaped. Text fields carry the payload,
/// everything else a benign filler so the form still validates.
pub async fn scan(client: &HttpClient, target: &Url) -> Vec<String> {
    let mut vulnerable = Vec::new();
    let forms = discover_forms(client, target).await;
    debug!("xss: probing {} forms on {target}", forms.len());

    for form in &forms {
        let data = build_form_data(form, |_, kind| {
            Some(if kind == "text" {
                XSS_PAYLOAD.to_string()
            } else {
                "test".to_string()
            })
        });

        let response = submit_form(client, form, target, &data, true).await;
        if response.succeeded && response.body.contains(XSS_PAYLOAD) {
            let action = form.resolved_action(target);
            info!("xss: payload reflected unescaped at {action}");
            vulnerable.push(action.to_string());
        }
    }
    vulnerable
}
