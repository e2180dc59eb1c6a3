//! HTML form discovery
//!
//! Parses a page body with a browser-grade HTML parser; malformed markup
//! degrades to whatever forms are recoverable, never an error.

use crate::http::HttpClient;
use crate::models::{FormField, FormMethod, FormModel};
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Extracts every form on a page, in document order.
///
/// Fields keep document order too. Absent and empty `action`/`name`
/// attributes both normalize to `None`; a missing `type` defaults to
/// `"text"`. A document with no forms yields an empty vec.
pub fn extract_forms(html: &str) -> Vec<FormModel> {
    let document = Html::parse_document(html);
    let form_selector = match Selector::parse("form") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let input_selector = match Selector::parse("input") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut forms = Vec::new();
    for form in document.select(&form_selector) {
        let action = form
            .value()
            .attr("action")
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        let method = FormMethod::parse(form.value().attr("method"));

        let mut fields = Vec::new();
        for input in form.select(&input_selector) {
            let name = input
                .value()
                .attr("name")
                .filter(|n| !n.is_empty())
                .map(str::to_string);
            let kind = input.value().attr("type").unwrap_or("text").to_string();
            fields.push(FormField { name, kind });
        }

        forms.push(FormModel {
            action,
            method,
            fields,
        });
    }
    forms
}

/// Fetches the page and extracts its forms.
///
/// Each check calls this independently: forms are probed against a fresh
/// fetch of the target, with no cache shared between checks. A failed
/// fetch yields no forms, which makes every form-based check fail closed.
pub async fn discover_forms(client: &HttpClient, page_url: &Url) -> Vec<FormModel> {
    let response = client.get(page_url.as_str()).await;
    if !response.succeeded {
        debug!("page fetch failed for {page_url}, nothing to probe");
        return Vec::new();
    }
    extract_forms(&response.body)
}
