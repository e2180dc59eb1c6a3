//! SQL injection error disclosure detection

use crate::http::HttpClient;
use crate::probe::{build_form_data, discover_forms, submit_form};
use regex::Regex;
use tracing::{debug, info};
use url::Url;

const SQLI_PAYLOAD: &str = "' OR '1'='1";

/// Error signatures that betray an unsanitized query reaching the database.
/// The canonical MySQL message spells neither "mysql" nor "syntax error",
/// so it gets its own pattern.
const ERROR_SIGNATURES: &[&str] = &[
    r"(?i)you have an error in your sql syntax",
    r"(?i)mysql",
    r"(?i)syntax error",
];

/// Checks a response body for database error output
fn has_sql_error(body: &str) -> bool {
    ERROR_SIGNATURES.iter().any(|pattern| {
        Regex::new(pattern)
            .map(|re| re.is_match(body))
            .unwrap_or(false)
    })
}

/// Submits a quote-breaking payload through every form on the page and
/// reports the action URLs whose response leaks a database error.
pub async fn scan(client: &HttpClient, target: &Url) -> Vec<String> {
    let mut vulnerable = Vec::new();
    let forms = discover_forms(client, target).await;
    debug!("sqli: probing {} forms on {target}", forms.len());

    for form in &forms {
        let data = build_form_data(form, |_, kind| {
            Some(if kind == "text" {
                SQLI_PAYLOAD.to_string()
            } else {
                "test".to_string()
            })
        });

        let response = submit_form(client, form, target, &data, true).await;
        if response.succeeded && has_sql_error(&response.body) {
            let action = form.resolved_action(target);
            info!("sqli: database error disclosed at {action}");
            vulnerable.push(action.to_string());
        }
    }
    vulnerable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_signatures_match_case_insensitively() {
        assert!(has_sql_error("You have an error in your SQL syntax"));
        assert!(has_sql_error("Warning: MySQL server has gone away"));
        assert!(has_sql_error("mysql_fetch_array() expects parameter"));
        assert!(!has_sql_error("<html><body>all good</body></html>"));
        assert!(!has_sql_error("postgres reported a problem"));
    }
}
