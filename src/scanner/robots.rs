//! robots.txt disallow analysis
//!
//! Disallowed paths are exactly what a site owner wants crawlers to skip,
//! which makes them a cheap index of interesting URLs.

use crate::http::HttpClient;
use tracing::debug;
use url::Url;

/// Collects the disallowed paths advertised by the target's robots.txt,
/// resolved against the target URL, in file order.
///
/// Stricter than the other checks: any non-2xx response (or transport
/// failure) yields an empty result rather than parsing an error page.
pub async fn scan(client: &HttpClient, target: &Url) -> Vec<String> {
    let robots_url = format!("{}/robots.txt", target.as_str().trim_end_matches('/'));
    let response = client.get(&robots_url).await;
    if !response.is_success() {
        debug!("robots: no readable robots.txt at {robots_url}");
        return Vec::new();
    }
    parse_disallowed(target, &response.body)
}

/// Parses robots.txt line by line. A line whose lowercase trimmed form
/// starts with `disallow` is split on the first `:`; a non-empty trimmed
/// remainder resolves against the base URL. Pathless lines are skipped
/// silently.
fn parse_disallowed(base: &Url, body: &str) -> Vec<String> {
    let mut discovered = Vec::new();
    for line in body.lines() {
        let trimmed = line.trim();
        if !trimmed.to_lowercase().starts_with("disallow") {
            continue;
        }
        if let Some((_, path)) = trimmed.split_once(':') {
            let path = path.trim();
            if path.is_empty() {
                continue;
            }
            if let Ok(resolved) = base.join(path) {
                discovered.push(resolved.to_string());
            }
        }
    }
    discovered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_disallowed_skips_pathless_lines() {
        let base = Url::parse("http://x.com").expect("valid url");
        let body = "Disallow: /admin\nDisallow: \nUser-agent: *";
        assert_eq!(
            parse_disallowed(&base, body),
            vec!["http://x.com/admin".to_string()]
        );
    }

    #[test]
    fn test_parse_disallowed_preserves_line_order() {
        let base = Url::parse("http://x.com").expect("valid url");
        let body = "User-agent: *\nDISALLOW: /b\n  disallow: /a\nAllow: /c\nDisallow\n";
        assert_eq!(
            parse_disallowed(&base, body),
            vec!["http://x.com/b".to_string(), "http://x.com/a".to_string()]
        );
    }
}
