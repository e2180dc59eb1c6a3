//! HTML report generation using Tera templates

use crate::error::Result;
use crate::models::ScanReport;
use crate::scanner::security_headers::SECURITY_HEADERS;
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};
use tracing::info;

#[derive(Serialize)]
struct UrlSection {
    title: &'static str,
    blurb: &'static str,
    urls: Vec<String>,
}

#[derive(Serialize)]
struct MissingHeader {
    name: String,
    description: String,
}

/// Generates a self-contained HTML report from scan results
pub fn generate(report: &ScanReport, output_path: &Path) -> Result<()> {
    let mut tera = Tera::default();
    tera.add_raw_template("report.html", default_template())?;

    let results = &report.results;
    let url_sections = vec![
        UrlSection {
            title: "Reflected XSS",
            blurb: "Form actions that echoed a script payload back unescaped.",
            urls: results.xss.clone(),
        },
        UrlSection {
            title: "SQL Injection",
            blurb: "Form actions whose response disclosed a database error.",
            urls: results.sql.clone(),
        },
        UrlSection {
            title: "Open Redirect",
            blurb: "Form actions that redirected to an attacker-supplied URL.",
            urls: results.open_redirect.clone(),
        },
        UrlSection {
            title: "robots.txt Paths",
            blurb: "Paths the site asks crawlers to skip, often worth a look.",
            urls: results.robots.clone(),
        },
        UrlSection {
            title: "Directory Enumeration",
            blurb: "Commonly exposed directories that answered 200.",
            urls: results.directory_enumeration.clone(),
        },
    ];

    let csrf_forms: Vec<String> = results.csrf.iter().map(|f| f.summary()).collect();

    // checklist order, not map order
    let missing_headers: Vec<MissingHeader> = SECURITY_HEADERS
        .iter()
        .filter_map(|(name, _)| {
            results
                .security_headers
                .get(*name)
                .map(|description| MissingHeader {
                    name: name.to_string(),
                    description: description.clone(),
                })
        })
        .collect();

    let mut context = Context::new();
    context.insert("target", &report.target);
    context.insert("scan_id", &report.scan_id);
    context.insert("started_at", &report.started_at.to_rfc3339());
    context.insert(
        "finished_at",
        &report
            .finished_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "N/A".to_string()),
    );
    context.insert("total_requests", &report.total_requests);
    context.insert("total_findings", &results.total_findings());
    context.insert("url_sections", &url_sections);
    context.insert("csrf_forms", &csrf_forms);
    context.insert("missing_headers", &missing_headers);
    context.insert("version", env!("CARGO_PKG_VERSION"));

    let rendered = tera.render("report.html", &context)?;
    std::fs::write(output_path, rendered)?;
    info!("HTML report saved to {}", output_path.display());
    Ok(())
}

fn default_template() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skopos - Scan Report</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f1f5f9; color: #1e293b; line-height: 1.6; }
        .container { max-width: 960px; margin: 0 auto; padding: 20px; }
        .header { background: linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #334155 100%); color: white; padding: 40px 30px; border-radius: 12px; margin-bottom: 30px; text-align: center; }
        .header h1 { font-size: 2.2em; margin-bottom: 5px; letter-spacing: 2px; }
        .header .subtitle { opacity: 0.8; font-size: 1.1em; }
        .header .meta { opacity: 0.6; margin-top: 15px; font-size: 0.9em; }
        .info-bar { background: white; padding: 15px 25px; border-radius: 10px; margin-bottom: 20px; display: flex; justify-content: space-between; flex-wrap: wrap; gap: 10px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); font-size: 0.9em; color: #64748b; }
        .section { background: white; padding: 25px; border-radius: 10px; margin-bottom: 15px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); border-left: 4px solid #e2e8f0; }
        .section.flagged { border-left-color: #dc2626; }
        .section h2 { font-size: 1.1em; margin-bottom: 6px; }
        .section p { color: #475569; margin-bottom: 10px; font-size: 0.92em; }
        .section ul { margin-left: 20px; }
        .section li { margin: 4px 0; word-break: break-all; }
        .section .clean { color: #16a34a; font-weight: 600; }
        .header-name { font-weight: 700; }
        .footer { text-align: center; padding: 30px; color: #94a3b8; font-size: 0.85em; margin-top: 30px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>SKOPOS</h1>
            <div class="subtitle">Web Vulnerability Probe Report</div>
            <div class="meta">{{ target }} &middot; {{ total_findings }} finding(s)</div>
        </div>

        <div class="info-bar">
            <span>Scan ID: {{ scan_id }}</span>
            <span>Started: {{ started_at }}</span>
            <span>Finished: {{ finished_at }}</span>
            <span>Requests: {{ total_requests }}</span>
        </div>

        {% for section in url_sections %}
        <div class="section{% if section.urls %} flagged{% endif %}">
            <h2>{{ section.title }}</h2>
            <p>{{ section.blurb }}</p>
            {% if section.urls %}
            <ul>
                {% for url in section.urls %}<li>{{ url }}</li>{% endfor %}
            </ul>
            {% else %}
            <span class="clean">Nothing found</span>
            {% endif %}
        </div>
        {% endfor %}

        <div class="section{% if csrf_forms %} flagged{% endif %}">
            <h2>Forms Without CSRF Tokens</h2>
            <p>Forms that carry no token field and may accept forged cross-site submissions.</p>
            {% if csrf_forms %}
            <ul>
                {% for form in csrf_forms %}<li>{{ form }}</li>{% endfor %}
            </ul>
            {% else %}
            <span class="clean">Nothing found</span>
            {% endif %}
        </div>

        <div class="section{% if missing_headers %} flagged{% endif %}">
            <h2>Missing Security Headers</h2>
            <p>Recommended response headers the target does not send.</p>
            {% if missing_headers %}
            <ul>
                {% for header in missing_headers %}
                <li><span class="header-name">{{ header.name }}</span> &mdash; {{ header.description }}</li>
                {% endfor %}
            </ul>
            {% else %}
            <span class="clean">All audited headers present</span>
            {% endif %}
        </div>

        <div class="footer">Generated by Skopos v{{ version }}</div>
    </div>
</body>
</html>
"#
}
