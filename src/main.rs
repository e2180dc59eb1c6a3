//! Skopos - Web Vulnerability Prober CLI

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;
use url::Url;

use skopos::config;
use skopos::models::{ScanConfig, ScanReport};
use skopos::report;
use skopos::scanner::security_headers::SECURITY_HEADERS;
use skopos::scanner::{ScanEngine, MODULES};

/// Skopos - best-effort black-box web vulnerability prober
#[derive(Parser)]
#[command(name = "skopos", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe a target URL for common web vulnerabilities
    Scan {
        /// Target URL (scheme optional, http:// assumed)
        #[arg(short, long)]
        target: String,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// User-Agent header value
        #[arg(long)]
        user_agent: Option<String>,

        /// Concurrent directory probes
        #[arg(long)]
        threads: Option<usize>,

        /// Run the checks concurrently instead of one at a time
        #[arg(long)]
        concurrent: bool,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path (default: skopos_{hostname}.{ext})
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (text, json, or html)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Exit with code 1 if any check reports a finding
        #[arg(long)]
        fail_on_findings: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the checks a scan performs
    Modules,

    /// Re-render a report from a previous scan's JSON output
    Report {
        /// Path to the JSON results file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "skopos_report.html")]
        output: String,
    },
}

fn print_banner() {
    let banner = r#"
    ╔═══════════════════════════════════════╗
    ║  SKOPOS v0.1.0                        ║
    ║  Web Vulnerability Prober             ║
    ╚═══════════════════════════════════════╝
    "#;
    println!("{}", banner.cyan());
}

fn output_name_from_target(target: &str, ext: &str) -> String {
    if let Ok(url) = Url::parse(target) {
        let host = url.host_str().unwrap_or("unknown");
        let sanitized: String = host
            .chars()
            .map(|c| if c == '.' { '_' } else { c })
            .collect();
        format!("skopos_{sanitized}.{ext}")
    } else {
        format!("skopos_report.{ext}")
    }
}

fn print_url_section(title: &str, urls: &[String]) {
    println!("\n  {}", title.bold());
    if urls.is_empty() {
        println!("    {}", "nothing found".dimmed());
    } else {
        for url in urls {
            println!("    {} {}", "!".red().bold(), url);
        }
    }
}

fn print_results(scan_report: &ScanReport) {
    let results = &scan_report.results;

    print_url_section("Reflected XSS", &results.xss);
    print_url_section("SQL Injection", &results.sql);

    println!("\n  {}", "Forms Without CSRF Tokens".bold());
    if results.csrf.is_empty() {
        println!("    {}", "nothing found".dimmed());
    } else {
        for form in &results.csrf {
            println!("    {} {}", "!".red().bold(), form.summary());
        }
    }

    print_url_section("robots.txt Paths", &results.robots);

    println!("\n  {}", "Missing Security Headers".bold());
    if results.security_headers.is_empty() {
        println!("    {}", "all audited headers present".dimmed());
    } else {
        // checklist order, not map order
        for (name, _) in SECURITY_HEADERS {
            if results.security_headers.contains_key(*name) {
                println!("    {} {}", "!".yellow().bold(), name);
            }
        }
    }

    print_url_section("Open Redirect", &results.open_redirect);
    print_url_section("Directory Enumeration", &results.directory_enumeration);
}

fn print_summary(scan_report: &ScanReport) {
    let results = &scan_report.results;

    println!("\n  {}", "Scan Summary".bold());
    println!("  {}", "─".repeat(35));

    let counts = [
        ("xss", results.xss.len()),
        ("sql", results.sql.len()),
        ("csrf", results.csrf.len()),
        ("robots", results.robots.len()),
        ("security_headers", results.security_headers.len()),
        ("open_redirect", results.open_redirect.len()),
        ("directory_enumeration", results.directory_enumeration.len()),
    ];

    let mut builder = Builder::default();
    builder.push_record(["Check", "Findings"]);
    for (check, count) in counts {
        builder.push_record([check.to_string(), count.to_string()]);
    }
    builder.push_record(["Total".to_string(), results.total_findings().to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");

    println!(
        "\n  {} requests in {}",
        scan_report.total_requests.to_string().cyan(),
        scan_report
            .finished_at
            .map(|end| {
                let elapsed = (end - scan_report.started_at).num_milliseconds() as f64 / 1000.0;
                format!("{elapsed:.1}s")
            })
            .unwrap_or_else(|| "?".to_string()),
    );
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            target,
            timeout,
            user_agent,
            threads,
            concurrent,
            config: config_path,
            output,
            format,
            fail_on_findings,
            verbose,
        } => {
            let filter = if verbose { "skopos=debug" } else { "skopos=info" };
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
                )
                .with_target(false)
                .init();

            print_banner();

            let mut scan_config = if let Some(ref path) = config_path {
                config::load_config(path)?
            } else {
                let default_path = Path::new("skopos.toml");
                if default_path.exists() {
                    config::load_config(default_path)?
                } else {
                    ScanConfig::default()
                }
            };
            config::merge_cli_args(&mut scan_config, timeout, user_agent, threads, concurrent);

            println!("  {} {}\n", "Target:".bold(), target.green());

            let engine = ScanEngine::new(scan_config);
            let scan_report = engine.scan(&target).await?;

            print_results(&scan_report);
            print_summary(&scan_report);

            match format.as_str() {
                "json" => {
                    let output_file = output
                        .unwrap_or_else(|| output_name_from_target(&scan_report.target, "json"));
                    report::json::export(&scan_report, Path::new(&output_file))?;
                    println!("\n  Report written to {}", output_file.cyan());
                }
                "html" => {
                    let output_file = output
                        .unwrap_or_else(|| output_name_from_target(&scan_report.target, "html"));
                    report::html::generate(&scan_report, Path::new(&output_file))?;
                    println!("\n  Report written to {}", output_file.cyan());
                }
                _ => {}
            }

            if fail_on_findings && scan_report.results.total_findings() > 0 {
                std::process::exit(1);
            }
        }

        Commands::Modules => {
            print_banner();
            let mut builder = Builder::default();
            builder.push_record(["Check", "Description"]);
            for (name, description) in MODULES {
                builder.push_record([*name, *description]);
            }
            let mut table = builder.build();
            table.with(Style::rounded());
            println!("{table}");
        }

        Commands::Report { input, output } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("skopos=info")),
                )
                .with_target(false)
                .init();

            let scan_report = report::json::load(&input)?;
            report::html::generate(&scan_report, Path::new(&output))?;
            println!("Report written to {}", output.cyan());
        }
    }

    Ok(())
}
