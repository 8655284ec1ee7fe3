//! Command line front end for barangay case intake.
//!
//! Usage:
//!     lupon classify "Someone took my neighbor's carabao"
//!     lupon lookup theft
//!     lupon generate --form intake.json --format html --output report.html
//!     lupon search "qualified theft large cattle" --cite 1

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lupon_classify::matched_keyword;
use lupon_knowledge::{lookup, records};
use lupon_model::{CaseCategory, FormData, LegalRecord, PartyInfo};
use lupon_report::{
    HtmlRenderer, PipelineConfig, ReportPipeline, ReportRenderer, TextRenderer, ValidationErrors,
    ValidationRules,
};
use lupon_search::{CitationList, CustomSearchBackend, SearchBackend, SearchConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lupon")]
#[command(about = "Generate barangay mediation case reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Html,
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an incident summary
    Classify {
        /// Incident summary text
        summary: String,
    },

    /// Show the legal knowledge base entry for a category
    Lookup {
        /// theft, threat, defamation, injury or general
        category: Option<String>,

        /// Show every category
        #[arg(long)]
        all: bool,
    },

    /// Generate a case report from an intake form
    Generate {
        /// Intake form as JSON (fields below override it)
        #[arg(long)]
        form: Option<PathBuf>,

        #[arg(long)]
        case_id: Option<String>,

        #[arg(long)]
        date_received: Option<String>,

        /// Complainant name
        #[arg(long)]
        complainant: Option<String>,

        /// Respondent name (repeatable)
        #[arg(long)]
        respondent: Vec<String>,

        /// Incident summary
        #[arg(long)]
        summary: Option<String>,

        /// Incident location
        #[arg(long)]
        location: Option<String>,

        /// Incident date and time (e.g. 2024-05-01T20:00, Philippine time)
        #[arg(long)]
        date_time: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: ReportFormat,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum summary length in characters
        #[arg(long, default_value = "30")]
        min_summary_chars: usize,

        /// Leave the print button out of HTML output
        #[arg(long)]
        no_print_button: bool,
    },

    /// Search legal reference sites
    Search {
        /// Search text
        query: String,

        /// Maximum results (defaults to the search configuration)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ListFormat,

        /// Add the Nth result (1-based) to the citations file
        #[arg(long)]
        cite: Option<usize>,

        /// Citations file
        #[arg(long, default_value = "citations.json")]
        citations: PathBuf,

        /// Allowed sites (comma-separated, replaces the defaults)
        #[arg(long, value_delimiter = ',')]
        domains: Vec<String>,

        #[arg(long, env = "LUPON_SEARCH_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(long, env = "LUPON_SEARCH_ENGINE_ID")]
        engine_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lupon=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { summary } => run_classify(&summary),
        Commands::Lookup { category, all } => run_lookup(category.as_deref(), all),
        Commands::Generate {
            form,
            case_id,
            date_received,
            complainant,
            respondent,
            summary,
            location,
            date_time,
            format,
            output,
            min_summary_chars,
            no_print_button,
        } => {
            let mut data = match form {
                Some(path) => read_form(&path)?,
                None => FormData::default(),
            };
            if case_id.is_some() {
                data.case_id = case_id;
            }
            if date_received.is_some() {
                data.date_received = date_received;
            }
            if let Some(name) = complainant {
                data.complainant.name = Some(name);
            }
            if !respondent.is_empty() {
                data.respondents = respondent.into_iter().map(PartyInfo::named).collect();
            }
            if let Some(summary) = summary {
                data.summary = summary;
            }
            if let Some(location) = location {
                data.location = location;
            }
            if let Some(date_time) = date_time {
                data.date_time = date_time;
            }

            let config = PipelineConfig {
                rules: ValidationRules {
                    min_summary_chars,
                    ..Default::default()
                },
            };
            let html = HtmlRenderer {
                print_button: !no_print_button,
            };
            run_generate(config, &data, format, &html, output.as_deref())
        }
        Commands::Search {
            query,
            limit,
            format,
            cite,
            citations,
            domains,
            api_key,
            engine_id,
        } => {
            let mut config = SearchConfig {
                api_key,
                engine_id,
                ..Default::default()
            };
            if !domains.is_empty() {
                config.allowed_domains = domains;
            }
            if let Some(limit) = limit {
                config.max_results = limit;
            }
            run_search(config, &query, format, cite, &citations).await
        }
    }
}

fn run_classify(summary: &str) -> Result<()> {
    match matched_keyword(summary) {
        Some((category, keyword)) => {
            println!("Category: {}", category.label());
            println!("Matched:  \"{}\"", keyword);
        }
        None => {
            println!("Category: {}", CaseCategory::General.label());
            println!("Matched:  (no keyword rule)");
        }
    }
    Ok(())
}

fn run_lookup(category: Option<&str>, all: bool) -> Result<()> {
    if all {
        for (category, record) in records() {
            print_record(category, record);
        }
        return Ok(());
    }

    let name = category.context("Give a category or --all")?;
    let category = CaseCategory::from(name);
    print_record(category, lookup(category));
    Ok(())
}

fn print_record(category: CaseCategory, record: &LegalRecord) {
    println!("== {} ==", category.label());
    println!("Nature: {}", record.nature);
    println!("{}", record.description);

    println!("\nViolations:");
    for p in &record.violations {
        println!("  - {} ({})", p.title, p.basis);
        println!("    Penalty: {}", p.penalty);
    }

    if !record.jurisprudence.is_empty() {
        println!("\nJurisprudence:");
        for c in &record.jurisprudence {
            println!("  - {}: {}", c.title, c.summary);
        }
    }

    if !record.counters.is_empty() {
        println!("\nPossible counter-charges:");
        for p in &record.counters {
            println!("  - {} ({})", p.title, p.basis);
        }
    }
    println!();
}

fn read_form(path: &Path) -> Result<FormData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid form JSON in {}", path.display()))
}

fn run_generate(
    config: PipelineConfig,
    data: &FormData,
    format: ReportFormat,
    html: &HtmlRenderer,
    output: Option<&Path>,
) -> Result<()> {
    let mut pipeline = ReportPipeline::new(config);

    let rendered: std::result::Result<Result<String>, ValidationErrors> = match format {
        ReportFormat::Html => pipeline.generate_and_render(data, html).map(Ok),
        ReportFormat::Text => pipeline.generate_and_render(data, &TextRenderer).map(Ok),
        ReportFormat::Json => pipeline
            .generate_and_render(data, &JsonRenderer)
            .map(|json| json.map_err(Into::into)),
    };

    let document = match rendered {
        Ok(document) => document?,
        Err(errors) => {
            eprintln!("Cannot generate report:");
            for error in errors.errors() {
                eprintln!("  {}: {}", error.field(), error);
            }
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", document),
    }

    Ok(())
}

async fn run_search(
    config: SearchConfig,
    query: &str,
    format: ListFormat,
    cite: Option<usize>,
    citations_path: &Path,
) -> Result<()> {
    let backend = CustomSearchBackend::new(config)?;

    let results = match backend.search(query).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Search unavailable ({}): {}", backend.name(), e);
            std::process::exit(1);
        }
    };

    match format {
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        ListFormat::Text => {
            for (i, r) in results.iter().enumerate() {
                println!("\n{}. {}", i + 1, r.title);
                println!("   {}", r.link);
                if !r.snippet.is_empty() {
                    println!("   {}", r.snippet.replace('\n', " "));
                }
            }
            println!("\n---");
            println!("Total: {} results", results.len());
        }
    }

    if let Some(n) = cite {
        let selected = n
            .checked_sub(1)
            .and_then(|i| results.get(i))
            .with_context(|| format!("No result number {}", n))?;

        let mut citations: CitationList = if citations_path.exists() {
            let text = std::fs::read_to_string(citations_path)?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid citations file {}", citations_path.display()))?
        } else {
            CitationList::new()
        };

        if citations.add(selected.clone()) {
            std::fs::write(citations_path, serde_json::to_string_pretty(&citations)?)?;
            println!("Cited: {} ({} total)", selected.title, citations.len());
        } else {
            println!("Already cited: {}", selected.title);
        }
    }

    Ok(())
}

/// Serializes the report as pretty JSON.
struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    type Output = serde_json::Result<String>;

    fn render(&self, report: &lupon_model::CaseReport) -> Self::Output {
        serde_json::to_string_pretty(report)
    }
}
