use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use coverwise_api::ApiClient;
use coverwise_core::ApplicantProfile;
use coverwise_report::{ExpansionState, SummaryDocument};

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "coverwise", version, about = "Coverwise insurance-recommendation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a transaction CSV for analysis and start a session
    Analyze {
        /// Path to the transaction CSV
        #[arg(long)]
        csv: PathBuf,

        /// Override the configured API base URL
        #[arg(long)]
        api: Option<String>,
    },

    /// Render the stored analysis: headline stats, categories, summary sections
    Dashboard {
        /// Section ids to render collapsed (repeatable)
        #[arg(long)]
        collapse: Vec<String>,
    },

    /// Parse and render a local report text file (no network)
    Summary {
        /// Path to a free-text report
        #[arg(long)]
        file: PathBuf,

        /// Section ids to render collapsed (repeatable)
        #[arg(long)]
        collapse: Vec<String>,
    },

    /// Submit a questionnaire JSON and print ranked plans
    Recommend {
        /// Path to an applicant profile JSON file
        #[arg(long)]
        form: PathBuf,

        /// Override the configured API base URL
        #[arg(long)]
        api: Option<String>,
    },

    /// Compare the session's recommended plans via the comparison service
    Compare {
        /// Override the configured API base URL
        #[arg(long)]
        api: Option<String>,
    },

    /// Inspect or invalidate the session handoff
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Print what the current session holds
    Show,
    /// Remove the session file
    Clear,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file
    Init,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { csv, api } => analyze(csv, api).await?,
        Command::Dashboard { collapse } => dashboard(collapse)?,
        Command::Summary { file, collapse } => summary(file, collapse)?,
        Command::Recommend { form, api } => recommend(form, api).await?,
        Command::Compare { api } => compare(api).await?,
        Command::Session { command } => match command {
            SessionCommand::Show => session_show()?,
            SessionCommand::Clear => {
                if state::clear_session()? {
                    println!("Session cleared");
                } else {
                    println!("No session to clear");
                }
            }
        },
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn api_client(override_url: Option<String>) -> Result<ApiClient> {
    let base_url = match override_url {
        Some(url) => url,
        None => config::load_config()?.api.base_url,
    };
    Ok(ApiClient::new(base_url))
}

async fn analyze(csv: PathBuf, api: Option<String>) -> Result<()> {
    if !csv.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv.display());
    }

    let preview = coverwise_api::validate_csv(&csv)?;
    println!(
        "Validated {}: {} rows ({})",
        csv.display(),
        preview.row_count,
        preview.columns.join(", ")
    );

    let client = api_client(api)?;
    let analysis = client
        .analyze_csv(&csv)
        .await
        .with_context(|| format!("analyzing {}", csv.display()))?;

    println!("\n{}", render::render_headline(&analysis));
    println!("{}", render::render_top_categories(&analysis));

    let document = SummaryDocument::from_text(&analysis.summary);
    log::info!(
        "parsed summary into {} sections",
        document.sections.len()
    );

    let mut session = state::read_session()?.unwrap_or_default();
    session.stamp_now();
    session.source_file = Some(csv.display().to_string());
    session.analysis = Some(analysis);
    session.document = Some(document);
    state::write_session(&session)?;
    println!("Session written to {}", state::session_path()?.display());
    Ok(())
}

fn dashboard(collapse: Vec<String>) -> Result<()> {
    let Some(session) = state::read_session()? else {
        bail!("no session found; run `coverwise analyze --csv <file>` first");
    };
    let Some(document) = session.document.as_ref() else {
        bail!("session holds no analysis; run `coverwise analyze --csv <file>` first");
    };

    let mut expansion = ExpansionState::new();
    for id in &collapse {
        expansion.collapse(id);
    }

    if let Some(analysis) = session.analysis.as_ref() {
        println!("{}", render::render_headline(analysis));
        println!("{}", render::render_top_categories(analysis));
    } else {
        println!("{}", render::render_summary_card(&document.fields));
    }
    println!("{}", render::render_sections(&document.sections, &expansion));
    Ok(())
}

fn summary(file: PathBuf, collapse: Vec<String>) -> Result<()> {
    let text =
        std::fs::read_to_string(&file).with_context(|| format!("read {}", file.display()))?;
    let document = SummaryDocument::from_text(&text);

    let mut expansion = ExpansionState::new();
    for id in &collapse {
        expansion.collapse(id);
    }

    println!("{}", render::render_summary_card(&document.fields));
    println!("{}", render::render_sections(&document.sections, &expansion));
    Ok(())
}

async fn recommend(form: PathBuf, api: Option<String>) -> Result<()> {
    let raw =
        std::fs::read_to_string(&form).with_context(|| format!("read {}", form.display()))?;
    let profile: ApplicantProfile =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", form.display()))?;

    let client = api_client(api)?;
    let response = client.recommend(&profile).await.context("requesting recommendations")?;

    println!("{}", render::render_plans(&response.recommendations));

    let mut session = state::read_session()?.unwrap_or_default();
    session.stamp_now();
    session.recommendations = Some(response);
    state::write_session(&session)?;
    println!("Session written to {}", state::session_path()?.display());
    Ok(())
}

async fn compare(api: Option<String>) -> Result<()> {
    let Some(session) = state::read_session()? else {
        bail!("no session found; run `coverwise recommend --form <file>` first");
    };
    let Some(recommendations) = session.recommendations.as_ref() else {
        bail!("session holds no recommendations; run `coverwise recommend --form <file>` first");
    };

    let client = api_client(api)?;
    let comparison = client
        .compare(recommendations)
        .await
        .context("requesting plan comparison")?;
    println!("{comparison}");
    Ok(())
}

fn session_show() -> Result<()> {
    let Some(session) = state::read_session()? else {
        println!("No session");
        return Ok(());
    };

    println!("Session: {}", state::session_path()?.display());
    if let Some(created) = &session.created_at_utc {
        println!("  created: {created}");
    }
    if let Some(source) = &session.source_file {
        println!("  source: {source}");
    }
    if let Some(analysis) = &session.analysis {
        println!(
            "  analysis: {} transactions, {} total",
            analysis.transaction_count,
            coverwise_core::format_currency(analysis.total_spending)
        );
    }
    if let Some(document) = &session.document {
        println!(
            "  document: schema v{}, {} sections",
            document.schema_version,
            document.sections.len()
        );
    }
    if let Some(recs) = &session.recommendations {
        println!("  recommendations: {} plans", recs.recommendations.len());
    }
    Ok(())
}
