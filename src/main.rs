// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use globe_relay::utils::logging::format_success;
use globe_relay::{Config, DetailItem, JsonExporter, ResultDocument, SearchRelay};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "globe_relay")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Streaming search-relay client for the Globe Explorer API", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Relay a query through the upstream search engine
    Search {
        /// Search query text
        query: String,

        /// Print the raw result document as JSON instead of rendering it
        #[arg(long)]
        json: bool,

        /// Write the result to this directory as a timestamped JSON file
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Pretty-print exported/printed JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the effective configuration
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    globe_relay::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Search {
            query,
            json,
            output,
            pretty,
        } => {
            cmd_search(&config, &query, json, output, pretty).await?;
        }
        Commands::ShowConfig => {
            cmd_show_config(&config)?;
        }
    }

    Ok(())
}

async fn cmd_search(
    config: &Config,
    query: &str,
    json: bool,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    info!("Searching for: {}", query);

    let relay = SearchRelay::new(config.clone()).context("Failed to build search relay")?;
    let document = relay.search(query).await.context("Search failed")?;

    if json {
        let payload = if pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        println!("{}", payload);
    } else {
        render_document(query, &document);
    }

    if let Some(dir) = output {
        let exporter = JsonExporter::new(dir).context("Failed to create export directory")?;
        let path = exporter
            .export(query, &document, pretty)
            .context("Failed to export result")?;
        println!("{}", format_success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

fn render_document(query: &str, document: &ResultDocument) {
    if document.is_empty() {
        println!("\nNo results for query: \"{}\"\n", query);
        println!("The upstream stream ended without usable events.");
        return;
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("{}", "=".repeat(80));

    if !document.summary.is_empty() {
        println!("\n{}\n", document.summary);
    }

    for (idx, detail) in document.details.iter().enumerate() {
        match detail {
            DetailItem::Line { text } => {
                println!("{}. {}", idx + 1, text);
            }
            DetailItem::ImageGroup { subject, images } => {
                println!("{}. Images related to: {}", idx + 1, subject);
                for image in images {
                    println!("     {} ({})", image.image_url, image.link);
                }
            }
        }
    }

    println!("\n{}", "=".repeat(80));
}

fn cmd_show_config(config: &Config) -> Result<()> {
    println!("{}", toml_like(config)?);
    Ok(())
}

fn toml_like(config: &Config) -> Result<String> {
    // JSON is close enough for a human check and avoids a toml writer dep
    Ok(serde_json::to_string_pretty(config)?)
}
