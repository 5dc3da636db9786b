// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use doc_search::{
    CollectingResultList, Config, ConsoleNotifier, ConsoleResultList, DocumentFetcher,
    FetchOrder, FetchOutcome, HttpGateway, JsonExporter, QueryController, QueryExport,
    QueryOutcome, UploadController, UploadOutcome,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "doc_search")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Query, read and upload documents through a semantic search gateway", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Overrides gateway.base_url from the configuration file
    #[arg(long, value_name = "URL", env = "DOC_SEARCH_GATEWAY_URL")]
    gateway_url: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Show a progress bar while documents are fetched
    #[arg(long, action = ArgAction::SetTrue)]
    progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for documents and print the full text of every hit
    Query {
        /// Search query text
        text: String,

        #[arg(long, value_enum)]
        order: Option<FetchOrder>,

        #[arg(long, value_name = "NUM")]
        max_concurrency: Option<usize>,

        /// Emit the collected documents as JSON instead of a list
        #[arg(long)]
        json: bool,

        /// Write the JSON export to a file (implies --json)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Print the full text of one document
    Fetch {
        document_id: String,
    },

    /// Upload a new document (reads stdin when neither TEXT nor --file is given)
    Upload {
        text: Option<String>,

        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    doc_search::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
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

    if let Some(url) = cli.gateway_url {
        config.gateway.base_url = url;
    }
    if cli.progress {
        config.display.progress = true;
    }

    let success = match cli.command {
        Commands::Query {
            text,
            order,
            max_concurrency,
            json,
            output,
            pretty,
        } => {
            if let Some(order) = order {
                config.fetch.order = order;
            }
            if max_concurrency.is_some() {
                config.fetch.max_concurrency = max_concurrency;
            }
            config.display.pretty_json |= pretty;
            config.validate().context("Invalid configuration")?;

            if json || output.is_some() {
                cmd_query_export(&config, &text, output).await?
            } else {
                cmd_query(&config, &text).await?
            }
        }
        Commands::Fetch { document_id } => {
            config.validate().context("Invalid configuration")?;
            cmd_fetch(&config, &document_id).await?
        }
        Commands::Upload { text, file } => {
            config.validate().context("Invalid configuration")?;
            let document = read_document(text, file)?;
            cmd_upload(&config, &document).await?
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn gateway(config: &Config) -> Result<HttpGateway> {
    HttpGateway::new(config.gateway.clone()).context("Failed to create gateway client")
}

async fn cmd_query(config: &Config, text: &str) -> Result<bool> {
    let gateway = gateway(config)?;
    let results = ConsoleResultList::new();
    let notifier = ConsoleNotifier;

    let controller = QueryController::new(&gateway, &results, &notifier)
        .with_fetch_config(config.fetch.clone())
        .with_progress(config.display.progress);

    Ok(report_query(controller.run_query(text).await))
}

async fn cmd_query_export(config: &Config, text: &str, output: Option<PathBuf>) -> Result<bool> {
    let gateway = gateway(config)?;
    let results = CollectingResultList::new();
    let notifier = ConsoleNotifier;

    let controller = QueryController::new(&gateway, &results, &notifier)
        .with_fetch_config(config.fetch.clone())
        .with_progress(config.display.progress);

    let stats = match controller.run_query(text).await {
        QueryOutcome::Completed(stats) => stats,
        outcome => return Ok(report_query(outcome)),
    };

    let export = QueryExport::new(
        text,
        config.fetch.order,
        stats.clone(),
        results.entries(),
    );
    let exporter = JsonExporter::new(config.display.pretty_json);

    match output {
        Some(path) => exporter
            .write_to(&export, &path)
            .with_context(|| format!("Failed to write export to {}", path.display()))?,
        None => println!("{}", exporter.render(&export)?),
    }

    Ok(report_query(QueryOutcome::Completed(stats)))
}

fn report_query(outcome: QueryOutcome) -> bool {
    match outcome {
        QueryOutcome::Completed(stats) => {
            info!(
                "Fetched {}/{} documents ({:.0}% succeeded)",
                stats.appended,
                stats.requested,
                stats.success_rate()
            );
            true
        }
        QueryOutcome::Rejected | QueryOutcome::Failed => false,
    }
}

async fn cmd_fetch(config: &Config, document_id: &str) -> Result<bool> {
    let gateway = gateway(config)?;
    let results = ConsoleResultList::new();
    let notifier = ConsoleNotifier;

    let fetcher = DocumentFetcher::new(&gateway, &results, &notifier);

    Ok(fetcher.get_document_text(document_id).await == FetchOutcome::Appended)
}

async fn cmd_upload(config: &Config, document: &str) -> Result<bool> {
    let gateway = gateway(config)?;
    let notifier = ConsoleNotifier;

    let controller = UploadController::new(&gateway, &notifier);

    match controller.upload_document(document).await {
        UploadOutcome::Uploaded(receipt) => {
            info!("Document stored at {}", receipt.location);
            Ok(true)
        }
        UploadOutcome::Rejected | UploadOutcome::Failed => Ok(false),
    }
}

fn read_document(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut document = String::new();
    std::io::stdin()
        .read_to_string(&mut document)
        .context("Failed to read document from stdin")?;
    Ok(document)
}
