//! ScholarSift - Entry Point
//!
//! Serves the browser UI, or runs a one-shot search-and-export from the
//! command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholarsift::export::{ExportMeta, export_papers};
use scholarsift::models::{ExportFormat, SearchField, SearchQuery, SortBy, SortOrder};
use scholarsift::server::WebServer;
use scholarsift::{ArxivClient, Config};

#[derive(Parser, Debug)]
#[command(name = "scholarsift")]
#[command(about = "Search arXiv and export papers as text, Word, PDF, or Excel")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web UI and API server (default)
    Serve {
        /// HTTP server port
        #[arg(long, default_value = "7860", env = "PORT")]
        port: u16,

        /// Bind to all interfaces instead of localhost
        #[arg(long)]
        public: bool,
    },
    /// Search once and write an export file
    Export {
        /// The search term
        query: String,

        /// Number of results to fetch
        #[arg(long, short = 'n')]
        max_results: Option<usize>,

        /// Field the term applies to (all, title, author, abstract, category)
        #[arg(long, default_value = "all")]
        field: SearchField,

        /// Sort key (relevance, submitteddate, lastupdateddate)
        #[arg(long, default_value = "relevance")]
        sort: SortBy,

        /// Output format (text, docx, pdf, xlsx)
        #[arg(long, short = 'f', default_value = "text")]
        format: ExportFormat,

        /// Output path (defaults to scholarsift_export.<ext>)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting ScholarSift");

    let config = Config::from_env()?;
    let client = ArxivClient::new(config.clone())?;

    match cli.command.unwrap_or(Command::Serve { port: 7860, public: false }) {
        Command::Serve { port, public } => {
            let bind = if public { [0, 0, 0, 0] } else { [127, 0, 0, 1] };
            WebServer::new(client, config).run(bind, port).await?;
        }
        Command::Export { query, max_results, field, sort, format, output } => {
            let search = SearchQuery::keyword(query.trim())
                .with_field(field)
                .with_max_results(config.clamp_max_results(max_results))
                .with_sort(sort, SortOrder::Descending);

            let result = client.search(&search).await?;
            anyhow::ensure!(!result.is_empty(), "no papers matched query '{query}'");

            let meta = ExportMeta::new(&result.query);
            let bytes = export_papers(&result.papers, format, &meta)?;

            let path = output.unwrap_or_else(|| PathBuf::from(meta.filename(format)));
            std::fs::write(&path, &bytes)?;

            tracing::info!(
                papers = result.papers.len(),
                path = %path.display(),
                "Export written"
            );
            println!("Wrote {} papers to {}", result.papers.len(), path.display());
        }
    }

    Ok(())
}
