use clap::{Parser, Subcommand};
use std::path::PathBuf;

use claimcheck::commands::{self, OutputFormat, SubmitArgs};
use claimcheck::config::Config;

#[derive(Parser)]
#[command(name = "claimcheck", about = "claimcheck — claim evaluation from the terminal")]
struct Cli {
    /// Write debug logs to /tmp/claimcheck-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Print the resolved record as JSON instead of a summary.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a saved service response (reads stdin when PATH is omitted).
    Decode {
        path: Option<PathBuf>,
    },
    /// Upload a document with a question and resolve the decision.
    Submit {
        /// Document to upload (pdf, doc, docx, png, jpg, jpeg, txt).
        #[arg(long)]
        file: PathBuf,
        /// Question about policy eligibility.
        #[arg(long)]
        query: String,
        /// Override the configured evaluation endpoint.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load config, using defaults");
        Config::defaults()
    });
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    match cli.command {
        Command::Decode { path } => commands::run_decode(&config, path.as_deref(), format),
        Command::Submit {
            file,
            query,
            endpoint,
        } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(commands::run_submit(
                &config,
                SubmitArgs {
                    file,
                    query,
                    endpoint,
                },
                format,
            ))
        }
    }
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/claimcheck-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("claimcheck debug log started — tail -f /tmp/claimcheck-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}
