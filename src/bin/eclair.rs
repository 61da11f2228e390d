//! Command-line front end: fetch a Project Euler problem and print it.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use rs_eclair::{render, FetchOptions, OutputFormat, ProblemClient};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "eclair")]
#[command(about = "Print Project Euler problem statements", long_about = None, version)]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format: text or json
    #[arg(short, long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Site root to fetch problems from
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the numbered problem
    Number {
        /// Problem number
        #[arg(value_name = "N")]
        number: u32,
    },
    /// Print a randomly chosen problem
    Random,
}

impl Cli {
    fn fetch_options(&self) -> FetchOptions {
        let mut options = FetchOptions::default();
        if let Some(base_url) = &self.base_url {
            options.base_url.clone_from(base_url);
        }
        if let Some(timeout) = self.timeout {
            options.timeout = timeout;
        }
        options
    }
}

/// Log level for a `-v` count. `RUST_LOG` takes precedence.
const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(cli.verbose)));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = ProblemClient::new(cli.fetch_options()).context("Failed to create HTTP client")?;

    let number = match cli.command {
        Commands::Number { number } => number,
        Commands::Random => {
            let number = client.random_number();
            info!("Picked problem {number}");
            number
        }
    };

    let problem = client
        .get_problem(number)
        .await
        .with_context(|| format!("Failed to get problem {number}"))?;

    let missing = problem.missing_fields();
    if !missing.is_empty() {
        warn!("Problem {number} page is missing: {}", missing.join(", "));
    }

    println!("{}", render(&problem, cli.format)?);
    Ok(())
}
