mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vadertext")]
#[command(about = "Sentiment text and score normalization primitives")]
struct Cli {
    /// Print results as JSON objects
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collapse repeated punctuation in TEXT
    Collapse { text: String },
    /// Report whether TEXT mixes ALL-CAPS and non-caps words
    Caps { text: String },
    /// Compress a raw intensity SCORE into [-1, 1]
    Normalize {
        #[arg(allow_negative_numbers = true)]
        score: f64,

        /// Calibration alpha; overrides VADERTEXT_ALPHA
        #[arg(long, allow_negative_numbers = true)]
        alpha: Option<f64>,
    },
    /// Print the empirical sentiment weights
    Constants,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = vadertext_core::load_app_config();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, command = ?cli.command, "running");

    let output = commands::execute(cli.command, &config)?;
    println!("{}", output.render(cli.json)?);
    Ok(())
}
