//! TintScale - color scale and contrast toolkit
//!
//! Generates shade scales from base colors, reports accessible color
//! pairings, and exports scales as theme snippets.

use clap::{Parser, Subcommand};
use tintscale::cli::{
    AdjustArgs, CliResult, ConfigArgs, ContrastArgs, ExitCode, ExportArgs, RatioArgs, ShadesArgs,
};
use tintscale::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// TintScale - color scale and contrast toolkit
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the ten-step shade scale for each base color
    Shades(ShadesArgs),
    /// List accessible color pairings across the generated scales
    Contrast(ContrastArgs),
    /// Compute the contrast ratio between two colors
    Ratio(RatioArgs),
    /// Export scales as a CSS or Tailwind theme snippet
    Export(ExportArgs),
    /// Lighten or darken a single color
    Adjust(AdjustArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Shades(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::Ratio(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Adjust(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        tracing::debug!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }

    std::process::exit(ExitCode::Success.code());
}
