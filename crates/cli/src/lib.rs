pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use stylist_core::config::{LogFormat, LoggingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "stylist",
    about = "Weather-aware outfit recommendations",
    long_about = "Recommend an outfit for an occasion, color, mood and gender, adjusted for the current or forecast weather in a city.",
    after_help = "Examples:\n  stylist recommend --occasion work --color navy --city Paris --day 1\n  stylist recommend --mood cozy --save\n  stylist favorites\n  stylist config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Recommend an outfit for the given preferences and city weather")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(about = "List saved favorite outfits")]
    Favorites(commands::favorites::FavoritesArgs),
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(args),
        Command::Favorites(args) => commands::favorites::run(args),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Diagnostics go to stderr; stdout carries command output only. Safe to
/// call more than once.
pub(crate) fn init_logging(config: &LoggingConfig) {
    use tracing::Level;

    let log_level = config.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
