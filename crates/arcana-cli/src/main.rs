//! CLI frontend for the Arcana tarot reading engine.

mod commands;
mod config;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — tarot readings with an intuitive AI interpreter",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full reading: pick a spread, ask a question, reveal the cards
    Read {
        /// Spread to use (one, three, love, career, celtic); prompts if omitted
        #[arg(short, long)]
        spread: Option<String>,

        /// The question to put to the cards; prompts if omitted
        #[arg(short, long)]
        question: Option<String>,

        /// Seed the shuffle for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Draw (or revisit) today's free single-card insight
    Daily {
        /// Seed the shuffle for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show past readings, newest first
    History {
        /// Show at most this many readings
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Print full interpretations instead of a summary table
        #[arg(long)]
        full: bool,
    },

    /// List the available spreads and their costs
    Spreads,

    /// Show the credit balance
    Credits {
        /// Demo top-up: restore the balance to 5 credits
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Read {
            spread,
            question,
            seed,
        } => commands::read::run(&config, spread.as_deref(), question.as_deref(), seed).await,
        Commands::Daily { seed } => commands::daily::run(&config, seed).await,
        Commands::History { limit, full } => commands::history::run(&config, limit, full),
        Commands::Spreads => commands::spreads::run(&config),
        Commands::Credits { reset } => commands::credits::run(&config, reset),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
