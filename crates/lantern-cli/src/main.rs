//! CLI host for the Lantern game master.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lantern_mechanics::DEFAULT_DIFFICULTY;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LANTERN_LOG";

#[derive(Parser)]
#[command(
    name = "lantern",
    about = "Lantern, a game master for spoken text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log resolver and dice details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure interactively
    Play {
        /// Adventure JSON file (default: the built-in adventure)
        #[arg(short, long)]
        adventure: Option<PathBuf>,

        /// Player name
        #[arg(short, long)]
        name: Option<String>,

        /// RNG seed for reproducible checks
        #[arg(short, long)]
        seed: Option<u64>,

        /// Base difficulty for risky actions
        #[arg(short, long)]
        difficulty: Option<i32>,
    },

    /// List scenes and their choices
    Scenes {
        /// Adventure JSON file (default: the built-in adventure)
        #[arg(short, long)]
        adventure: Option<PathBuf>,
    },

    /// Validate an adventure and report graph issues
    Check {
        /// Adventure JSON file (default: the built-in adventure)
        #[arg(short, long)]
        adventure: Option<PathBuf>,
    },

    /// Write the built-in adventure as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Roll a single d20 check
    Roll {
        /// Attribute score the modifier is derived from
        #[arg(long)]
        score: Option<i32>,

        /// Attribute to roll with its starting score (e.g. dex, charisma)
        #[arg(short, long)]
        attribute: Option<String>,

        /// Situational modifier
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        modifier: i32,

        /// Difficulty to beat
        #[arg(short, long, default_value_t = DEFAULT_DIFFICULTY)]
        difficulty: i32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            adventure,
            name,
            seed,
            difficulty,
        } => commands::play::run(adventure.as_deref(), name.as_deref(), seed, difficulty),
        Commands::Scenes { adventure } => commands::scenes::run(adventure.as_deref()),
        Commands::Check { adventure } => commands::check::run(adventure.as_deref()),
        Commands::Export { output } => commands::export::run(output.as_deref()),
        Commands::Roll {
            score,
            attribute,
            modifier,
            difficulty,
            seed,
        } => commands::roll::run(score, attribute.as_deref(), modifier, difficulty, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
