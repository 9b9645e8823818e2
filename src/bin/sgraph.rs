//! CLI entry point for the `sgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use social_graph::cli::commands;
use social_graph::SocialError;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "sgraph CLI: replay friendship scripts and query the resulting social graph"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script and report the outcome of every line
    Replay {
        /// Path to the command script
        script: PathBuf,
        /// Save the session journal to this file
        #[arg(long)]
        save: Option<PathBuf>,
        /// Save a minimal snapshot of the final graph instead of the journal
        #[arg(long, requires = "save")]
        compact: bool,
    },
    /// Number of people, relations and connected components
    Stats {
        /// Path to the command script
        script: PathBuf,
    },
    /// List every person
    Vertices {
        /// Path to the command script
        script: PathBuf,
    },
    /// List the friends of one person
    Neighbors {
        /// Path to the command script
        script: PathBuf,
        /// Person to look up
        name: String,
    },
    /// Friends shared by two people
    Mutual {
        /// Path to the command script
        script: PathBuf,
        a: String,
        b: String,
    },
    /// Shortest chain of friendships between two people
    Path {
        /// Path to the command script
        script: PathBuf,
        from: String,
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == OutputFormat::Json;

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Replay {
            script,
            save,
            compact,
        } => commands::cmd_replay(&script, save.as_deref(), compact, json),
        Commands::Stats { script } => commands::cmd_stats(&script, json),
        Commands::Vertices { script } => commands::cmd_vertices(&script, json),
        Commands::Neighbors { script, name } => commands::cmd_neighbors(&script, &name, json),
        Commands::Mutual { script, a, b } => commands::cmd_mutual(&script, &a, &b, json),
        Commands::Path { script, from, to } => commands::cmd_path(&script, &from, &to, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}

/// Parse errors surface only as failed replay lines, so they share code 5.
fn exit_code(e: &SocialError) -> i32 {
    match e {
        SocialError::Io(_) => 1,
        SocialError::PersonNotFound(_) => 4,
        SocialError::ReplayFailed { .. }
        | SocialError::Malformed { .. }
        | SocialError::UnknownCommand(_) => 5,
    }
}
