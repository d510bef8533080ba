mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "foundation",
    about = "Generate web and native design-token artifacts and check that they agree",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from foundation.yaml or .git/)
    #[arg(long, global = true, env = "FOUNDATION_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default foundation.yaml and starter token file
    Init,

    /// Render CSS, Swift constants, colorsets and the manifest
    Generate {
        /// Token source to read instead of the configured one
        #[arg(long)]
        tokens: Option<PathBuf>,
    },

    /// Check that the web and native artifacts encode the same values
    Validate {
        /// Fail on warnings too (implied when CI is set)
        #[arg(long)]
        strict: bool,
    },

    /// Inspect or check foundation.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Generate { tokens } => cmd::generate::run(&root, tokens.as_deref(), cli.json),
        Commands::Validate { strict } => cmd::validate::run(&root, strict, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
