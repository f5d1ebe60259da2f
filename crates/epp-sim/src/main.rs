use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "epp-sim",
    about = "Endpoint picker simulator — run pickers against a candidate list",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configured picker over a candidate list.
    ///
    /// Candidates are read from a JSON array of scored pods. The picker
    /// is taken from [picker].name in the config file, or defaults to
    /// roundrobin.
    Pick {
        /// JSON file with the scored candidate pods
        #[arg(short, long)]
        candidates: PathBuf,
        /// Scheduler config (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Picks per thread
        #[arg(short, long, default_value = "12")]
        rounds: usize,
        /// Concurrent callers sharing one picker
        #[arg(short, long, default_value = "1")]
        threads: usize,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List the registered pickers
    List,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("epp_sim=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pick {
            candidates,
            config,
            rounds,
            threads,
            format,
        } => commands::pick::run(&candidates, config.as_deref(), rounds, threads, &format),
        Commands::List => commands::list::run(),
    }
}
