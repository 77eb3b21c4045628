use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use conquest_cli::config::GameConfig;
use conquest_cli::prompt::Prompter;
use conquest_cli::session::Session;
use conquest_cli::storage::SaveStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

/// Two-player placement chess in the terminal.
#[derive(Parser)]
#[command(name = "conquest")]
#[command(about = "Two-player Conquest and Connect placement chess")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "conquest.toml")]
    config: PathBuf,

    /// Save file to use instead of the configured one
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Seed for drawing the starting player
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GameConfig::load(&cli.config).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {}: {}", cli.config.display(), e);
        GameConfig::default()
    });
    let save_path = cli.save_file.unwrap_or_else(|| config.save_path.clone());
    tracing::info!("Save file: {}", save_path.display());

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let prompter = Prompter::new(io::stdin().lock(), io::stdout())
        .with_delay(config.text_delay())
        .with_clear_screen(config.clear_screen);
    let mut session = Session::new(prompter, SaveStore::new(save_path), rng);

    let end = session.run().context("terminal session failed")?;
    tracing::info!("Session ended: {:?}", end);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::info!("Starting conquest");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
