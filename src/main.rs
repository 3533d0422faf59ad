//! nbs CLI - Note Block Studio song files
//!
//! Command-line interface for the nbs codec.

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use nbs::cli::{commands, Cli, Commands};
use nbs::Result;

fn main() {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG overrides the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("nbs v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("nbs v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("{} ({})", err, err.error_code());
        std::process::exit(1);
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Info { path } => commands::info(&path),
        Commands::Dump { path } => commands::dump(&path),
        Commands::Chords { path } => commands::chords(&path),
        Commands::Normalize { input, output } => commands::normalize(&input, &output),
        Commands::New {
            path,
            name,
            author,
            tempo,
        } => commands::new_song(&path, &name, &author, tempo),
    }
}
