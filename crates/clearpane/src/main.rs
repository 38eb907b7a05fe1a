mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clearpane",
    version,
    about = "Hotkey-driven click-through windows"
)]
struct Cli {
    /// Use this config file instead of ~/.config/clearpane/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate the configured shortcuts
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the window and listen for hotkeys
    Run,
}

fn main() {
    let cli = Cli::parse();
    let path = commands::config_path(cli.config);

    match cli.command {
        Commands::Init { force } => commands::init::execute(&path, force),
        Commands::Check { json } => commands::check::execute(&path, json),
        Commands::Run => commands::run::execute(&path),
    }
}
