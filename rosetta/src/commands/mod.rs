mod check;
mod completions;
mod config;
mod generate;
mod init;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use config::ConfigCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use miette::Diagnostic;
use rosetta_config::{CONFIG_FILE_NAME, Preferences, RosettaToml};

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Preferences from `config`, or from ./rosetta.toml when it exists.
fn load_preferences(config: Option<&Path>) -> Preferences {
    let path = match config {
        Some(path) => path,
        None if Path::new(CONFIG_FILE_NAME).exists() => Path::new(CONFIG_FILE_NAME),
        None => return Preferences::default(),
    };
    RosettaToml::open(path).unwrap_or_exit().preferences().clone()
}

#[derive(Parser)]
#[command(name = "rosetta")]
#[command(version)]
#[command(about = "Generate Swift model classes from Swagger-style model descriptions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Config(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Swift model from a model description
    Generate(GenerateCommand),

    /// Parse a model description without generating code
    Check(CheckCommand),

    /// Create a rosetta.toml preferences file
    Init(InitCommand),

    /// Show or change preferences in rosetta.toml
    Config(ConfigCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
