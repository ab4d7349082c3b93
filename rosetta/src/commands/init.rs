use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use rosetta_codegen::MappingMode;
use rosetta_config::{CONFIG_FILE_NAME, Preferences, RosettaToml};
use rosetta_core::{File, WriteResult};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create rosetta.toml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Mapping mode (prompts when omitted)
    #[arg(short, long)]
    pub mapping: Option<MappingMode>,

    /// Overwrite an existing rosetta.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mapping = match self.mapping {
            Some(mapping) => mapping,
            None => Self::prompt_mapping()?,
        };
        let preferences = Preferences {
            mapping,
            ..Preferences::default()
        };

        let rosetta_toml =
            RosettaToml::with_preferences(self.output.join(CONFIG_FILE_NAME), preferences)
                .unwrap_or_exit();

        let file = File::new(rosetta_toml.path(), rosetta_toml.content());
        let file = if self.force { file } else { file.if_missing() };

        match file.write().map_err(Box::new).unwrap_or_exit() {
            WriteResult::Written => {
                println!("Created {}", file.path().display());
                if !mapping.is_implemented() {
                    eprintln!(
                        "warning: {} is not available yet, models are generated with manual mapping",
                        mapping.label()
                    );
                }
            }
            WriteResult::Skipped => {
                eprintln!(
                    "{} already exists, use --force to overwrite it",
                    file.path().display()
                );
                std::process::exit(1);
            }
        }

        Ok(())
    }

    fn prompt_mapping() -> Result<MappingMode> {
        let labels: Vec<&str> = MappingMode::ALL.iter().map(|mode| mode.label()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a mapping mode")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get mapping selection")?;

        Ok(MappingMode::ALL
            .get(selection)
            .copied()
            .unwrap_or_default())
    }
}
