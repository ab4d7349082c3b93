use std::path::PathBuf;

use clap::{Args, Subcommand};
use eyre::Result;
use rosetta_config::{CONFIG_FILE_NAME, PreferenceKey, RosettaToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    action: ConfigAction,

    /// Path to rosetta.toml
    #[arg(short, long, default_value = CONFIG_FILE_NAME, global = true)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print every preference
    Show,

    /// Change one preference
    Set {
        /// Preference name (mapping, indent, header, author, company, project, date_format)
        key: PreferenceKey,
        value: String,
    },
}

impl ConfigCommand {
    pub fn run(&self) -> Result<()> {
        let mut rosetta_toml = RosettaToml::open(&self.config).unwrap_or_exit();

        match &self.action {
            ConfigAction::Show => {}
            ConfigAction::Set { key, value } => {
                rosetta_toml.set(*key, value).unwrap_or_exit();
                rosetta_toml.save().unwrap_or_exit();
            }
        }

        ops::config(&rosetta_toml).render(&mut TerminalOutput::new());
        Ok(())
    }
}
