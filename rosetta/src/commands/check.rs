use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Model description file (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Print the extracted model as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let input = ops::read_input(self.input.as_deref())?;
        let model = rosetta_model::extract_model_with_filename(&input.content, &input.name)
            .unwrap_or_exit();

        if self.json {
            let json =
                serde_json::to_string_pretty(&model).wrap_err("Failed to serialize model")?;
            println!("{}", json);
            return Ok(());
        }

        let report = ops::check(&model, &input.name);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
