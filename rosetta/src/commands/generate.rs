use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use eyre::Result;
use rosetta_codegen::{GenerationConfig, Indent, MappingMode};
use rosetta_config::Preferences;

use super::{UnwrapOrExit, load_preferences};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Model description file (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the generated code instead of writing it
    #[arg(long, visible_alias = "stdout")]
    pub dry_run: bool,

    /// Path to rosetta.toml (defaults to ./rosetta.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mapping mode (manual, objectmapper, swiftyjson, freddy, gloss)
    #[arg(short, long)]
    pub mapping: Option<MappingMode>,

    /// Spaces per indentation level
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    pub indent: Option<u8>,

    /// Leave out the header comment
    #[arg(long)]
    pub no_header: bool,

    /// Author named in the header comment
    #[arg(long)]
    pub author: Option<String>,

    /// Company named in the copyright line
    #[arg(long)]
    pub company: Option<String>,

    /// Project named in the header comment
    #[arg(long)]
    pub project: Option<String>,

    /// Header date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let input = ops::read_input(self.input.as_deref())?;
        let config = self.generation_config(&load_preferences(self.config.as_deref()));

        let model = rosetta_model::extract_model_with_filename(&input.content, &input.name)
            .unwrap_or_exit();

        let report = ops::generate(
            &model,
            &config,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )
        .map_err(Box::new)
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Preferences with command-line overrides applied.
    fn generation_config(&self, preferences: &Preferences) -> GenerationConfig {
        let mut config = preferences.generation_config();

        if let Some(mapping) = self.mapping {
            config = config.with_mapping(mapping);
        }
        if let Some(indent) = self.indent.and_then(Indent::spaces) {
            config = config.with_indent(indent);
        }
        if self.no_header {
            config = config.with_header(false);
        }
        if let Some(author) = &self.author {
            config = config.with_author(author);
        }
        if let Some(company) = &self.company {
            config = config.with_company(company);
        }
        if let Some(project) = &self.project {
            config = config.with_project(project);
        }
        if let Some(date) = self.date {
            config = config.with_date(date);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        generate: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        let args = std::iter::once("generate").chain(args.iter().copied());
        Wrapper::try_parse_from(args).unwrap().generate
    }

    #[test]
    fn test_flags_override_preferences() {
        let preferences = Preferences {
            author: "Jane".to_string(),
            company: "Acme".to_string(),
            ..Preferences::default()
        };
        let cmd = parse(&[
            "--mapping",
            "objectmapper",
            "--indent",
            "2",
            "--no-header",
            "--company",
            "Initech",
            "--date",
            "2016-08-25",
        ]);

        let config = cmd.generation_config(&preferences);

        assert_eq!(config.mapping, MappingMode::ObjectMapper);
        assert_eq!(config.indent.width(), 2);
        assert!(!config.add_header_comment);
        assert_eq!(config.author, "Jane");
        assert_eq!(config.company, "Initech");
        assert_eq!(config.date, NaiveDate::from_ymd_opt(2016, 8, 25).unwrap());
    }

    #[test]
    fn test_preferences_apply_without_flags() {
        let preferences = Preferences {
            mapping: MappingMode::ObjectMapper,
            indent: 3,
            header: false,
            ..Preferences::default()
        };

        let config = parse(&[]).generation_config(&preferences);

        assert_eq!(config.mapping, MappingMode::ObjectMapper);
        assert_eq!(config.indent.width(), 3);
        assert!(!config.add_header_comment);
    }
}
