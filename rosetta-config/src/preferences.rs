//! The `[preferences]` table and its validation.

use std::{fmt, str::FromStr};

use rosetta_codegen::{
    DEFAULT_DATE_FORMAT, GenerationConfig, Indent, MappingMode, is_valid_date_format,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, SourceContext};

/// Root schema for rosetta.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub preferences: Preferences,
}

impl Config {
    /// Render as rosetta.toml content.
    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string(self).map_err(|source| Box::new(Error::Serialize { source }))?;
        Ok(format!(
            "# Defaults for `rosetta generate`, command-line flags take precedence.\n\n{}",
            body
        ))
    }
}

/// Persisted generation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    pub mapping: MappingMode,
    /// Spaces per indentation level, never zero.
    pub indent: u8,
    /// Whether generated files start with a header comment.
    pub header: bool,
    pub author: String,
    pub company: String,
    pub project: String,
    /// strftime pattern of the header date.
    pub date_format: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            mapping: MappingMode::default(),
            indent: Indent::default().width(),
            header: true,
            author: String::new(),
            company: String::new(),
            project: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Preferences {
    /// Generation settings described by these preferences, dated today.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new()
            .with_mapping(self.mapping)
            .with_indent(Indent::spaces(self.indent).unwrap_or_default())
            .with_header(self.header)
            .with_author(&self.author)
            .with_company(&self.company)
            .with_project(&self.project)
            .with_date_format(&self.date_format)
    }

    /// The value of `key`, formatted as it is written in rosetta.toml.
    pub fn get(&self, key: PreferenceKey) -> String {
        match key {
            PreferenceKey::Mapping => self.mapping.to_string(),
            PreferenceKey::Indent => self.indent.to_string(),
            PreferenceKey::Header => self.header.to_string(),
            PreferenceKey::Author => self.author.clone(),
            PreferenceKey::Company => self.company.clone(),
            PreferenceKey::Project => self.project.clone(),
            PreferenceKey::DateFormat => self.date_format.clone(),
        }
    }

    /// Parse `value` and store it under `key`.
    pub fn set(&mut self, key: PreferenceKey, value: &str) -> Result<()> {
        let invalid = |reason: String| {
            Box::new(Error::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                reason,
            })
        };

        match key {
            PreferenceKey::Mapping => self.mapping = value.parse().map_err(invalid)?,
            PreferenceKey::Indent => match value.parse::<u8>() {
                Ok(width) if width > 0 => self.indent = width,
                _ => {
                    return Err(invalid(
                        "indent must be a positive number of spaces".to_string(),
                    ));
                }
            },
            PreferenceKey::Header => {
                self.header = value
                    .parse()
                    .map_err(|_| invalid("expected 'true' or 'false'".to_string()))?
            }
            PreferenceKey::Author => self.author = value.to_string(),
            PreferenceKey::Company => self.company = value.to_string(),
            PreferenceKey::Project => self.project = value.to_string(),
            PreferenceKey::DateFormat => {
                if !is_valid_date_format(value) {
                    return Err(invalid(
                        "use a strftime pattern such as '%d/%m/%Y'".to_string(),
                    ));
                }
                self.date_format = value.to_string();
            }
        }
        Ok(())
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.indent == 0 {
            return Err(ctx.validation_error(
                "indent",
                "indent must be a positive number of spaces",
            ));
        }
        if !is_valid_date_format(&self.date_format) {
            return Err(ctx.validation_error(
                "date_format",
                format!("'{}' is not a valid strftime pattern", self.date_format),
            ));
        }
        Ok(())
    }
}

/// A key of the `[preferences]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Mapping,
    Indent,
    Header,
    Author,
    Company,
    Project,
    DateFormat,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 7] = [
        PreferenceKey::Mapping,
        PreferenceKey::Indent,
        PreferenceKey::Header,
        PreferenceKey::Author,
        PreferenceKey::Company,
        PreferenceKey::Project,
        PreferenceKey::DateFormat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Mapping => "mapping",
            PreferenceKey::Indent => "indent",
            PreferenceKey::Header => "header",
            PreferenceKey::Author => "author",
            PreferenceKey::Company => "company",
            PreferenceKey::Project => "project",
            PreferenceKey::DateFormat => "date_format",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PreferenceKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown preference '{}', expected one of: mapping, indent, header, author, company, project, date_format",
                    s
                )
            })
    }
}

/// Parse rosetta.toml content (uses "rosetta.toml" as filename)
pub fn parse_str(content: &str) -> Result<Config> {
    parse_str_with_filename(content, "rosetta.toml")
}

/// Parse rosetta.toml content with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    config.preferences.validate(&ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_str("").unwrap();
        assert_eq!(config.preferences, Preferences::default());
        assert_eq!(config.preferences.indent, 4);
        assert!(config.preferences.header);
    }

    #[test]
    fn test_partial_preferences() {
        let config = parse_str(
            r#"
            [preferences]
            mapping = "objectmapper"
            indent = 2
            author = "Jane Doe"
            "#,
        )
        .unwrap();

        let prefs = &config.preferences;
        assert_eq!(prefs.mapping, MappingMode::ObjectMapper);
        assert_eq!(prefs.indent, 2);
        assert_eq!(prefs.author, "Jane Doe");
        assert_eq!(prefs.company, "");
        assert_eq!(prefs.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_unknown_mapping_is_a_parse_error() {
        let err = parse_str("[preferences]\nmapping = \"codable\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = parse_str("[preferences]\ncolour = true\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_zero_indent_is_rejected() {
        let src = "[preferences]\nindent = 0\n";
        let err = parse_str(src).unwrap_err();

        match *err {
            Error::Validation { span, .. } => {
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "indent = 0");
            }
            _ => panic!("expected a validation error"),
        }
    }

    #[test]
    fn test_bad_date_format_is_rejected() {
        let err = parse_str("[preferences]\ndate_format = \"%Q\"\n").unwrap_err();
        assert!(err.to_string().contains("not a valid strftime pattern"));
    }

    #[test]
    fn test_generation_config() {
        let prefs = Preferences {
            mapping: MappingMode::Gloss,
            indent: 3,
            header: false,
            author: "Jane".to_string(),
            company: "Acme".to_string(),
            project: "Petstore".to_string(),
            date_format: "%Y".to_string(),
        };
        let config = prefs.generation_config();

        assert_eq!(config.mapping, MappingMode::Gloss);
        assert_eq!(config.indent.width(), 3);
        assert!(!config.add_header_comment);
        assert_eq!(config.author, "Jane");
        assert_eq!(config.company, "Acme");
        assert_eq!(config.project, "Petstore");
        assert_eq!(config.date_format, "%Y");
    }

    #[test]
    fn test_set_and_get() {
        let mut prefs = Preferences::default();

        prefs.set(PreferenceKey::Mapping, "ObjectMapper").unwrap();
        prefs.set(PreferenceKey::Indent, "2").unwrap();
        prefs.set(PreferenceKey::Header, "false").unwrap();
        prefs.set(PreferenceKey::Company, "Acme Inc").unwrap();

        assert_eq!(prefs.get(PreferenceKey::Mapping), "objectmapper");
        assert_eq!(prefs.get(PreferenceKey::Indent), "2");
        assert_eq!(prefs.get(PreferenceKey::Header), "false");
        assert_eq!(prefs.get(PreferenceKey::Company), "Acme Inc");
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut prefs = Preferences::default();

        assert!(prefs.set(PreferenceKey::Indent, "0").is_err());
        assert!(prefs.set(PreferenceKey::Indent, "four").is_err());
        assert!(prefs.set(PreferenceKey::Header, "yes").is_err());
        assert!(prefs.set(PreferenceKey::Mapping, "codable").is_err());
        assert!(prefs.set(PreferenceKey::DateFormat, "%Q").is_err());
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!(
            "date_format".parse::<PreferenceKey>().unwrap(),
            PreferenceKey::DateFormat
        );
        assert!("colour".parse::<PreferenceKey>().is_err());
        for key in PreferenceKey::ALL {
            assert_eq!(key.to_string().parse::<PreferenceKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = Config::default();
        config.preferences.set(PreferenceKey::Author, "Jane \"JD\" Doe").unwrap();

        let content = config.to_toml().unwrap();
        assert!(content.contains("[preferences]"));
        assert_eq!(parse_str(&content).unwrap(), config);
    }
}
