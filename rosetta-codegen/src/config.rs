//! Per-invocation generation settings.

use std::{fmt, fmt::Write as _, str::FromStr};

use chrono::{
    Datelike, Local, NaiveDate,
    format::{Item, StrftimeItems},
};
use serde::{Deserialize, Serialize};

use crate::Indent;

/// Short date style used in file headers (`25/08/2016`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Whether `format` is a strftime pattern chrono can render.
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Strategy used to decode dictionary values into typed properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Hand-written branch-per-field mapping.
    #[default]
    Manual,
    /// Reflection-style declarative binding through ObjectMapper.
    #[serde(alias = "object-mapper")]
    ObjectMapper,
    /// Reserved, generated as [`MappingMode::Manual`].
    SwiftyJson,
    /// Reserved, generated as [`MappingMode::Manual`].
    Freddy,
    /// Reserved, generated as [`MappingMode::Manual`].
    Gloss,
}

impl MappingMode {
    pub const ALL: [MappingMode; 5] = [
        MappingMode::Manual,
        MappingMode::ObjectMapper,
        MappingMode::SwiftyJson,
        MappingMode::Freddy,
        MappingMode::Gloss,
    ];

    /// Returns the mode identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingMode::Manual => "manual",
            MappingMode::ObjectMapper => "objectmapper",
            MappingMode::SwiftyJson => "swiftyjson",
            MappingMode::Freddy => "freddy",
            MappingMode::Gloss => "gloss",
        }
    }

    /// Human readable name, as offered in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            MappingMode::Manual => "Manual",
            MappingMode::ObjectMapper => "ObjectMapper",
            MappingMode::SwiftyJson => "SwiftyJSON (coming soon)",
            MappingMode::Freddy => "Freddy (coming soon)",
            MappingMode::Gloss => "Gloss (coming soon)",
        }
    }

    /// Reserved modes are generated with manual mapping.
    pub fn is_implemented(&self) -> bool {
        matches!(self, MappingMode::Manual | MappingMode::ObjectMapper)
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MappingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(MappingMode::Manual),
            "objectmapper" | "object-mapper" => Ok(MappingMode::ObjectMapper),
            "swiftyjson" => Ok(MappingMode::SwiftyJson),
            "freddy" => Ok(MappingMode::Freddy),
            "gloss" => Ok(MappingMode::Gloss),
            _ => Err(format!(
                "unknown mapping mode '{}', expected one of: manual, objectmapper, swiftyjson, freddy, gloss",
                s
            )),
        }
    }
}

/// Everything the emitter needs besides the model itself.
///
/// Supplied by the caller for every invocation; the header date is part of
/// the config so identical inputs always render identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub mapping: MappingMode,
    pub indent: Indent,
    pub add_header_comment: bool,
    pub author: String,
    pub company: String,
    pub project: String,
    pub date: NaiveDate,
    /// strftime pattern for the "Created on" date.
    pub date_format: String,
}

impl GenerationConfig {
    /// Defaults: manual mapping, 4 spaces, header on, dated today.
    pub fn new() -> Self {
        Self {
            mapping: MappingMode::default(),
            indent: Indent::default(),
            add_header_comment: true,
            author: String::new(),
            company: String::new(),
            project: String::new(),
            date: Local::now().date_naive(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_mapping(mut self, mapping: MappingMode) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_header(mut self, add_header_comment: bool) -> Self {
        self.add_header_comment = add_header_comment;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// The header date rendered with `date_format`.
    ///
    /// An unusable pattern falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn formatted_date(&self) -> String {
        let mut out = String::new();
        match write!(out, "{}", self.date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => self.date.format(DEFAULT_DATE_FORMAT).to_string(),
        }
    }

    /// Year printed in the copyright line.
    pub fn copyright_year(&self) -> i32 {
        self.date.year()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            MappingMode::from_str("manual").unwrap(),
            MappingMode::Manual
        );
        assert_eq!(
            MappingMode::from_str("ObjectMapper").unwrap(),
            MappingMode::ObjectMapper
        );
        assert_eq!(
            MappingMode::from_str("object-mapper").unwrap(),
            MappingMode::ObjectMapper
        );
        assert_eq!(
            MappingMode::from_str("SwiftyJSON").unwrap(),
            MappingMode::SwiftyJson
        );
        assert!(MappingMode::from_str("codable").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in MappingMode::ALL {
            assert_eq!(MappingMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_reserved_modes() {
        assert!(MappingMode::Manual.is_implemented());
        assert!(MappingMode::ObjectMapper.is_implemented());
        assert!(!MappingMode::SwiftyJson.is_implemented());
        assert!(!MappingMode::Freddy.is_implemented());
        assert!(!MappingMode::Gloss.is_implemented());
    }

    #[test]
    fn test_deserialize() {
        let mode: MappingMode = serde_json::from_str(r#""objectmapper""#).unwrap();
        assert_eq!(mode, MappingMode::ObjectMapper);

        let mode: MappingMode = serde_json::from_str(r#""swiftyjson""#).unwrap();
        assert_eq!(mode, MappingMode::SwiftyJson);
    }

    #[test]
    fn test_header_date() {
        let config =
            GenerationConfig::new().with_date(NaiveDate::from_ymd_opt(2016, 8, 25).unwrap());

        assert_eq!(config.formatted_date(), "25/08/2016");
        assert_eq!(config.copyright_year(), 2016);

        let config = config.with_date_format("%Y-%m-%d");
        assert_eq!(config.formatted_date(), "2016-08-25");
        assert_eq!(config.copyright_year(), 2016);
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(!is_valid_date_format("%Q"));

        let config = GenerationConfig::new()
            .with_date(NaiveDate::from_ymd_opt(2016, 8, 25).unwrap())
            .with_date_format("%Q");
        assert_eq!(config.formatted_date(), "25/08/2016");
    }

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.mapping, MappingMode::Manual);
        assert_eq!(config.indent.width(), 4);
        assert!(config.add_header_comment);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }
}
