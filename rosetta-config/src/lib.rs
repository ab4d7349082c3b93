//! Preferences store for the Rosetta model generator.
//!
//! Preferences live in a `rosetta.toml` file:
//!
//! ```toml
//! [preferences]
//! mapping = "objectmapper"
//! indent = 2
//! header = true
//! author = "Jane Doe"
//! company = "Acme"
//! project = "Petstore"
//! date_format = "%d/%m/%Y"
//! ```
//!
//! Every key is optional and falls back to its default.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod preferences;

pub use error::{Error, Result, SourceContext};
pub use file::{CONFIG_FILE_NAME, RosettaToml};
pub use preferences::{Config, PreferenceKey, Preferences, parse_str, parse_str_with_filename};
