//! Core operations.
//!
//! This module contains the business logic for rosetta commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod config;
pub mod generate;
pub mod input;

pub use check::check;
pub use config::config;
pub use generate::{GenerateOptions, generate};
pub use input::read_input;
