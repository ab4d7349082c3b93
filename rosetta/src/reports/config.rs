//! Config command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data listing preferences.
#[derive(Debug)]
pub struct ConfigReport {
    pub path: PathBuf,
    /// Preference names and values, in file order.
    pub entries: Vec<(String, String)>,
}

impl Report for ConfigReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Preferences", &self.path.display().to_string());
        for (key, value) in &self.entries {
            out.key_value_indented(key, value);
        }
    }
}
