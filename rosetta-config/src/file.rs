use std::path::{Path, PathBuf};

use rosetta_core::File;

use crate::{Config, Error, PreferenceKey, Preferences, Result, parse_str_with_filename};

/// Default name of the preferences file.
pub const CONFIG_FILE_NAME: &str = "rosetta.toml";

/// Represents a rosetta.toml file with both raw content and parsed config.
pub struct RosettaToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl RosettaToml {
    /// Open and parse a rosetta.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// A file at `path` holding `preferences`, not yet written.
    pub fn with_preferences(path: impl Into<PathBuf>, preferences: Preferences) -> Result<Self> {
        let config = Config { preferences };
        let content = config.to_toml()?;

        Ok(Self {
            path: path.into(),
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed preferences.
    pub fn preferences(&self) -> &Preferences {
        &self.config.preferences
    }

    /// Update one preference and regenerate the content.
    pub fn set(&mut self, key: PreferenceKey, value: &str) -> Result<()> {
        let mut config = self.config.clone();
        config.preferences.set(key, value)?;
        self.content = config.to_toml()?;
        self.config = config;
        Ok(())
    }

    /// Save the current content to disk.
    pub fn save(&self) -> Result<()> {
        File::new(&self.path, &self.content)
            .write()
            .map_err(|e| Box::new(Error::from(e)))?;
        Ok(())
    }
}
