//! Config operation - preferences listing.

use rosetta_config::{PreferenceKey, RosettaToml};

use crate::reports::ConfigReport;

/// List every preference of `rosetta_toml`.
pub fn config(rosetta_toml: &RosettaToml) -> ConfigReport {
    let preferences = rosetta_toml.preferences();

    ConfigReport {
        path: rosetta_toml.path().to_path_buf(),
        entries: PreferenceKey::ALL
            .iter()
            .map(|key| (key.to_string(), preferences.get(*key)))
            .collect(),
    }
}
