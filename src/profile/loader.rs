//! Load stat profiles from TOML files

use std::path::Path;

use super::StatProfile;
use crate::core::error::Result;

impl StatProfile {
    /// Parse and validate a profile from TOML source
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: StatProfile = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a TOML file on disk
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded stat profile '{}' ({} tiers) from {}",
            profile.name,
            profile.tiers.len(),
            path.display()
        );
        Ok(profile)
    }
}
