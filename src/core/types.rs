//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier
///
/// Not every tier has to be configured in a profile. `Nightmare` is absent
/// from the bundled tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Normal,
    Hard,
    Nightmare,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Normal, Tier::Hard, Tier::Nightmare];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Nightmare => "nightmare",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Nightmare => "Nightmare",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(&s.to_ascii_lowercase()).ok_or_else(|| format!("unknown tier '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Tier>(), Ok(Tier::Hard));
        assert_eq!("normal".parse::<Tier>(), Ok(Tier::Normal));
        assert!("easy".parse::<Tier>().is_err());
    }

    #[test]
    fn test_tier_serde_uses_snake_case() {
        let json = serde_json::to_string(&Tier::Nightmare).unwrap();
        assert_eq!(json, "\"nightmare\"");
    }
}
