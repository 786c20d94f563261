//! Entity archetype definitions for procedural generation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity kind determining which baseline stats apply
///
/// The set is closed; per-tier numbers live in the stat profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Light foot soldier - low HP, low attack
    Infantry,
    /// Armored vehicle - high HP, high attack
    Tank,
}

impl Archetype {
    pub const ALL: [Archetype; 2] = [Archetype::Infantry, Archetype::Tank];

    /// Lowercase identifier used in profiles and override maps
    pub fn id(&self) -> &'static str {
        match self {
            Self::Infantry => "infantry",
            Self::Tank => "tank",
        }
    }

    /// Label used in attack/status reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Infantry => "Infantry",
            Self::Tank => "Tank",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
