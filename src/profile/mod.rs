//! Stat profiles: per-tier baselines, roll ranges and selection weights
//!
//! A profile is immutable configuration. Two shapes ship with the crate:
//! the tiered table where every tier has its own baselines, and the plain
//! table where baselines are shared and only the roll ranges change.

pub mod loader;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{ForgeError, Result};
use crate::core::types::Tier;
use crate::entity::Archetype;

/// Half-open integer range `[min, max)` a stat roll is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value < self.max
    }

    /// Draw uniformly from the range. The range must not be empty.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..self.max)
    }

    /// The range shifted by a baseline, i.e. the bounds of a composed stat
    pub fn offset(&self, base: u32) -> RollRange {
        RollRange::new(base.saturating_add(self.min), base.saturating_add(self.max))
    }
}

impl From<[u32; 2]> for RollRange {
    fn from([min, max]: [u32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<RollRange> for [u32; 2] {
    fn from(range: RollRange) -> Self {
        [range.min, range.max]
    }
}

/// Baseline and roll ranges of one archetype within one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    pub archetype: Archetype,
    pub base_hp: u32,
    pub base_attack: u32,
    pub hp_roll: RollRange,
    pub attack_roll: RollRange,
    /// Selection weight; when every entry in a tier omits it, selection is uniform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl ArchetypeStats {
    /// Bounds of the final HP value, `[base + min, base + max)`
    pub fn hp_bounds(&self) -> RollRange {
        self.hp_roll.offset(self.base_hp)
    }

    /// Bounds of the final attack value
    pub fn attack_bounds(&self) -> RollRange {
        self.attack_roll.offset(self.base_attack)
    }

    fn validate(&self, tier: Tier) -> Result<()> {
        let ctx = format!("{}/{}", tier, self.archetype);
        for (stat, base, range) in [
            ("hp", self.base_hp, self.hp_roll),
            ("attack", self.base_attack, self.attack_roll),
        ] {
            if range.is_empty() {
                return Err(ForgeError::InvalidProfile(format!(
                    "{}: {} roll range [{}, {}) is empty",
                    ctx, stat, range.min, range.max
                )));
            }
            if base.checked_add(range.max).is_none() {
                return Err(ForgeError::InvalidProfile(format!(
                    "{}: {} baseline plus roll overflows",
                    ctx, stat
                )));
            }
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ForgeError::InvalidProfile(format!(
                    "{}: weight {} must be finite and non-negative",
                    ctx, weight
                )));
            }
        }
        Ok(())
    }
}

/// Everything the factory needs to generate entities for one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub tier: Tier,
    /// Ordered: selection ties resolve toward earlier entries
    pub archetypes: Vec<ArchetypeStats>,
}

impl TierProfile {
    pub fn stats_for(&self, archetype: Archetype) -> Option<&ArchetypeStats> {
        self.archetypes.iter().find(|s| s.archetype == archetype)
    }

    /// (entry, weight) pairs in declaration order, ready for weighted selection
    pub fn candidates(&self) -> Vec<(&ArchetypeStats, Option<f64>)> {
        self.archetypes.iter().map(|s| (s, s.weight)).collect()
    }

    fn validate(&self) -> Result<()> {
        if self.archetypes.is_empty() {
            return Err(ForgeError::InvalidProfile(format!(
                "tier {} has no archetypes",
                self.tier
            )));
        }
        for (i, stats) in self.archetypes.iter().enumerate() {
            if self.archetypes[..i].iter().any(|s| s.archetype == stats.archetype) {
                return Err(ForgeError::InvalidProfile(format!(
                    "tier {} lists {} twice",
                    self.tier, stats.archetype
                )));
            }
            stats.validate(self.tier)?;
        }

        let weighted = self.archetypes.iter().filter(|s| s.weight.is_some()).count();
        if weighted != 0 && weighted != self.archetypes.len() {
            return Err(ForgeError::InvalidProfile(format!(
                "tier {} mixes weighted and unweighted archetypes",
                self.tier
            )));
        }
        let total: f64 = self.archetypes.iter().filter_map(|s| s.weight).sum();
        if !total.is_finite() {
            return Err(ForgeError::InvalidProfile(format!(
                "tier {} weights sum past the representable range",
                self.tier
            )));
        }
        if weighted != 0 && self.archetypes.iter().all(|s| s.weight == Some(0.0)) {
            return Err(ForgeError::InvalidProfile(format!(
                "tier {} has only zero weights",
                self.tier
            )));
        }
        Ok(())
    }
}

/// Complete generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatProfile {
    pub name: String,
    pub tiers: Vec<TierProfile>,
}

impl StatProfile {
    /// Per-tier baselines: normal and hard have their own infantry and tank
    pub fn tiered() -> Self {
        Self {
            name: "tiered".into(),
            tiers: vec![
                TierProfile {
                    tier: Tier::Normal,
                    archetypes: vec![
                        stats(Archetype::Infantry, 100, 25, [50, 100], [10, 20], None),
                        stats(Archetype::Tank, 500, 50, [100, 250], [30, 60], None),
                    ],
                },
                TierProfile {
                    tier: Tier::Hard,
                    archetypes: vec![
                        stats(Archetype::Infantry, 200, 50, [150, 250], [30, 60], Some(0.3)),
                        stats(Archetype::Tank, 750, 100, [250, 400], [50, 100], Some(0.7)),
                    ],
                },
            ],
        }
    }

    /// Shared baselines, one combined roll range per tier
    pub fn plain() -> Self {
        Self {
            name: "plain".into(),
            tiers: vec![
                TierProfile {
                    tier: Tier::Normal,
                    archetypes: vec![
                        stats(Archetype::Infantry, 100, 25, [50, 100], [10, 30], None),
                        stats(Archetype::Tank, 500, 50, [50, 100], [10, 30], None),
                    ],
                },
                TierProfile {
                    tier: Tier::Hard,
                    archetypes: vec![
                        stats(Archetype::Infantry, 100, 25, [100, 200], [30, 50], Some(0.3)),
                        stats(Archetype::Tank, 500, 50, [100, 200], [30, 50], Some(0.7)),
                    ],
                },
            ],
        }
    }

    pub fn tier(&self, tier: Tier) -> Option<&TierProfile> {
        self.tiers.iter().find(|t| t.tier == tier)
    }

    /// Configured tiers in declaration order
    pub fn configured_tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        self.tiers.iter().map(|t| t.tier)
    }

    /// Check every tier for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (i, tier) in self.tiers.iter().enumerate() {
            if self.tiers[..i].iter().any(|t| t.tier == tier.tier) {
                return Err(ForgeError::InvalidProfile(format!(
                    "tier {} defined twice",
                    tier.tier
                )));
            }
            tier.validate()?;
        }
        Ok(())
    }
}

impl Default for StatProfile {
    fn default() -> Self {
        Self::tiered()
    }
}

fn stats(
    archetype: Archetype,
    base_hp: u32,
    base_attack: u32,
    hp_roll: [u32; 2],
    attack_roll: [u32; 2],
    weight: Option<f64>,
) -> ArchetypeStats {
    ArchetypeStats {
        archetype,
        base_hp,
        base_attack,
        hp_roll: hp_roll.into(),
        attack_roll: attack_roll.into(),
        weight,
    }
}
