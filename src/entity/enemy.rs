//! The entity value produced by both the factory and the prototype registry

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Tier;
use crate::entity::archetype::Archetype;
use crate::entity::builder::EntityBuilder;

/// A fully formed game entity
///
/// Created once and never mutated by the crate. Stats are final values
/// (baseline plus roll), not deltas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub archetype: Archetype,
    pub tier: Tier,
    pub hp: u32,
    pub attack: u32,
}

impl Entity {
    pub fn new(archetype: Archetype, tier: Tier, hp: u32, attack: u32) -> Self {
        Self {
            archetype,
            tier,
            hp,
            attack,
        }
    }

    /// Start a builder for an entity of this archetype and tier
    pub fn builder(archetype: Archetype, tier: Tier) -> EntityBuilder {
        EntityBuilder::new(archetype, tier)
    }

    /// "Tank(Hard)" style name used in reports
    pub fn display_name(&self) -> String {
        format!("{}({})", self.archetype.label(), self.tier.label())
    }

    /// Report of this entity's attack
    pub fn attack(&self) -> String {
        format!("{} attacks and dealt damage {}", self.display_name(), self.attack)
    }

    /// Report of this entity's current stats
    pub fn status(&self) -> String {
        format!("{} HP: {}, Attk: {}", self.display_name(), self.hp, self.attack)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status())
    }
}
