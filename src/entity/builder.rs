//! Chained construction of entities

use crate::core::types::Tier;
use crate::entity::archetype::Archetype;
use crate::entity::enemy::Entity;
use crate::profile::{ArchetypeStats, StatProfile};

/// Fluent builder over an [`Entity`]
///
/// Every setter consumes and returns the builder so calls can be chained.
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    /// Empty stats for the given archetype and tier
    pub fn new(archetype: Archetype, tier: Tier) -> Self {
        Self {
            entity: Entity::new(archetype, tier, 0, 0),
        }
    }

    /// Start from the unrolled baseline of a profile entry
    pub fn from_stats(stats: &ArchetypeStats, tier: Tier) -> Self {
        Self::new(stats.archetype, tier)
            .hp(stats.base_hp)
            .attack(stats.base_attack)
    }

    /// Normal-tier infantry at its tiered baseline
    pub fn infantry() -> Self {
        Self::preset(Archetype::Infantry)
    }

    /// Normal-tier tank at its tiered baseline
    pub fn tank() -> Self {
        Self::preset(Archetype::Tank)
    }

    fn preset(archetype: Archetype) -> Self {
        let profile = StatProfile::tiered();
        match profile
            .tier(Tier::Normal)
            .and_then(|t| t.stats_for(archetype))
        {
            Some(stats) => Self::from_stats(stats, Tier::Normal),
            None => Self::new(archetype, Tier::Normal),
        }
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.entity.archetype = archetype;
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.entity.tier = tier;
        self
    }

    pub fn hp(mut self, hp: u32) -> Self {
        self.entity.hp = hp;
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.entity.attack = attack;
        self
    }

    pub fn build(self) -> Entity {
        self.entity
    }
}

impl From<Entity> for EntityBuilder {
    fn from(entity: Entity) -> Self {
        Self { entity }
    }
}
