//! Procedural entity generation
//!
//! For a tier, pick an archetype by weight, roll HP and attack inside the
//! archetype's ranges and add them to its baseline.

use rand::Rng;

use crate::core::config;
use crate::core::error::{ForgeError, Result};
use crate::core::types::Tier;
use crate::entity::Entity;
use crate::profile::{ArchetypeStats, StatProfile, TierProfile};
use crate::spawn::selector::WeightedSelector;

/// Creates entities from a stat profile
///
/// The factory holds no mutable state; the only thing consumed per call is
/// entropy from the caller's random source.
#[derive(Debug, Clone, Copy)]
pub struct EntityFactory<'p> {
    profile: &'p StatProfile,
}

impl EntityFactory<'static> {
    /// Factory over the process-wide profile
    pub fn global() -> Result<Self> {
        Self::new(config::profile())
    }
}

impl<'p> EntityFactory<'p> {
    /// Validate `profile` and build a factory over it
    ///
    /// Every roll range is non-empty and every baseline plus roll fits in
    /// `u32` once this succeeds, so generation itself cannot fail on them.
    pub fn new(profile: &'p StatProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &'p StatProfile {
        self.profile
    }

    /// Create a single entity for `tier`
    pub fn create_one(&self, tier: Tier, rng: &mut impl Rng) -> Result<Entity> {
        let selector = self.selector(tier)?;
        Ok(roll_entity(selector.pick(rng), tier, rng))
    }

    /// Create `count` independent entities for `tier`
    ///
    /// The tier is resolved before any draw, so an unknown tier never yields
    /// a partial batch. `count == 0` returns an empty vector.
    pub fn create_many(&self, tier: Tier, count: usize, rng: &mut impl Rng) -> Result<Vec<Entity>> {
        let selector = self.selector(tier)?;
        let entities: Vec<Entity> = (0..count)
            .map(|_| roll_entity(selector.pick(rng), tier, rng))
            .collect();
        tracing::debug!(tier = %tier, count, "Created entity batch");
        Ok(entities)
    }

    fn tier_profile(&self, tier: Tier) -> Result<&'p TierProfile> {
        self.profile.tier(tier).ok_or(ForgeError::UnknownTier(tier))
    }

    fn selector(&self, tier: Tier) -> Result<WeightedSelector<&'p ArchetypeStats>> {
        WeightedSelector::new(&self.tier_profile(tier)?.candidates())
    }
}

/// Roll both stats and compose them with the archetype baseline
fn roll_entity(stats: &ArchetypeStats, tier: Tier, rng: &mut impl Rng) -> Entity {
    let hp_roll = stats.hp_roll.roll(rng);
    let attack_roll = stats.attack_roll.roll(rng);
    let entity = Entity::new(
        stats.archetype,
        tier,
        stats.base_hp + hp_roll,
        stats.base_attack + attack_roll,
    );
    tracing::debug!(
        archetype = %stats.archetype,
        hp_roll,
        attack_roll,
        "Rolled {}",
        entity.status()
    );
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Archetype;
    use crate::profile::RollRange;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_within_profile(profile: &StatProfile, entity: &Entity) {
        let stats = profile
            .tier(entity.tier)
            .and_then(|t| t.stats_for(entity.archetype))
            .expect("entity archetype configured for its tier");
        assert!(stats.hp_bounds().contains(entity.hp), "hp out of range: {:?}", entity);
        assert!(
            stats.attack_bounds().contains(entity.attack),
            "attack out of range: {:?}",
            entity
        );
    }

    #[test]
    fn test_create_one_within_bounds() {
        let profile = StatProfile::tiered();
        let factory = EntityFactory::new(&profile).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for tier in [Tier::Normal, Tier::Hard] {
            for _ in 0..500 {
                let entity = factory.create_one(tier, &mut rng).unwrap();
                assert_eq!(entity.tier, tier);
                assert_within_profile(&profile, &entity);
            }
        }
    }

    #[test]
    fn test_create_many_counts() {
        let profile = StatProfile::plain();
        let factory = EntityFactory::new(&profile).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        assert!(factory.create_many(Tier::Normal, 0, &mut rng).unwrap().is_empty());
        assert_eq!(factory.create_many(Tier::Hard, 17, &mut rng).unwrap().len(), 17);
    }

    #[test]
    fn test_unknown_tier() {
        let profile = StatProfile::tiered();
        let factory = EntityFactory::new(&profile).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        assert!(matches!(
            factory.create_one(Tier::Nightmare, &mut rng),
            Err(ForgeError::UnknownTier(Tier::Nightmare))
        ));
        assert!(matches!(
            factory.create_many(Tier::Nightmare, 0, &mut rng),
            Err(ForgeError::UnknownTier(_))
        ));
    }

    #[test]
    fn test_unvalidated_profile_rejected() {
        let mut profile = StatProfile::tiered();
        for stats in &mut profile.tiers[0].archetypes {
            stats.hp_roll = RollRange::new(10, 10);
        }

        assert!(matches!(
            EntityFactory::new(&profile),
            Err(ForgeError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_overflowing_baseline_rejected() {
        let mut profile = StatProfile::tiered();
        profile.tiers[1].archetypes[1].base_hp = u32::MAX;

        assert!(matches!(
            EntityFactory::new(&profile),
            Err(ForgeError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let profile = StatProfile::tiered();
        let factory = EntityFactory::new(&profile).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let first = factory.create_many(Tier::Hard, 20, &mut rng).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let second = factory.create_many(Tier::Hard, 20, &mut rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_hard_tier_favors_tanks() {
        let profile = StatProfile::tiered();
        let factory = EntityFactory::new(&profile).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let batch = factory.create_many(Tier::Hard, 2000, &mut rng).unwrap();
        let infantry = batch.iter().filter(|e| e.archetype == Archetype::Infantry).count();
        let freq = infantry as f64 / batch.len() as f64;
        assert!((freq - 0.3).abs() < 0.05, "observed {}", freq);
    }

    #[test]
    fn test_global_factory_uses_tiered_profile() {
        let factory = EntityFactory::global().unwrap();
        assert!(factory.profile().tier(Tier::Hard).is_some());
    }
}
