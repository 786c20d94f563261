//! Procedural spawning: weighted archetype choice plus stat rolls

pub mod factory;
pub mod selector;

pub use factory::EntityFactory;
pub use selector::{select, WeightedSelector};
