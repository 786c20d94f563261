//! Enemy Forge - Procedural and prototype-based enemy provisioning

pub mod core;
pub mod entity;
pub mod profile;
pub mod prototype;
pub mod spawn;

pub use crate::core::{ForgeError, Result, Tier};
pub use crate::entity::{Archetype, Entity, EntityBuilder, EntityPatch};
pub use crate::profile::StatProfile;
pub use crate::prototype::{Prototype, PrototypeRegistry};
pub use crate::spawn::{EntityFactory, WeightedSelector};
