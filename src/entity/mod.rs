pub mod archetype;
pub mod builder;
pub mod enemy;
pub mod patch;

pub use archetype::Archetype;
pub use builder::EntityBuilder;
pub use enemy::Entity;
pub use patch::EntityPatch;
