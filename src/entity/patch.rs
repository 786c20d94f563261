//! Partial overrides applied to cloned entities

use serde::{Deserialize, Serialize};

use crate::core::error::{ForgeError, Result};
use crate::core::types::Tier;
use crate::entity::archetype::Archetype;
use crate::entity::enemy::Entity;
use crate::prototype::fields::{self, FieldMap};
use crate::prototype::Prototype;

/// Optional replacement for each [`Entity`] field
///
/// `None` leaves the cloned value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityPatch {
    pub archetype: Option<Archetype>,
    pub tier: Option<Tier>,
    pub hp: Option<u32>,
    pub attack: Option<u32>,
}

impl EntityPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Parse a dynamic field map, rejecting keys that are not entity fields
    pub fn from_fields(map: &FieldMap) -> Result<Self> {
        let mut patch = Self::default();
        for (field, value) in map {
            match field.as_str() {
                "archetype" => {
                    let id = fields::as_str(field, value)?;
                    patch.archetype = Some(Archetype::from_id(id).ok_or_else(|| {
                        ForgeError::InvalidFieldValue {
                            field: field.clone(),
                            expected: "archetype id",
                        }
                    })?);
                }
                "tier" => {
                    let id = fields::as_str(field, value)?;
                    patch.tier = Some(Tier::from_id(id).ok_or_else(|| {
                        ForgeError::InvalidFieldValue {
                            field: field.clone(),
                            expected: "tier id",
                        }
                    })?);
                }
                "hp" => patch.hp = Some(fields::as_u32(field, value)?),
                "attack" => patch.attack = Some(fields::as_u32(field, value)?),
                _ => return Err(ForgeError::UnknownField(field.clone())),
            }
        }
        Ok(patch)
    }
}

impl Prototype for Entity {
    type Patch = EntityPatch;

    fn apply_patch(&mut self, patch: &EntityPatch) {
        if let Some(archetype) = patch.archetype {
            self.archetype = archetype;
        }
        if let Some(tier) = patch.tier {
            self.tier = tier;
        }
        if let Some(hp) = patch.hp {
            self.hp = hp;
        }
        if let Some(attack) = patch.attack {
            self.attack = attack;
        }
    }

    fn patch_from_fields(fields: &FieldMap) -> Result<EntityPatch> {
        EntityPatch::from_fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_map(value: serde_json::Value) -> FieldMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_apply_patch_only_touches_named_fields() {
        let mut entity = Entity::new(Archetype::Infantry, Tier::Normal, 120, 30);
        entity.apply_patch(&EntityPatch::new().hp(999));

        assert_eq!(entity, Entity::new(Archetype::Infantry, Tier::Normal, 999, 30));
    }

    #[test]
    fn test_from_fields_parses_all_fields() {
        let map = field_map(json!({
            "archetype": "tank",
            "tier": "hard",
            "hp": 800,
            "attack": 90,
        }));

        let patch = EntityPatch::from_fields(&map).unwrap();
        assert_eq!(
            patch,
            EntityPatch::new()
                .archetype(Archetype::Tank)
                .tier(Tier::Hard)
                .hp(800)
                .attack(90)
        );
    }

    #[test]
    fn test_from_fields_rejects_unknown_key() {
        let map = field_map(json!({ "hp": 10, "mana": 5 }));

        let err = EntityPatch::from_fields(&map).unwrap_err();
        assert!(matches!(err, ForgeError::UnknownField(ref f) if f == "mana"));
    }

    #[test]
    fn test_from_fields_rejects_wrong_type() {
        let map = field_map(json!({ "hp": "lots" }));
        assert!(matches!(
            EntityPatch::from_fields(&map),
            Err(ForgeError::InvalidFieldValue { .. })
        ));

        let map = field_map(json!({ "archetype": "dragon" }));
        assert!(matches!(
            EntityPatch::from_fields(&map),
            Err(ForgeError::InvalidFieldValue { .. })
        ));
    }

    #[test]
    fn test_empty_map_is_empty_patch() {
        let patch = EntityPatch::from_fields(&FieldMap::new()).unwrap();
        assert!(patch.is_empty());
    }
}
