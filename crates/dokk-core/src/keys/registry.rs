use super::{EntityName, KeyPart};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::any::TypeId;

/// The set of entity tokens known to an application.
///
/// Built once at startup and used to decode raw keys read back from the
/// store into parts of a known entity.
#[derive(Debug, Default, Clone)]
pub struct EntityRegistry {
    entities: IndexMap<&'static str, TypeId>,
}

impl EntityRegistry {
    pub fn new() -> EntityRegistry {
        EntityRegistry::default()
    }

    /// Registers entity `E`.
    ///
    /// Fails if the token is invalid or already taken by another type.
    pub fn register<E: EntityName>(&mut self) -> Result<&mut Self> {
        if !super::is_valid_entity_name(E::NAME) {
            return Err(Error::validation_invalid_entity_name(E::NAME));
        }

        match self.entities.get(E::NAME) {
            Some(type_id) if *type_id != TypeId::of::<E>() => {
                Err(Error::validation_duplicate_entity(E::NAME))
            }
            _ => {
                self.entities.insert(E::NAME, TypeId::of::<E>());
                Ok(self)
            }
        }
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Registered tokens in registration order.
    pub fn entities(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entities.keys().copied()
    }

    /// Decodes a raw key, requiring its entity token to be registered.
    pub fn decode(&self, raw: &str) -> Result<KeyPart> {
        let part = KeyPart::decode(raw)?;

        match self.entities.get_key_value(part.entity()) {
            Some((entity, _)) => Ok(KeyPart::from_registered(
                entity,
                part.value().map(str::to_string),
            )),
            None => Err(Error::validation_unknown_entity(part.entity())),
        }
    }
}
