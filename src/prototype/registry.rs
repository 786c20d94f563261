//! Named template storage and clone-with-patch.
//!
//! This module provides the `PrototypeRegistry` which owns template objects
//! and hands out independent copies with caller-supplied overrides applied.

use ahash::AHashMap;

use super::fields::FieldMap;
use super::Prototype;
use crate::core::error::{ForgeError, Result};

/// Registry for managing named templates
///
/// Each name maps to at most one template. Templates are owned by the
/// registry and live until unregistered or the registry is dropped.
#[derive(Debug)]
pub struct PrototypeRegistry<T: Prototype> {
    templates: AHashMap<String, T>,
}

impl<T: Prototype> PrototypeRegistry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            templates: AHashMap::new(),
        }
    }

    /// Store a template, replacing any template with the same name
    ///
    /// Returns the replaced template, if there was one.
    pub fn register(&mut self, name: impl Into<String>, template: T) -> Option<T> {
        let name = name.into();
        let previous = self.templates.insert(name.clone(), template);
        if previous.is_some() {
            tracing::warn!(template = %name, "Replaced existing template");
        } else {
            tracing::debug!(template = %name, "Registered template");
        }
        previous
    }

    /// Remove a template
    ///
    /// Removing a name that is not registered is a no-op and returns `None`.
    pub fn unregister(&mut self, name: &str) -> Option<T> {
        let removed = self.templates.remove(name);
        if removed.is_some() {
            tracing::debug!(template = %name, "Unregistered template");
        }
        removed
    }

    /// Deep-copy the template registered under `name` and apply `patch`
    pub fn clone(&self, name: &str, patch: &T::Patch) -> Result<T> {
        let template = self.lookup(name)?;
        let mut copy = template.clone();
        copy.apply_patch(patch);
        tracing::debug!(template = %name, "Cloned template");
        Ok(copy)
    }

    /// Like [`Self::clone`], with overrides given as a dynamic field map
    ///
    /// The map is fully validated before the template is copied.
    pub fn clone_with_fields(&self, name: &str, fields: &FieldMap) -> Result<T> {
        let template = self.lookup(name)?;
        let patch = T::patch_from_fields(fields)?;
        let mut copy = template.clone();
        copy.apply_patch(&patch);
        tracing::debug!(template = %name, overrides = fields.len(), "Cloned template");
        Ok(copy)
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<&T> {
        self.templates
            .get(name)
            .ok_or_else(|| ForgeError::NotFound(name.to_string()))
    }
}

impl<T: Prototype> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
