//! Prototype registry
//!
//! Templates are registered under a name and later cloned into independent
//! copies with a patch applied. The registry knows nothing about the template
//! type beyond the [`Prototype`] trait, so entities and plain records such as
//! [`Comment`] share the same machinery.

pub mod comment;
pub mod fields;
pub mod registry;

pub use comment::{Comment, CommentPatch};
pub use fields::FieldMap;
pub use registry::PrototypeRegistry;

use crate::core::error::Result;

/// A type that can serve as a registry template
///
/// `Clone` must produce a deep copy: implementors hold only owned data, never
/// shared handles such as `Rc<RefCell<_>>`, so mutating a clone is never
/// observable through the template or another clone.
pub trait Prototype: Clone {
    /// Partial set of field replacements
    type Patch: Default;

    /// Replace the fields named by `patch`, leaving the others untouched
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Build a patch from a dynamic field map
    ///
    /// Fails with `UnknownField` for keys that are not declared fields and
    /// `InvalidFieldValue` for values of the wrong type.
    fn patch_from_fields(fields: &FieldMap) -> Result<Self::Patch>;
}
