//! Comment records cloned from a blank template

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{ForgeError, Result};
use crate::prototype::fields::{self, FieldMap};
use crate::prototype::Prototype;

/// A user comment as fetched from a feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub username: String,
    pub text: String,
}

impl Comment {
    pub fn new(id: u64, username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.username, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommentPatch {
    pub id: Option<u64>,
    pub username: Option<String>,
    pub text: Option<String>,
}

impl Prototype for Comment {
    type Patch = CommentPatch;

    fn apply_patch(&mut self, patch: &CommentPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
    }

    fn patch_from_fields(map: &FieldMap) -> Result<CommentPatch> {
        let mut patch = CommentPatch::default();
        for (field, value) in map {
            match field.as_str() {
                "id" => patch.id = Some(fields::as_u64(field, value)?),
                "username" => patch.username = Some(fields::as_str(field, value)?.to_string()),
                "text" => patch.text = Some(fields::as_str(field, value)?.to_string()),
                _ => return Err(ForgeError::UnknownField(field.clone())),
            }
        }
        Ok(patch)
    }
}
