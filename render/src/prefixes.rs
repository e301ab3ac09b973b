//! The prefix table consumed by the link classifier.
//!
//! The table is produced server-side and shipped as JSON of the form
//! `{"hydra": {"url": "http://www.w3.org/ns/hydra/core#", "external": true}}`.
//! This crate only consumes it.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{RenderError, Result};

/// One prefix registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrefixEntry {
    /// Namespace URL the label expands to.
    pub url: String,
    /// True when the namespace documents an external vocabulary; external
    /// entries render as definition links opening in a new tab.
    #[serde(default)]
    pub external: bool,
}

/// Prefix label → entry map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PrefixTable {
    entries: HashMap<String, PrefixEntry>,
}

impl PrefixTable {
    /// Parses the JSON prefix table.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PrefixTable`] when the JSON is malformed or
    /// does not have the label → `{url, external}` shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(RenderError::from)
    }

    /// Entry registered for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&PrefixEntry> {
        self.entries.get(label)
    }

    /// Registers `entry` under `label`, replacing any earlier registration.
    pub fn insert(&mut self, label: impl Into<String>, entry: PrefixEntry) {
        self.entries.insert(label.into(), entry);
    }

    /// Number of registered labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no label is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
