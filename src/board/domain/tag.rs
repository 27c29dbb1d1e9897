//! Categorical task tags and the column-to-tag move policy.

use super::{ColumnId, ParseTagError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Categorical label carried by every task.
///
/// Presentation layers derive colour and priority semantics from this
/// same field; the store only ever reassigns it through a
/// [`TagPolicy`] during a cross-column move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Blue label.
    Blue,
    /// Green label.
    Green,
    /// Yellow label.
    Yellow,
    /// Purple label.
    Purple,
    /// Pink label.
    Pink,
    /// Orange label.
    Orange,
}

impl Tag {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Orange => "orange",
        }
    }
}

impl TryFrom<&str> for Tag {
    type Error = ParseTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "purple" => Ok(Self::Purple),
            "pink" => Ok(Self::Pink),
            "orange" => Ok(Self::Orange),
            _ => Err(ParseTagError(value.to_owned())),
        }
    }
}

/// Fixed mapping from destination column to the tag a moved task takes.
///
/// Models the "status via tag" convention: entering a column reassigns
/// the task's tag to the column's configured value. A column absent
/// from the table leaves tags untouched. The table is configuration
/// handed to the store, not logic baked into the move algorithm, so it
/// can be validated and tested on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagPolicy {
    entries: HashMap<ColumnId, Tag>,
}

impl TagPolicy {
    /// Creates an empty policy under which moves never retag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy from `(column, tag)` pairs.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (ColumnId, Tag)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parses a policy from a JSON object of column id to tag label.
    ///
    /// # Errors
    ///
    /// Returns the deserialisation error when the document is not an
    /// object or a value is not a known tag label.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the tag assigned to tasks entering the given column.
    #[must_use]
    pub fn tag_for(&self, column_id: &ColumnId) -> Option<Tag> {
        self.entries.get(column_id).copied()
    }

    /// Returns the number of configured columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the policy has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
