//! Task aggregate and its creation payload.

use super::{BoardDomainError, Tag, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated payload for creating a task.
///
/// Carries everything a task needs except the identity and timestamp
/// the store stamps on at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    description: String,
    tag: Tag,
}

impl TaskDraft {
    /// Creates a draft, rejecting blank titles.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tag: Tag,
    ) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        if raw_title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self {
            title: raw_title,
            description: description.into(),
            tag,
        })
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the draft tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }
}

/// Task aggregate.
///
/// Identity and creation timestamp are fixed at creation; title,
/// description, and tag change through the builder-style `with_*`
/// methods, which always preserve both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    tag: Tag,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a draft, stamping a fresh identifier and the
    /// current clock time.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            tag: draft.tag,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the categorical tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the task with a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the task with a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the task with a replacement tag.
    #[must_use]
    pub const fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }
}
