//! Task record and the status enum shared with subtasks.
//!
//! # Invariants
//! - `status` is one of the three persisted labels; no transition rules apply.
//! - `deadline` defaults to the construction time.
//! - `category_id`/`priority_id` must reference existing rows at insert time.

use super::category::CategoryId;
use super::priority::PriorityId;
use super::{now_epoch_ms, require_text, ModelValidationError, TITLE_MAX_CHARS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type TaskId = Uuid;

/// Progress state of a task or subtask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Label stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Maps a boolean completion flag onto the status enum.
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub uuid: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Epoch milliseconds.
    pub deadline: i64,
    pub due_date: Option<NaiveDate>,
    pub category_id: CategoryId,
    pub priority_id: PriorityId,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Task {
    /// Creates a pending task whose deadline is "now".
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category_id: CategoryId,
        priority_id: PriorityId,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            uuid: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::default(),
            deadline: now,
            due_date: None,
            category_id,
            priority_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("title", &self.title, TITLE_MAX_CHARS)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
