//! Subtask record.

use super::task::{TaskId, TaskStatus};
use super::{now_epoch_ms, require_text, ModelValidationError, TITLE_MAX_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type SubTaskId = Uuid;

/// Checklist item owned by one parent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub uuid: SubTaskId,
    pub title: String,
    pub status: TaskStatus,
    pub completed: bool,
    pub parent_task_id: TaskId,
    pub created_at: i64,
    pub updated_at: i64,
}

impl SubTask {
    pub fn new(title: impl Into<String>, parent_task_id: TaskId) -> Self {
        let now = now_epoch_ms();
        Self {
            uuid: Uuid::new_v4(),
            title: title.into(),
            status: TaskStatus::default(),
            completed: false,
            parent_task_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the completion flag and keeps `status` in agreement with it.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self.status = TaskStatus::from_completed(completed);
        self
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("title", &self.title, TITLE_MAX_CHARS)
    }
}

impl Display for SubTask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
