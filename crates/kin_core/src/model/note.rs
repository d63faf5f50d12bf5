//! Note record.

use super::task::TaskId;
use super::{now_epoch_ms, require_text, ModelValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NoteId = Uuid;

/// Free-text note attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub uuid: NoteId,
    pub task_id: TaskId,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    pub fn new(task_id: TaskId, content: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            uuid: Uuid::new_v4(),
            task_id,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Human-readable label, rendered against the owning task title.
    pub fn label(&self, task_title: &str) -> String {
        format!("Note for {task_title}")
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("content", &self.content, usize::MAX)
    }
}
