//! Priority record.

use super::{
    limit_text, now_epoch_ms, require_text, ModelValidationError, COLOR_MAX_CHARS, NAME_MAX_CHARS,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type PriorityId = Uuid;

/// Urgency level attached to a task, with an optional display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub uuid: PriorityId,
    /// Display label, e.g. `High`.
    pub name: String,
    /// Hex color such as `#F44336`; free-form, not parsed.
    pub color: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Priority {
    pub fn new(name: impl Into<String>, color: Option<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            color,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("name", &self.name, NAME_MAX_CHARS)?;
        if let Some(color) = self.color.as_deref() {
            limit_text("color", color, COLOR_MAX_CHARS)?;
        }
        Ok(())
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
