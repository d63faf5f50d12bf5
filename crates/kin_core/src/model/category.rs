//! Category record.

use super::{now_epoch_ms, require_text, ModelValidationError, NAME_MAX_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type CategoryId = Uuid;

/// Grouping label a task belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub uuid: CategoryId,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("name", &self.name, NAME_MAX_CHARS)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
