//! Task management domain model.
//!
//! # Responsibility
//! - Define the five record shapes (category, priority, task, subtask, note).
//! - Apply creation defaults and validate field limits before persistence.
//!
//! # Invariants
//! - Every record is identified by a stable UUID that is never reused.
//! - `created_at`/`updated_at` are epoch milliseconds set on construction.
//! - Deletion is hard delete; child rows go with their parent.

use chrono::Utc;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category;
pub mod note;
pub mod priority;
pub mod subtask;
pub mod task;

pub const NAME_MAX_CHARS: usize = 100;
pub const TITLE_MAX_CHARS: usize = 200;
pub const COLOR_MAX_CHARS: usize = 20;

/// Field-level validation failure for a model record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// A required text field is empty or whitespace only.
    EmptyField(&'static str),
    /// A bounded text field exceeds its character limit.
    TooLong {
        field: &'static str,
        max_chars: usize,
        actual_chars: usize,
    },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "field `{field}` must not be empty"),
            Self::TooLong {
                field,
                max_chars,
                actual_chars,
            } => write!(
                f,
                "field `{field}` has {actual_chars} chars, limit is {max_chars}"
            ),
        }
    }
}

impl Error for ModelValidationError {}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ModelValidationError> {
    if value.trim().is_empty() {
        return Err(ModelValidationError::EmptyField(field));
    }
    limit_text(field, value, max_chars)
}

pub(crate) fn limit_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ModelValidationError> {
    let actual_chars = value.chars().count();
    if actual_chars > max_chars {
        return Err(ModelValidationError::TooLong {
            field,
            max_chars,
            actual_chars,
        });
    }
    Ok(())
}
