//! Task management data layer and sample-data seeding.
//!
//! Records (categories, priorities, tasks, subtasks, notes) live in SQLite;
//! [`SeedService`] fills an empty or partially filled database with
//! synthetic rows for development and demos.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryId};
pub use model::note::{Note, NoteId};
pub use model::priority::{Priority, PriorityId};
pub use model::subtask::{SubTask, SubTaskId};
pub use model::task::{Task, TaskId, TaskStatus};
pub use model::ModelValidationError;
pub use repo::category_repo::CategoryRepository;
pub use repo::note_repo::NoteRepository;
pub use repo::priority_repo::PriorityRepository;
pub use repo::subtask_repo::SubTaskRepository;
pub use repo::task_repo::TaskRepository;
pub use repo::{KinRepository, KinTable, RepoError, RepoResult, SqliteRepository};
pub use service::seed_service::{
    ClearSummary, MissingPrerequisite, SeedConfig, SeedError, SeedReport, SeedResult, SeedService,
    SeedStep, StepOutcome, PRIORITY_LEVELS, SEED_SUCCESS_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
