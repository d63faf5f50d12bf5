//! Repository contracts and the SQLite implementation behind them.
//!
//! # Responsibility
//! - Define per-entity create / get-or-create / list-all contracts.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call the record's `validate()` before any SQL mutation.
//! - Read paths reject malformed persisted rows instead of masking them.
//! - `list_*` calls return rows in insertion order.

use crate::db::DbError;
use crate::model::ModelValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod category_repo;
pub mod note_repo;
pub mod priority_repo;
pub mod subtask_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ModelValidationError),
    Db(DbError),
    NotFound { table: KinTable, id: Uuid },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, id } => write!(f, "{} row not found: {id}", table.as_str()),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ModelValidationError> for RepoError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Application tables managed by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinTable {
    Categories,
    Priorities,
    Tasks,
    SubTasks,
    Notes,
}

impl KinTable {
    pub const ALL: [KinTable; 5] = [
        KinTable::Categories,
        KinTable::Priorities,
        KinTable::Tasks,
        KinTable::SubTasks,
        KinTable::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Priorities => "priorities",
            Self::Tasks => "tasks",
            Self::SubTasks => "subtasks",
            Self::Notes => "notes",
        }
    }
}

/// SQLite-backed repository implementing every entity contract.
///
/// Borrows a connection opened through [`crate::db::open_db`], so foreign
/// keys and cascade deletes are active.
pub struct SqliteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns the number of rows currently stored in `table`.
    pub fn count_rows(&self, table: KinTable) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {};", table.as_str()),
            [],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }

    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}

/// Full persistence surface consumed by the seeding service.
pub trait KinRepository:
    category_repo::CategoryRepository
    + priority_repo::PriorityRepository
    + task_repo::TaskRepository
    + subtask_repo::SubTaskRepository
    + note_repo::NoteRepository
{
}

impl<T> KinRepository for T where
    T: category_repo::CategoryRepository
        + priority_repo::PriorityRepository
        + task_repo::TaskRepository
        + subtask_repo::SubTaskRepository
        + note_repo::NoteRepository
{
}
