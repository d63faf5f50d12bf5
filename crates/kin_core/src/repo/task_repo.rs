//! Task persistence.
//!
//! # Invariants
//! - Inserts fail with a foreign-key error when the referenced category or
//!   priority does not exist.
//! - Status updates refresh `updated_at` and never move it backwards.

use super::{parse_uuid, KinTable, RepoError, RepoResult, SqliteRepository};
use crate::model::now_epoch_ms;
use crate::model::task::{Task, TaskId, TaskStatus};
use chrono::NaiveDate;
use rusqlite::{params, Row};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    description,
    status,
    deadline,
    due_date,
    category_uuid,
    priority_uuid,
    created_at,
    updated_at
FROM tasks";

pub trait TaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    fn update_task_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<()>;
    /// Deletes the task together with its subtasks and notes.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

impl TaskRepository for SqliteRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;

        self.conn().execute(
            "INSERT INTO tasks (
                uuid,
                title,
                description,
                status,
                deadline,
                due_date,
                category_uuid,
                priority_uuid,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                task.uuid.to_string(),
                task.title.as_str(),
                task.description.as_str(),
                task.status.as_str(),
                task.deadline,
                task.due_date.map(|date| date.format(DUE_DATE_FORMAT).to_string()),
                task.category_id.to_string(),
                task.priority_id.to_string(),
                task.created_at,
                task.updated_at,
            ],
        )?;

        Ok(task.uuid)
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{TASK_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }
        Ok(None)
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn update_task_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<()> {
        let changed = self.conn().execute(
            "UPDATE tasks
             SET
                status = ?1,
                updated_at = MAX(updated_at, ?2)
             WHERE uuid = ?3;",
            params![status.as_str(), now_epoch_ms(), id.to_string()],
        )?;

        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: TaskId) -> RepoError {
    RepoError::NotFound {
        table: KinTable::Tasks,
        id,
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let category_text: String = row.get("category_uuid")?;
    let priority_text: String = row.get("priority_uuid")?;

    let status_text: String = row.get("status")?;
    let status = TaskStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid task status `{status_text}` in tasks.status"))
    })?;

    let task = Task {
        uuid: parse_uuid(&uuid_text, "tasks.uuid")?,
        title: row.get("title")?,
        description: row.get("description")?,
        status,
        deadline: row.get("deadline")?,
        due_date: parse_due_date(row.get("due_date")?)?,
        category_id: parse_uuid(&category_text, "tasks.category_uuid")?,
        priority_id: parse_uuid(&priority_text, "tasks.priority_uuid")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    task.validate()?;
    Ok(task)
}

fn parse_due_date(value: Option<String>) -> RepoResult<Option<NaiveDate>> {
    let Some(text) = value else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&text, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| RepoError::InvalidData(format!("invalid date `{text}` in tasks.due_date")))
}
