//! Subtask persistence.

use super::{bool_to_int, int_to_bool, parse_uuid, RepoError, RepoResult, SqliteRepository};
use crate::model::subtask::{SubTask, SubTaskId};
use crate::model::task::{TaskId, TaskStatus};
use rusqlite::{params, OptionalExtension, Row};

const SUBTASK_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    status,
    completed,
    parent_task_uuid,
    created_at,
    updated_at
FROM subtasks";

pub trait SubTaskRepository {
    fn create_subtask(&self, subtask: &SubTask) -> RepoResult<SubTaskId>;
    fn list_subtasks(&self) -> RepoResult<Vec<SubTask>>;
    fn list_subtasks_for_task(&self, task_id: TaskId) -> RepoResult<Vec<SubTask>>;
    /// Title of the parent task, or `None` when the subtask does not exist.
    fn parent_task_title(&self, id: SubTaskId) -> RepoResult<Option<String>>;
}

impl SubTaskRepository for SqliteRepository<'_> {
    fn create_subtask(&self, subtask: &SubTask) -> RepoResult<SubTaskId> {
        subtask.validate()?;

        self.conn().execute(
            "INSERT INTO subtasks (
                uuid,
                title,
                status,
                completed,
                parent_task_uuid,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                subtask.uuid.to_string(),
                subtask.title.as_str(),
                subtask.status.as_str(),
                bool_to_int(subtask.completed),
                subtask.parent_task_id.to_string(),
                subtask.created_at,
                subtask.updated_at,
            ],
        )?;

        Ok(subtask.uuid)
    }

    fn list_subtasks(&self) -> RepoResult<Vec<SubTask>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{SUBTASK_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut subtasks = Vec::new();
        while let Some(row) = rows.next()? {
            subtasks.push(parse_subtask_row(row)?);
        }
        Ok(subtasks)
    }

    fn list_subtasks_for_task(&self, task_id: TaskId) -> RepoResult<Vec<SubTask>> {
        let mut stmt = self.conn().prepare(&format!(
            "{SUBTASK_SELECT_SQL} WHERE parent_task_uuid = ?1 ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([task_id.to_string()])?;
        let mut subtasks = Vec::new();
        while let Some(row) = rows.next()? {
            subtasks.push(parse_subtask_row(row)?);
        }
        Ok(subtasks)
    }

    fn parent_task_title(&self, id: SubTaskId) -> RepoResult<Option<String>> {
        let title = self
            .conn()
            .query_row(
                "SELECT t.title
                 FROM subtasks s
                 INNER JOIN tasks t ON t.uuid = s.parent_task_uuid
                 WHERE s.uuid = ?1;",
                [id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(title)
    }
}

fn parse_subtask_row(row: &Row<'_>) -> RepoResult<SubTask> {
    let uuid_text: String = row.get("uuid")?;
    let parent_text: String = row.get("parent_task_uuid")?;

    let status_text: String = row.get("status")?;
    let status = TaskStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid subtask status `{status_text}` in subtasks.status"
        ))
    })?;

    let subtask = SubTask {
        uuid: parse_uuid(&uuid_text, "subtasks.uuid")?,
        title: row.get("title")?,
        status,
        completed: int_to_bool(row.get("completed")?, "subtasks.completed")?,
        parent_task_id: parse_uuid(&parent_text, "subtasks.parent_task_uuid")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    subtask.validate()?;
    Ok(subtask)
}
