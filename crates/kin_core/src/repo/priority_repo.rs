//! Priority persistence.

use super::{parse_uuid, KinTable, RepoError, RepoResult, SqliteRepository};
use crate::model::priority::{Priority, PriorityId};
use rusqlite::{params, OptionalExtension, Row};

const PRIORITY_SELECT_SQL: &str =
    "SELECT uuid, name, color, created_at, updated_at FROM priorities";

pub trait PriorityRepository {
    fn create_priority(&self, priority: &Priority) -> RepoResult<PriorityId>;
    /// Returns the first priority named exactly `name`. When absent, inserts
    /// one using `default_color`; an existing row keeps its own color.
    fn get_or_create_priority(
        &self,
        name: &str,
        default_color: Option<&str>,
    ) -> RepoResult<(Priority, bool)>;
    fn get_priority(&self, id: PriorityId) -> RepoResult<Option<Priority>>;
    fn list_priorities(&self) -> RepoResult<Vec<Priority>>;
    /// Deletes the priority and, through cascade, its tasks.
    fn delete_priority(&self, id: PriorityId) -> RepoResult<()>;
}

impl PriorityRepository for SqliteRepository<'_> {
    fn create_priority(&self, priority: &Priority) -> RepoResult<PriorityId> {
        priority.validate()?;

        self.conn().execute(
            "INSERT INTO priorities (uuid, name, color, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                priority.uuid.to_string(),
                priority.name.as_str(),
                priority.color.as_deref(),
                priority.created_at,
                priority.updated_at,
            ],
        )?;

        Ok(priority.uuid)
    }

    fn get_or_create_priority(
        &self,
        name: &str,
        default_color: Option<&str>,
    ) -> RepoResult<(Priority, bool)> {
        let existing = self
            .conn()
            .query_row(
                &format!("{PRIORITY_SELECT_SQL} WHERE name = ?1 ORDER BY rowid ASC LIMIT 1;"),
                [name],
                |row| Ok(parse_priority_row(row)),
            )
            .optional()?;

        if let Some(priority) = existing {
            return Ok((priority?, false));
        }

        let priority = Priority::new(name, default_color.map(str::to_string));
        self.create_priority(&priority)?;
        Ok((priority, true))
    }

    fn get_priority(&self, id: PriorityId) -> RepoResult<Option<Priority>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{PRIORITY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_priority_row(row)?));
        }
        Ok(None)
    }

    fn list_priorities(&self) -> RepoResult<Vec<Priority>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{PRIORITY_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut priorities = Vec::new();
        while let Some(row) = rows.next()? {
            priorities.push(parse_priority_row(row)?);
        }
        Ok(priorities)
    }

    fn delete_priority(&self, id: PriorityId) -> RepoResult<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM priorities WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: KinTable::Priorities,
                id,
            });
        }
        Ok(())
    }
}

fn parse_priority_row(row: &Row<'_>) -> RepoResult<Priority> {
    let uuid_text: String = row.get("uuid")?;
    let priority = Priority {
        uuid: parse_uuid(&uuid_text, "priorities.uuid")?,
        name: row.get("name")?,
        color: row.get("color")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    priority.validate()?;
    Ok(priority)
}
