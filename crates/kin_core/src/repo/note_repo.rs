//! Note persistence.

use super::{parse_uuid, RepoResult, SqliteRepository};
use crate::model::note::{Note, NoteId};
use crate::model::task::TaskId;
use rusqlite::{params, OptionalExtension, Row};

const NOTE_SELECT_SQL: &str = "SELECT uuid, task_uuid, content, created_at, updated_at FROM notes";

pub trait NoteRepository {
    fn create_note(&self, note: &Note) -> RepoResult<NoteId>;
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    fn list_notes_for_task(&self, task_id: TaskId) -> RepoResult<Vec<Note>>;
    /// `"Note for <task title>"`, or `None` when the note does not exist.
    fn note_label(&self, id: NoteId) -> RepoResult<Option<String>>;
}

impl NoteRepository for SqliteRepository<'_> {
    fn create_note(&self, note: &Note) -> RepoResult<NoteId> {
        note.validate()?;

        self.conn().execute(
            "INSERT INTO notes (uuid, task_uuid, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                note.uuid.to_string(),
                note.task_id.to_string(),
                note.content.as_str(),
                note.created_at,
                note.updated_at,
            ],
        )?;

        Ok(note.uuid)
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn list_notes_for_task(&self, task_id: TaskId) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn().prepare(&format!(
            "{NOTE_SELECT_SQL} WHERE task_uuid = ?1 ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([task_id.to_string()])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn note_label(&self, id: NoteId) -> RepoResult<Option<String>> {
        let joined = self
            .conn()
            .query_row(
                "SELECT n.uuid, n.task_uuid, n.content, n.created_at, n.updated_at,
                        t.title AS task_title
                 FROM notes n
                 INNER JOIN tasks t ON t.uuid = n.task_uuid
                 WHERE n.uuid = ?1;",
                [id.to_string()],
                |row| {
                    let title: String = row.get("task_title")?;
                    Ok((parse_note_row(row), title))
                },
            )
            .optional()?;

        match joined {
            Some((note, task_title)) => Ok(Some(note?.label(&task_title))),
            None => Ok(None),
        }
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let uuid_text: String = row.get("uuid")?;
    let task_text: String = row.get("task_uuid")?;
    let note = Note {
        uuid: parse_uuid(&uuid_text, "notes.uuid")?,
        task_id: parse_uuid(&task_text, "notes.task_uuid")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    note.validate()?;
    Ok(note)
}
