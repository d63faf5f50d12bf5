//! Category persistence.

use super::{parse_uuid, KinTable, RepoError, RepoResult, SqliteRepository};
use crate::model::category::{Category, CategoryId};
use rusqlite::{params, OptionalExtension, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT uuid, name, created_at, updated_at FROM categories";

pub trait CategoryRepository {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId>;
    /// Returns the first category named exactly `name`, inserting one when
    /// absent. The flag is `true` when a row was inserted.
    fn get_or_create_category(&self, name: &str) -> RepoResult<(Category, bool)>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Deletes the category and, through cascade, its tasks.
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
}

impl CategoryRepository for SqliteRepository<'_> {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        category.validate()?;

        self.conn().execute(
            "INSERT INTO categories (uuid, name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                category.uuid.to_string(),
                category.name.as_str(),
                category.created_at,
                category.updated_at,
            ],
        )?;

        Ok(category.uuid)
    }

    fn get_or_create_category(&self, name: &str) -> RepoResult<(Category, bool)> {
        let existing = self
            .conn()
            .query_row(
                &format!("{CATEGORY_SELECT_SQL} WHERE name = ?1 ORDER BY rowid ASC LIMIT 1;"),
                [name],
                |row| Ok(parse_category_row(row)),
            )
            .optional()?;

        if let Some(category) = existing {
            return Ok((category?, false));
        }

        let category = Category::new(name);
        self.create_category(&category)?;
        Ok((category, true))
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }
        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }
        Ok(categories)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM categories WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: KinTable::Categories,
                id,
            });
        }
        Ok(())
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let uuid_text: String = row.get("uuid")?;
    let category = Category {
        uuid: parse_uuid(&uuid_text, "categories.uuid")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    category.validate()?;
    Ok(category)
}
