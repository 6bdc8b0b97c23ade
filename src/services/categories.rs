use crate::models::{Category, CategoryParams};
use crate::services::slug::{check_slug, set_default_slug, SlugScope};
use crate::services::validation::ValidationErrors;
use crate::services::{now, slug_conflict, ServiceError, ServiceResult};
use crate::Database;
use rusqlite::{Connection, OptionalExtension, Row};

fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

pub(crate) fn find_category(conn: &Connection, id: i64) -> ServiceResult<Category> {
    conn.query_row(
        "SELECT id, name, slug, created_at, updated_at FROM categories WHERE id = ?",
        [id],
        row_to_category,
    )
    .optional()?
    .ok_or(ServiceError::NotFound)
}

fn prepare(
    conn: &Connection,
    name: Option<&str>,
    mut slug: Option<String>,
    exclude_id: Option<i64>,
) -> ServiceResult<String> {
    set_default_slug(name, &mut slug);

    let mut errors = ValidationErrors::default();
    check_slug(conn, SlugScope::Categories, slug.as_deref(), exclude_id, &mut errors)?;
    errors.into_result().map_err(ServiceError::Invalid)?;

    // check_slug rejects a missing slug for categories
    slug.ok_or_else(|| ServiceError::Other(anyhow::anyhow!("category slug missing after validation")))
}

pub fn list_categories(db: &Database) -> ServiceResult<Vec<Category>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, name, slug, created_at, updated_at FROM categories ORDER BY name, id",
    )?;
    let categories = stmt
        .query_map([], row_to_category)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

pub fn get_category(db: &Database, id: i64) -> ServiceResult<Category> {
    let conn = db.get()?;
    find_category(&conn, id)
}

pub fn create_category(db: &Database, input: CategoryParams) -> ServiceResult<i64> {
    let conn = db.get()?;
    let slug = prepare(&conn, input.name.as_deref(), input.slug, None)?;

    let timestamp = now();
    conn.execute(
        "INSERT INTO categories (name, slug, created_at, updated_at) VALUES (?, ?, ?, ?)",
        (input.name.unwrap_or_default(), &slug, &timestamp, &timestamp),
    )
    .map_err(slug_conflict)?;

    let id = conn.last_insert_rowid();
    tracing::info!(category_id = id, slug = %slug, "Created category");
    Ok(id)
}

pub fn update_category(db: &Database, id: i64, input: CategoryParams) -> ServiceResult<Category> {
    let conn = db.get()?;
    let current = find_category(&conn, id)?;

    let name = input.name.unwrap_or(current.name);
    let slug = prepare(
        &conn,
        Some(name.as_str()),
        Some(input.slug.unwrap_or(current.slug)),
        Some(id),
    )?;

    let updated_at = now();
    conn.execute(
        "UPDATE categories SET name = ?, slug = ?, updated_at = ? WHERE id = ?",
        (&name, &slug, &updated_at, id),
    )
    .map_err(slug_conflict)?;

    tracing::info!(category_id = id, "Updated category");
    Ok(Category {
        id,
        name,
        slug,
        created_at: current.created_at,
        updated_at,
    })
}

/// Removes the category only. Posts that reference it are left as they are.
pub fn delete_category(db: &Database, id: i64) -> ServiceResult<()> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM categories WHERE id = ?", [id])?;
    if deleted == 0 {
        return Err(ServiceError::NotFound);
    }
    tracing::info!(category_id = id, "Deleted category");
    Ok(())
}
