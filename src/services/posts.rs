use crate::models::{Category, Post, PostParams, PostWithCategory};
use crate::services::slug::{check_slug, set_default_slug, SlugScope};
use crate::services::validation::{validate_exact_length, ValidationErrors};
use crate::services::{now, slug_conflict, ServiceError, ServiceResult};
use crate::Database;
use rusqlite::{Connection, OptionalExtension, Row};

const POST_COLUMNS: &str = "id, name, content, slug, category_id, created_at, updated_at";

/// Switches applied while validating a post before it is saved.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostRules {
    /// Require `name` and `content` to be exactly two characters long.
    pub strict_length: bool,
}

fn row_to_post(row: &Row) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        name: row.get(1)?,
        content: row.get(2)?,
        slug: row.get(3)?,
        category_id: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn find_post(conn: &Connection, id: i64) -> ServiceResult<Post> {
    let sql = format!("SELECT {} FROM posts WHERE id = ?", POST_COLUMNS);
    conn.query_row(&sql, [id], row_to_post)
        .optional()?
        .ok_or(ServiceError::NotFound)
}

/// Runs slug derivation and every post validation against the values that
/// would be written. Returns the final slug.
fn prepare(
    conn: &Connection,
    rules: PostRules,
    name: Option<&str>,
    content: Option<&str>,
    mut slug: Option<String>,
    exclude_id: Option<i64>,
) -> ServiceResult<Option<String>> {
    set_default_slug(name, &mut slug);

    let mut errors = ValidationErrors::default();
    if rules.strict_length {
        validate_exact_length("name", name, &mut errors);
        validate_exact_length("content", content, &mut errors);
    }
    check_slug(conn, SlugScope::Posts, slug.as_deref(), exclude_id, &mut errors)?;

    errors.into_result().map_err(ServiceError::Invalid)?;
    Ok(slug)
}

pub fn list_posts(db: &Database) -> ServiceResult<Vec<PostWithCategory>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT p.id, p.name, p.content, p.slug, p.category_id, p.created_at, p.updated_at,
               c.id, c.name, c.slug, c.created_at, c.updated_at
        FROM posts p
        LEFT JOIN categories c ON c.id = p.category_id
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )?;
    let posts = stmt
        .query_map([], |row| {
            let category = match row.get::<_, Option<i64>>(7)? {
                Some(id) => Some(Category {
                    id,
                    name: row.get(8)?,
                    slug: row.get(9)?,
                    created_at: row.get(10)?,
                    updated_at: row.get(11)?,
                }),
                None => None,
            };
            Ok(PostWithCategory {
                post: row_to_post(row)?,
                category,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(posts)
}

pub fn get_post(db: &Database, id: i64) -> ServiceResult<Post> {
    let conn = db.get()?;
    find_post(&conn, id)
}

/// The category a post points at, or `None` when it has none or the category
/// was deleted.
pub fn category_of(db: &Database, post: &Post) -> ServiceResult<Option<Category>> {
    let Some(category_id) = post.category_id else {
        return Ok(None);
    };
    let conn = db.get()?;
    match super::categories::find_category(&conn, category_id) {
        Ok(category) => Ok(Some(category)),
        Err(ServiceError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn list_posts_in_category(db: &Database, category_id: i64) -> ServiceResult<Vec<Post>> {
    let conn = db.get()?;
    let sql = format!(
        "SELECT {} FROM posts WHERE category_id = ? ORDER BY created_at DESC, id DESC",
        POST_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let posts = stmt
        .query_map([category_id], row_to_post)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(posts)
}

pub fn create_post(db: &Database, input: PostParams, rules: PostRules) -> ServiceResult<i64> {
    let conn = db.get()?;
    let slug = prepare(
        &conn,
        rules,
        input.name.as_deref(),
        input.content.as_deref(),
        input.slug,
        None,
    )?;

    let timestamp = now();
    conn.execute(
        "INSERT INTO posts (name, content, slug, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        (
            input.name.unwrap_or_default(),
            input.content.unwrap_or_default(),
            &slug,
            &timestamp,
            &timestamp,
        ),
    )
    .map_err(slug_conflict)?;

    let id = conn.last_insert_rowid();
    tracing::info!(post_id = id, slug = ?slug, "Created post");
    Ok(id)
}

/// Applies the submitted fields on top of the stored post. Fields left out of
/// `input` keep their current value.
pub fn update_post(db: &Database, id: i64, input: PostParams, rules: PostRules) -> ServiceResult<Post> {
    let conn = db.get()?;
    let current = find_post(&conn, id)?;

    let name = input.name.unwrap_or(current.name);
    let content = input.content.unwrap_or(current.content);
    let slug = prepare(
        &conn,
        rules,
        Some(name.as_str()),
        Some(content.as_str()),
        input.slug.or(current.slug),
        Some(id),
    )?;

    let updated_at = now();
    conn.execute(
        "UPDATE posts SET name = ?, content = ?, slug = ?, updated_at = ? WHERE id = ?",
        (&name, &content, &slug, &updated_at, id),
    )
    .map_err(slug_conflict)?;

    tracing::info!(post_id = id, "Updated post");
    Ok(Post {
        id,
        name,
        content,
        slug,
        category_id: current.category_id,
        created_at: current.created_at,
        updated_at,
    })
}

pub fn delete_post(db: &Database, id: i64) -> ServiceResult<()> {
    let conn = db.get()?;
    let deleted = conn.execute("DELETE FROM posts WHERE id = ?", [id])?;
    if deleted == 0 {
        return Err(ServiceError::NotFound);
    }
    tracing::info!(post_id = id, "Deleted post");
    Ok(())
}

/// Points a post at a category, or detaches it when `category_id` is `None`.
pub fn set_post_category(db: &Database, id: i64, category_id: Option<i64>) -> ServiceResult<()> {
    let conn = db.get()?;
    find_post(&conn, id)?;
    if let Some(category_id) = category_id {
        super::categories::find_category(&conn, category_id)?;
    }
    conn.execute(
        "UPDATE posts SET category_id = ?, updated_at = ? WHERE id = ?",
        (category_id, now(), id),
    )?;
    tracing::info!(post_id = id, category_id = ?category_id, "Changed post category");
    Ok(())
}
