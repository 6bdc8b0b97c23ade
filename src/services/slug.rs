use crate::services::validation::{ValidationErrors, MSG_INVALID, MSG_TAKEN};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{Connection, OptionalExtension};
use slug::slugify;

static SLUG_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[a-z0-9\-]+\z").unwrap());

/// Tables whose rows carry a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugScope {
    Posts,
    Categories,
}

impl SlugScope {
    fn table(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Categories => "categories",
        }
    }

    /// Posts may be saved without a slug, categories may not.
    fn allows_missing(self) -> bool {
        matches!(self, Self::Posts)
    }
}

/// Lower-cases and transliterates `name`, joining its alphanumeric runs with
/// `-`. Symbols are dropped rather than spelled out, so a name made only of
/// symbols yields an empty slug.
pub fn generate_slug(name: &str) -> String {
    let words: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    slugify(words)
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_FORMAT.is_match(slug)
}

/// Fills an empty slug from `name`. A slug that is absent is left absent, and
/// a slug that already has a value is never overwritten.
pub fn set_default_slug(name: Option<&str>, slug: &mut Option<String>) {
    let Some(current) = slug.as_mut() else {
        return;
    };
    match name {
        Some(name) if !name.is_empty() && current.is_empty() => {
            *current = generate_slug(name);
        }
        _ => {}
    }
}

/// Records format and uniqueness errors for `slug` among the rows of `scope`,
/// ignoring the row `exclude_id` (the record being updated).
pub fn check_slug(
    conn: &Connection,
    scope: SlugScope,
    slug: Option<&str>,
    exclude_id: Option<i64>,
    errors: &mut ValidationErrors,
) -> rusqlite::Result<()> {
    let Some(slug) = slug else {
        if !scope.allows_missing() {
            errors.add("slug", MSG_INVALID);
        }
        return Ok(());
    };

    if !is_valid_slug(slug) {
        errors.add("slug", MSG_INVALID);
    }

    let sql = format!(
        "SELECT id FROM {} WHERE slug = ?1 AND id != ?2 LIMIT 1",
        scope.table()
    );
    let taken: Option<i64> = conn
        .query_row(&sql, (slug, exclude_id.unwrap_or(0)), |row| row.get(0))
        .optional()?;
    if taken.is_some() {
        errors.add("slug", MSG_TAKEN);
    }

    Ok(())
}
