use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;

const MIGRATIONS: [(i32, &str, &str); 2] = [
    (
        1,
        "Core tables (categories, posts)",
        include_str!("migrations/001_initial.sql"),
    ),
    (
        2,
        "Post category reference",
        include_str!("migrations/002_post_category.sql"),
    ),
];

#[derive(Debug, Clone)]
pub struct MigrationStatus {
    pub version: i32,
    pub description: &'static str,
    pub applied_at: Option<String>,
}

pub struct Database {
    pool: DbPool,
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self { pool: self.pool.clone() }
    }
}

impl Database {
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_pool_size(path, 10)
    }

    pub fn open_with_pool_size(path: &str, pool_size: u32) -> Result<Self> {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(path)
            .with_init(|c| c.execute_batch("PRAGMA busy_timeout=5000;"));
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        Ok(Self { pool })
    }

    /// Shared-cache in-memory database. Every handle opened with the same
    /// `name` sees the same data for as long as the pool keeps a connection.
    pub fn open_memory(name: &str) -> Result<Self> {
        let uri = format!("file:{}?mode=memory&cache=shared", name);
        let manager = SqliteConnectionManager::file(uri);
        let pool = Pool::builder().max_size(4).min_idle(Some(1)).build(manager)?;
        Ok(Self { pool })
    }

    pub fn get(&self) -> Result<r2d2::PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.get()?;
        run_migrations(&conn)?;
        Ok(())
    }

    pub fn migration_status(&self) -> Result<Vec<MigrationStatus>> {
        let conn = self.get()?;
        ensure_migrations_table(&conn)?;

        let mut stmt = conn.prepare("SELECT applied_at FROM schema_migrations WHERE version = ?")?;
        let mut statuses = Vec::with_capacity(MIGRATIONS.len());
        for (version, description, _) in MIGRATIONS {
            let applied_at: Option<String> = stmt
                .query_row([version], |row| row.get(0))
                .map(Some)
                .or_else(|e| match e {
                    rusqlite::Error::QueryReturnedNoRows => Ok(None),
                    other => Err(other),
                })?;
            statuses.push(MigrationStatus {
                version,
                description,
                applied_at,
            });
        }
        Ok(statuses)
    }
}

fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;
    Ok(())
}

fn run_migrations(conn: &Connection) -> Result<()> {
    ensure_migrations_table(conn)?;

    let current_version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;

    for (version, _, sql) in MIGRATIONS {
        if version > current_version {
            tracing::info!("Running migration {}", version);
            conn.execute_batch(sql)?;
            conn.execute(
                "INSERT INTO schema_migrations (version) VALUES (?)",
                [version],
            )?;
        }
    }

    Ok(())
}
