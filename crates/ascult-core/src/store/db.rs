//! SQLite-backed link database.
//!
//! Handles connection, migrations, and timestamp helpers. Link CRUD lives in `urls`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::AscultConfig;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed link database.
///
/// The database file is stored under the XDG state directory:
/// `~/.local/state/ascult/urls.db` on Debian.
#[derive(Clone)]
pub struct UrlDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl UrlDb {
    /// Open (or create) the default link database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ascult")?;
        let state_dir = xdg_dirs.get_state_home().join("ascult");
        Self::open_at(state_dir.join("urls.db")).await
    }

    /// Open the database named by `cfg.database_path`, or the default one.
    pub async fn open_configured(cfg: &AscultConfig) -> Result<Self> {
        match cfg.database_path.as_deref() {
            Some(path) => Self::open_at(path).await,
            None => Self::open_default().await,
        }
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let db = UrlDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "url database ready");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // One table for every provider. Identity is split into two text
        // columns; single-field identities leave `ident_secondary` empty.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                kind TEXT NOT NULL,
                ident_primary TEXT NOT NULL,
                ident_secondary TEXT NOT NULL DEFAULT '',
                title TEXT,
                author_name TEXT,
                author_url TEXT,
                thumbnail_url TEXT,
                description TEXT,
                length INTEGER,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                deleted_at INTEGER
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        // At most one live row per identity; soft-deleted rows don't count.
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_urls_identity
            ON urls (kind, ident_primary, ident_secondary)
            WHERE deleted_at IS NULL;
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps). Pub for use by `urls`.
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<UrlDb> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = UrlDb { pool };
    db.migrate().await?;
    Ok(db)
}
