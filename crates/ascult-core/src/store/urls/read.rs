//! Link read operations: lookup by identity or id, listing.

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::super::db::UrlDb;
use crate::provider::{Identity, ProviderKind};
use crate::record::{CanonicalUrl, UrlId, UrlMetadata};

const SELECT_COLUMNS: &str = r#"
    SELECT id, kind, ident_primary, ident_secondary,
           title, author_name, author_url, thumbnail_url, description, length,
           created_at, updated_at, deleted_at
    FROM urls
"#;

impl UrlDb {
    /// Find the live (non-deleted) record for `identity`, if any.
    pub async fn find_by_identity(&self, identity: &Identity) -> Result<Option<CanonicalUrl>> {
        let (primary, secondary) = identity.key_columns();
        let sql = format!(
            "{SELECT_COLUMNS}
            WHERE kind = ?1 AND ident_primary = ?2 AND ident_secondary = ?3
              AND deleted_at IS NULL
            LIMIT 1"
        );
        let row = sqlx::query(&sql)
            .bind(identity.kind().as_str())
            .bind(primary)
            .bind(secondary)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_url(&r)).transpose()
    }

    /// Fetch a record by id, including soft-deleted ones.
    pub async fn get_url(&self, id: UrlId) -> Result<Option<CanonicalUrl>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_url(&r)).transpose()
    }

    /// List records, newest first. Soft-deleted ones only if `include_deleted`.
    pub async fn list_urls(&self, include_deleted: bool) -> Result<Vec<CanonicalUrl>> {
        let filter = if include_deleted {
            ""
        } else {
            "WHERE deleted_at IS NULL"
        };
        let sql = format!("{SELECT_COLUMNS} {filter} ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(row_to_url(&row)?);
        }
        Ok(out)
    }
}

fn row_to_url(row: &SqliteRow) -> Result<CanonicalUrl> {
    let kind: String = row.get("kind");
    let kind: ProviderKind = kind.parse()?;
    let identity = Identity::from_key_columns(
        kind,
        row.get("ident_primary"),
        row.get("ident_secondary"),
    );
    let metadata = UrlMetadata {
        title: row.get("title"),
        author_name: row.get("author_name"),
        author_url: row.get("author_url"),
        thumbnail_url: row.get("thumbnail_url"),
        description: row.get("description"),
        length: row.get("length"),
    };
    Ok(CanonicalUrl::restore(
        row.get("id"),
        identity,
        metadata,
        row.get("created_at"),
        row.get("updated_at"),
        row.get("deleted_at"),
    ))
}
