//! Link write operations: insert, metadata update, soft delete.

use anyhow::Result;

use super::super::db::{unix_timestamp, UrlDb};
use super::super::StoreError;
use crate::record::{CanonicalUrl, UrlId, UrlMetadata};

impl UrlDb {
    /// Persist a new record for `candidate`'s identity and metadata.
    ///
    /// Returns the stored record with id and timestamps assigned. Fails with
    /// [`StoreError::Conflict`] if a live record with the same identity exists.
    pub async fn insert_url(&self, candidate: &CanonicalUrl) -> Result<CanonicalUrl, StoreError> {
        let now = unix_timestamp();
        let identity = candidate.identity();
        let (primary, secondary) = identity.key_columns();
        let meta = &candidate.metadata;

        let result = sqlx::query(
            r#"
            INSERT INTO urls (
                kind, ident_primary, ident_secondary,
                title, author_name, author_url, thumbnail_url, description, length,
                created_at, updated_at, deleted_at
            ) VALUES (?1, ?2, ?3,
                      ?4, ?5, ?6, ?7, ?8, ?9,
                      ?10, ?11, NULL)
            "#,
        )
        .bind(identity.kind().as_str())
        .bind(primary)
        .bind(secondary)
        .bind(&meta.title)
        .bind(&meta.author_name)
        .bind(&meta.author_url)
        .bind(&meta.thumbnail_url)
        .bind(&meta.description)
        .bind(meta.length)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(CanonicalUrl::restore(
                done.last_insert_rowid(),
                identity.clone(),
                meta.clone(),
                now,
                now,
                None,
            )),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(StoreError::Conflict),
            Err(e) => Err(StoreError::Other(e.into())),
        }
    }

    /// Replace the descriptive metadata of a record. Identity is never touched.
    pub async fn update_metadata(&self, id: UrlId, meta: &UrlMetadata) -> Result<()> {
        let now = unix_timestamp();
        sqlx::query(
            r#"
            UPDATE urls
            SET title = ?1,
                author_name = ?2,
                author_url = ?3,
                thumbnail_url = ?4,
                description = ?5,
                length = ?6,
                updated_at = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&meta.title)
        .bind(&meta.author_name)
        .bind(&meta.author_url)
        .bind(&meta.thumbnail_url)
        .bind(&meta.description)
        .bind(meta.length)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Mark a record deleted. Returns false if it was missing or already deleted.
    ///
    /// The row is kept; its identity becomes free for a new record.
    pub async fn soft_delete(&self, id: UrlId) -> Result<bool> {
        let now = unix_timestamp();
        let r = sqlx::query(
            r#"
            UPDATE urls
            SET deleted_at = ?1,
                updated_at = ?1
            WHERE id = ?2 AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(r.rows_affected() > 0)
    }
}
