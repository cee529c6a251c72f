//! Persistent link database (SQLite via sqlx).
//!
//! Stores one row per canonical link with its provider, identity columns,
//! enrichment metadata and lifecycle timestamps. A partial unique index keeps
//! at most one live row per (provider, identity).

mod db;
mod urls;

pub use db::UrlDb;

#[cfg(test)]
pub(crate) use db::open_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::provider::Identity;
use crate::record::{CanonicalUrl, UrlId, UrlMetadata};

/// Error returned by [`UrlStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A live record with the same identity already exists. Transient from
    /// the caller's point of view: the other record can be looked up.
    #[error("a record with this identity already exists")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Persistence collaborator used by the canonicalizer.
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Exact-match lookup among non-deleted records.
    async fn find_by_identity(&self, identity: &Identity)
        -> Result<Option<CanonicalUrl>, StoreError>;

    /// Persist `candidate`, assigning id and timestamps.
    /// Must report a uniqueness violation as [`StoreError::Conflict`].
    async fn insert(&self, candidate: &CanonicalUrl) -> Result<CanonicalUrl, StoreError>;

    /// Replace the metadata of an existing record.
    async fn update_metadata(&self, id: UrlId, meta: &UrlMetadata) -> Result<(), StoreError>;
}

#[async_trait]
impl UrlStore for UrlDb {
    async fn find_by_identity(
        &self,
        identity: &Identity,
    ) -> Result<Option<CanonicalUrl>, StoreError> {
        Ok(UrlDb::find_by_identity(self, identity).await?)
    }

    async fn insert(&self, candidate: &CanonicalUrl) -> Result<CanonicalUrl, StoreError> {
        self.insert_url(candidate).await
    }

    async fn update_metadata(&self, id: UrlId, meta: &UrlMetadata) -> Result<(), StoreError> {
        Ok(UrlDb::update_metadata(self, id, meta).await?)
    }
}

#[async_trait]
impl<S: UrlStore + ?Sized> UrlStore for std::sync::Arc<S> {
    async fn find_by_identity(
        &self,
        identity: &Identity,
    ) -> Result<Option<CanonicalUrl>, StoreError> {
        (**self).find_by_identity(identity).await
    }

    async fn insert(&self, candidate: &CanonicalUrl) -> Result<CanonicalUrl, StoreError> {
        (**self).insert(candidate).await
    }

    async fn update_metadata(&self, id: UrlId, meta: &UrlMetadata) -> Result<(), StoreError> {
        (**self).update_metadata(id, meta).await
    }
}
