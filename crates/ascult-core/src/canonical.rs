//! Find-or-create of canonical link records.
//!
//! Turns a raw string into the single stored record for its identity. The
//! store's uniqueness constraint is the only coordination between concurrent
//! callers: an insert that loses the race re-queries and returns the winner.

use crate::config::{AscultConfig, DEFAULT_INSERT_ATTEMPTS};
use crate::enrich::EnrichmentSink;
use crate::error::UrlError;
use crate::record::CanonicalUrl;
use crate::store::{StoreError, UrlStore};

/// Outcome of a find-or-create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonicalized {
    pub url: CanonicalUrl,
    /// True if this call inserted the record.
    pub created: bool,
}

/// Find-or-create service over a store and an enrichment sink.
pub struct Canonicalizer<S, E> {
    store: S,
    enrichment: E,
    insert_attempts: u32,
}

impl<S, E> Canonicalizer<S, E>
where
    S: UrlStore,
    E: EnrichmentSink,
{
    pub fn new(store: S, enrichment: E) -> Self {
        Self {
            store,
            enrichment,
            insert_attempts: DEFAULT_INSERT_ATTEMPTS,
        }
    }

    pub fn from_config(cfg: &AscultConfig, store: S, enrichment: E) -> Self {
        Self::new(store, enrichment).with_insert_attempts(cfg.canonical.insert_attempts)
    }

    /// Bounds the insert retries after lost races (minimum 1).
    pub fn with_insert_attempts(mut self, attempts: u32) -> Self {
        self.insert_attempts = attempts.max(1);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Classifies, decomposes and finds-or-creates the record for `input`.
    pub async fn canonicalize(&self, input: &str) -> Result<Canonicalized, UrlError> {
        let candidate = CanonicalUrl::from_input(input)?;
        self.find_or_create(candidate).await
    }

    /// Returns the stored record for `candidate`'s identity, inserting it if
    /// none exists.
    ///
    /// An already persisted candidate is returned as is. An existing record
    /// wins over the candidate; the candidate's metadata is not merged.
    /// Enrichment is notified only when this call created the record.
    pub async fn find_or_create(&self, candidate: CanonicalUrl) -> Result<Canonicalized, UrlError> {
        if candidate.id().is_some() {
            return Ok(Canonicalized {
                url: candidate,
                created: false,
            });
        }

        let identity = candidate.identity();
        let mut attempt = 0u32;
        loop {
            if let Some(existing) = self.store.find_by_identity(identity).await? {
                tracing::debug!(id = ?existing.id(), %identity, "found existing url");
                return Ok(Canonicalized {
                    url: existing,
                    created: false,
                });
            }

            if attempt >= self.insert_attempts {
                return Err(UrlError::Persistence(anyhow::anyhow!(
                    "could not store {identity} after {attempt} attempts"
                )));
            }
            attempt += 1;

            match self.store.insert(&candidate).await {
                Ok(stored) => {
                    tracing::info!(id = ?stored.id(), %identity, "created url");
                    self.enrichment.notify_created(&stored);
                    return Ok(Canonicalized {
                        url: stored,
                        created: true,
                    });
                }
                Err(StoreError::Conflict) => {
                    tracing::debug!(%identity, attempt, "insert lost race, re-querying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
