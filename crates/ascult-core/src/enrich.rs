//! Post-creation enrichment hook.
//!
//! When the canonicalizer creates a record it notifies an [`EnrichmentSink`].
//! The notification is at-most-once and fire-and-forget: it never blocks,
//! never fails, and is never retried. Metadata lookup itself (oEmbed or
//! similar) is an external [`MetadataSource`]; [`run_enrichment_loop`] wires
//! a source to a store in a background task.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::config::EnrichmentConfig;
use crate::record::{CanonicalUrl, UrlMetadata};
use crate::store::UrlStore;

/// Receives newly created records.
pub trait EnrichmentSink: Send + Sync {
    /// Called once per created record. Must return promptly and must not fail.
    fn notify_created(&self, url: &CanonicalUrl);
}

/// Sink that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEnrichment;

impl EnrichmentSink for NoopEnrichment {
    fn notify_created(&self, url: &CanonicalUrl) {
        tracing::debug!(id = ?url.id(), "no enrichment configured");
    }
}

/// Sink backed by a bounded queue. A full or closed queue drops the
/// notification with a warning.
#[derive(Debug, Clone)]
pub struct ChannelEnrichment {
    tx: mpsc::Sender<CanonicalUrl>,
}

impl ChannelEnrichment {
    /// Creates the sink and the receiving end for [`run_enrichment_loop`].
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<CanonicalUrl>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    pub fn from_config(cfg: &EnrichmentConfig) -> (Self, mpsc::Receiver<CanonicalUrl>) {
        Self::new(cfg.queue_capacity)
    }
}

impl EnrichmentSink for ChannelEnrichment {
    fn notify_created(&self, url: &CanonicalUrl) {
        if let Err(e) = self.tx.try_send(url.clone()) {
            tracing::warn!(id = ?url.id(), "enrichment notification dropped: {}", e);
        }
    }
}

/// External provider of descriptive metadata for a link.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, url: &CanonicalUrl) -> anyhow::Result<UrlMetadata>;
}

/// Drains `rx`, fetching metadata for each record and storing it.
///
/// Failures are logged and skipped. Returns the number of records updated
/// once every sender is dropped. Spawn this with tokio::spawn.
pub async fn run_enrichment_loop<S, M>(
    mut rx: mpsc::Receiver<CanonicalUrl>,
    store: S,
    source: M,
) -> u64
where
    S: UrlStore,
    M: MetadataSource,
{
    let mut updated = 0u64;
    while let Some(url) = rx.recv().await {
        let Some(id) = url.id() else {
            tracing::warn!(identity = %url.identity(), "skipping enrichment of unsaved record");
            continue;
        };
        let meta = match source.fetch(&url).await {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!(id, "metadata fetch failed: {:#}", e);
                continue;
            }
        };
        match store.update_metadata(id, &meta).await {
            Ok(()) => {
                updated += 1;
                tracing::debug!(id, title = ?meta.title, "enriched");
            }
            Err(e) => tracing::warn!(id, "storing metadata failed: {}", e),
        }
    }
    updated
}
