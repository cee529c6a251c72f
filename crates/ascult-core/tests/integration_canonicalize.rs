//! Integration test: canonicalization against an on-disk database.
//!
//! Opens a fresh SQLite file per test, drives the canonicalizer through the
//! public API, and checks identity dedup, soft-delete handling, concurrent
//! callers and the enrichment loop.

use std::sync::Arc;

use ascult_core::config::AscultConfig;
use ascult_core::enrich::{run_enrichment_loop, ChannelEnrichment, MetadataSource, NoopEnrichment};
use ascult_core::store::UrlDb;
use ascult_core::{CanonicalUrl, Canonicalizer, Identity, ProviderKind, UrlError, UrlMetadata};
use async_trait::async_trait;
use tempfile::tempdir;

#[tokio::test]
async fn different_spellings_share_one_record() {
    let state_dir = tempdir().unwrap();
    let db = UrlDb::open_at(state_dir.path().join("urls.db")).await.unwrap();
    let c = Canonicalizer::new(db.clone(), NoopEnrichment);

    let a = c
        .canonicalize("https://www.youtube.com/watch?v=_zpOc9n7dlI")
        .await
        .unwrap();
    let b = c
        .canonicalize("youtube.com/watch?list=PL1&v=_zpOc9n7dlI&t=42")
        .await
        .unwrap();
    let other = c
        .canonicalize("https://soundcloud.com/forss/flickermood")
        .await
        .unwrap();

    assert!(a.created);
    assert!(!b.created);
    assert_eq!(a.url.id(), b.url.id());
    assert_ne!(a.url.id(), other.url.id());
    assert_eq!(a.url.url(), "https://www.youtube.com/watch?v=_zpOc9n7dlI");
    assert_eq!(other.url.kind(), ProviderKind::SoundCloud);
    assert_eq!(db.list_urls(false).await.unwrap().len(), 2);
}

#[tokio::test]
async fn records_survive_reopen() {
    let state_dir = tempdir().unwrap();
    let path = state_dir.path().join("nested").join("urls.db");

    let id = {
        let db = UrlDb::open_at(&path).await.unwrap();
        let c = Canonicalizer::new(db, NoopEnrichment);
        c.canonicalize("mixcloud.com/mrLob/45-funk-mix-live")
            .await
            .unwrap()
            .url
            .id()
    };

    let db = UrlDb::open_at(&path).await.unwrap();
    let c = Canonicalizer::new(db, NoopEnrichment);
    let again = c
        .canonicalize("https://www.mixcloud.com/mrLob/45-funk-mix-live/")
        .await
        .unwrap();
    assert!(!again.created);
    assert_eq!(again.url.id(), id);
    assert_eq!(
        again.url.identity(),
        &Identity::Mixcloud {
            user: "mrLob".to_string(),
            mix: "45-funk-mix-live".to_string(),
        }
    );
}

#[tokio::test]
async fn soft_deleted_record_is_not_resurrected() {
    let state_dir = tempdir().unwrap();
    let db = UrlDb::open_at(state_dir.path().join("urls.db")).await.unwrap();
    let c = Canonicalizer::new(db.clone(), NoopEnrichment);

    let first = c.canonicalize("soundcloud.com/a/b").await.unwrap();
    let first_id = first.url.id().unwrap();
    assert!(db.soft_delete(first_id).await.unwrap());

    let second = c.canonicalize("soundcloud.com/a/b").await.unwrap();
    assert!(second.created);
    assert_ne!(second.url.id(), Some(first_id));

    let all = db.list_urls(true).await.unwrap();
    assert_eq!(all.len(), 2);
    let old = db.get_url(first_id).await.unwrap().unwrap();
    assert!(old.is_deleted());
}

#[tokio::test]
async fn rejects_unrecognized_and_malformed_input() {
    let state_dir = tempdir().unwrap();
    let db = UrlDb::open_at(state_dir.path().join("urls.db")).await.unwrap();
    let c = Canonicalizer::new(db.clone(), NoopEnrichment);

    let err = c.canonicalize("https://vimeo.com/12345").await.unwrap_err();
    assert!(matches!(err, UrlError::UnrecognizedUrl { .. }));
    assert!(err.is_user_error());

    let err = c.canonicalize("").await.unwrap_err();
    assert!(matches!(err, UrlError::UnrecognizedUrl { .. }));

    assert!(db.list_urls(true).await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_callers_converge_on_one_record() {
    let state_dir = tempdir().unwrap();
    let db = UrlDb::open_at(state_dir.path().join("urls.db")).await.unwrap();
    let c = Arc::new(Canonicalizer::new(db.clone(), NoopEnrichment));

    let inputs = [
        "https://soundcloud.com/forss/flickermood",
        "http://soundcloud.com/forss/flickermood?in=x",
        "soundcloud.com/forss/flickermood#t=1",
        "https://m.soundcloud.com/forss/flickermood",
    ];
    let mut handles = Vec::new();
    for input in inputs {
        let c = Arc::clone(&c);
        handles.push(tokio::spawn(async move { c.canonicalize(input).await }));
    }

    let mut ids = Vec::new();
    let mut created = 0;
    for h in handles {
        let out = h.await.unwrap().unwrap();
        if out.created {
            created += 1;
        }
        ids.push(out.url.id());
    }

    assert_eq!(created, 1);
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(db.list_urls(true).await.unwrap().len(), 1);
}

struct FixedTitle;

#[async_trait]
impl MetadataSource for FixedTitle {
    async fn fetch(&self, url: &CanonicalUrl) -> anyhow::Result<UrlMetadata> {
        Ok(UrlMetadata {
            title: Some(format!("{}", url.identity())),
            author_name: Some("someone".to_string()),
            ..UrlMetadata::default()
        })
    }
}

#[tokio::test]
async fn created_records_are_enriched_in_background() {
    let state_dir = tempdir().unwrap();
    let db = UrlDb::open_at(state_dir.path().join("urls.db")).await.unwrap();
    let cfg = AscultConfig::default();
    let (sink, rx) = ChannelEnrichment::from_config(&cfg.enrichment);
    let worker = tokio::spawn(run_enrichment_loop(rx, db.clone(), FixedTitle));

    let c = Canonicalizer::from_config(&cfg, db.clone(), sink);
    let first = c.canonicalize("soundcloud.com/a/b").await.unwrap();
    // Lookup of an existing record must not queue a second notification.
    c.canonicalize("soundcloud.com/a/b?x=1").await.unwrap();
    drop(c);

    let updated = worker.await.unwrap();
    assert_eq!(updated, 1);

    let stored = db.get_url(first.url.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.metadata.title.as_deref(), Some("soundcloud:a/b"));
    assert_eq!(stored.metadata.author_name.as_deref(), Some("someone"));
}
