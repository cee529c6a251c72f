//! `ascult add <url>` – find or create the canonical record for a link.

use anyhow::Result;
use ascult_core::config::AscultConfig;
use ascult_core::enrich::NoopEnrichment;
use ascult_core::store::UrlDb;
use ascult_core::Canonicalizer;

pub async fn run_add(db: &UrlDb, cfg: &AscultConfig, url: &str) -> Result<()> {
    let canonicalizer = Canonicalizer::from_config(cfg, db.clone(), NoopEnrichment);
    let out = canonicalizer.canonicalize(url).await?;
    let id = out
        .url
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    if out.created {
        println!("Added link {id}: {}", out.url.url());
    } else {
        println!("Already stored as {id}: {}", out.url.url());
    }
    Ok(())
}
