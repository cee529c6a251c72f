//! `ascult list` – show stored links.

use anyhow::Result;
use ascult_core::store::UrlDb;

pub async fn run_list(db: &UrlDb, include_deleted: bool) -> Result<()> {
    let urls = db.list_urls(include_deleted).await?;
    if urls.is_empty() {
        println!("No links in database.");
        return Ok(());
    }

    println!("{:<6} {:<11} {:<8} URL", "ID", "PROVIDER", "STATE");
    for u in urls {
        let id = u.id().map(|id| id.to_string()).unwrap_or_default();
        let state = if u.is_deleted() { "removed" } else { "live" };
        println!("{:<6} {:<11} {:<8} {}", id, u.kind().as_str(), state, u.url());
    }
    Ok(())
}
