//! `ascult remove <id>` – soft-delete a link.

use anyhow::{bail, Result};
use ascult_core::store::UrlDb;

/// Marks the link deleted. The row stays for `list --all` and `show`; adding
/// the same identity later creates a new record.
pub async fn run_remove(db: &UrlDb, id: i64) -> Result<()> {
    if !db.soft_delete(id).await? {
        bail!("no live link with id {id}");
    }
    println!("Removed link {id}");
    Ok(())
}
