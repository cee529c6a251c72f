//! `ascult show <id>` – print one link with its metadata.

use anyhow::{bail, Result};
use ascult_core::store::UrlDb;

pub async fn run_show(db: &UrlDb, id: i64) -> Result<()> {
    let Some(u) = db.get_url(id).await? else {
        bail!("no link with id {id}");
    };

    println!("id:         {id}");
    println!("provider:   {}", u.kind());
    println!("identity:   {}", u.identity());
    println!("url:        {}", u.url());
    println!("oembed:     {}", u.oembed_url());

    let m = &u.metadata;
    let fields = [
        ("title", m.title.as_deref()),
        ("author", m.author_name.as_deref()),
        ("author url", m.author_url.as_deref()),
        ("thumbnail", m.thumbnail_url.as_deref()),
        ("about", m.description.as_deref()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{:<11} {value}", format!("{label}:"));
        }
    }
    if let Some(len) = m.length {
        println!("length:     {len}s");
    }

    if let Some(t) = u.created_at() {
        println!("created:    {t}");
    }
    if let Some(t) = u.updated_at() {
        println!("updated:    {t}");
    }
    if let Some(t) = u.deleted_at() {
        println!("removed:    {t}");
    }
    Ok(())
}
