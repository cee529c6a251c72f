//! `ascult classify <url>` – print provider, identity and canonical forms.

use anyhow::Result;
use ascult_core::provider::{classify, decompose, is_strict_youtube_link, ProviderKind};
use ascult_core::{CanonicalUrl, UrlError};

pub fn run_classify(input: &str) -> Result<()> {
    let Some(kind) = classify(input) else {
        return Err(UrlError::UnrecognizedUrl {
            input: input.to_string(),
        }
        .into());
    };
    let identity = decompose(kind, input)?;
    let record = CanonicalUrl::new(identity);

    println!("provider:  {kind}");
    println!("identity:  {}", record.identity());
    println!("canonical: {}", record.url());
    println!("oembed:    {}", record.oembed_url());
    if kind == ProviderKind::YouTube && !is_strict_youtube_link(input) {
        println!("note: accepted by loose matching only");
    }
    Ok(())
}
