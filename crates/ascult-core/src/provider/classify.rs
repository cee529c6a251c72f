//! Classification and decomposition of raw link strings.

use super::{Identity, ProviderKind};
use crate::error::UrlError;
use regex::bytes::Captures;

/// Determines which provider `input` belongs to.
///
/// Patterns are tried in [`ProviderKind::ALL`] order and the first match
/// wins. Total: any string, including an empty one, yields a result.
pub fn classify(input: &str) -> Option<ProviderKind> {
    ProviderKind::ALL
        .into_iter()
        .find(|kind| kind.pattern().is_match(input.as_bytes()))
}

/// Extracts the canonical identity of `input` for an already chosen provider.
///
/// Fails with [`UrlError::InvalidUrlFormat`] if the provider pattern does not
/// match; callers must not assume a successful [`classify`] implies success.
pub fn decompose(kind: ProviderKind, input: &str) -> Result<Identity, UrlError> {
    let invalid = || UrlError::InvalidUrlFormat {
        kind,
        input: input.to_string(),
    };
    let caps = kind
        .pattern()
        .captures(input.as_bytes())
        .ok_or_else(invalid)?;
    let field = |name: &str| capture(input, &caps, name).ok_or_else(invalid);

    let identity = match kind {
        ProviderKind::YouTube => Identity::YouTube {
            identifier: field("id")?,
        },
        ProviderKind::SoundCloud => Identity::SoundCloud {
            user: field("user")?,
            track: field("track")?,
        },
        ProviderKind::Mixcloud => Identity::Mixcloud {
            user: field("user")?,
            mix: field("mix")?,
        },
    };
    Ok(identity)
}

/// Classifies then decomposes `input`.
pub fn parse(input: &str) -> Result<Identity, UrlError> {
    let kind = classify(input).ok_or_else(|| UrlError::UnrecognizedUrl {
        input: input.to_string(),
    })?;
    let identity = decompose(kind, input)?;
    tracing::debug!(%identity, "decomposed link");
    Ok(identity)
}

/// Named capture as a slice of `input`. Groups are delimited by ASCII bytes
/// or the end of input, so their bounds are always char boundaries.
fn capture(input: &str, caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name)
        .and_then(|m| input.get(m.range()))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
