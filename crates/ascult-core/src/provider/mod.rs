//! Media provider detection and link decomposition.
//!
//! A raw string is first classified into one of the supported providers
//! (YouTube, SoundCloud, Mixcloud), then decomposed into the provider's
//! canonical identity fields. Both steps are pure.

mod classify;
mod identity;
mod pattern;

pub use classify::{classify, decompose, parse};
pub use identity::Identity;
pub use pattern::is_strict_youtube_link;

use crate::error::UrlError;
use regex::bytes::Regex;
use std::fmt;
use std::str::FromStr;

/// Supported media provider. Closed set: adding a provider means adding a
/// variant, a pattern and an [`Identity`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    YouTube,
    SoundCloud,
    Mixcloud,
}

impl ProviderKind {
    /// Classification priority order.
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::YouTube,
        ProviderKind::SoundCloud,
        ProviderKind::Mixcloud,
    ];

    /// Stable lowercase tag, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::YouTube => "youtube",
            ProviderKind::SoundCloud => "soundcloud",
            ProviderKind::Mixcloud => "mixcloud",
        }
    }

    pub(crate) fn pattern(self) -> &'static Regex {
        match self {
            ProviderKind::YouTube => &pattern::YOUTUBE,
            ProviderKind::SoundCloud => &pattern::SOUNDCLOUD,
            ProviderKind::Mixcloud => &pattern::MIXCLOUD,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::YouTube => "YouTube",
            ProviderKind::SoundCloud => "SoundCloud",
            ProviderKind::Mixcloud => "Mixcloud",
        };
        f.write_str(label)
    }
}

impl FromStr for ProviderKind {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(ProviderKind::YouTube),
            "soundcloud" => Ok(ProviderKind::SoundCloud),
            "mixcloud" => Ok(ProviderKind::Mixcloud),
            other => Err(UrlError::UnsupportedUrlType(other.to_string())),
        }
    }
}
