//! Canonical identity of a media item within its provider.

use super::ProviderKind;
use std::fmt;

/// The minimal set of fields that determines a media item.
///
/// Immutable once built; a stored record never changes its identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    YouTube { identifier: String },
    SoundCloud { user: String, track: String },
    Mixcloud { user: String, mix: String },
}

impl Identity {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Identity::YouTube { .. } => ProviderKind::YouTube,
            Identity::SoundCloud { .. } => ProviderKind::SoundCloud,
            Identity::Mixcloud { .. } => ProviderKind::Mixcloud,
        }
    }

    /// Reassembles a canonical link from the identity fields.
    ///
    /// Scheme, host and trailing slash are normalized; identity fields are
    /// copied verbatim, so the result decomposes back to the same identity.
    pub fn assemble(&self) -> String {
        match self {
            Identity::YouTube { identifier } => {
                format!("https://www.youtube.com/watch?v={identifier}")
            }
            Identity::SoundCloud { user, track } => format!("https://soundcloud.com/{user}/{track}"),
            Identity::Mixcloud { user, mix } => format!("https://www.mixcloud.com/{user}/{mix}/"),
        }
    }

    /// Identity as two storage columns. Single-field identities use an empty
    /// secondary column so the unique index never sees NULLs.
    pub(crate) fn key_columns(&self) -> (&str, &str) {
        match self {
            Identity::YouTube { identifier } => (identifier, ""),
            Identity::SoundCloud { user, track } => (user, track),
            Identity::Mixcloud { user, mix } => (user, mix),
        }
    }

    pub(crate) fn from_key_columns(kind: ProviderKind, primary: String, secondary: String) -> Self {
        match kind {
            ProviderKind::YouTube => Identity::YouTube {
                identifier: primary,
            },
            ProviderKind::SoundCloud => Identity::SoundCloud {
                user: primary,
                track: secondary,
            },
            ProviderKind::Mixcloud => Identity::Mixcloud {
                user: primary,
                mix: secondary,
            },
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::YouTube { identifier } => write!(f, "youtube:{identifier}"),
            Identity::SoundCloud { user, track } => write!(f, "soundcloud:{user}/{track}"),
            Identity::Mixcloud { user, mix } => write!(f, "mixcloud:{user}/{mix}"),
        }
    }
}
