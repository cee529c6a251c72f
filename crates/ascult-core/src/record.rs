//! The canonical link record.

use crate::error::UrlError;
use crate::provider::{self, Identity, ProviderKind};

/// Database identifier of a stored link.
pub type UrlId = i64;

/// Descriptive metadata filled in after creation by enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlMetadata {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    /// Duration in seconds.
    pub length: Option<i64>,
}

/// One media item, identified by provider and canonical identity fields.
///
/// `id` and the lifecycle timestamps are assigned by the store; a fresh
/// candidate built with [`CanonicalUrl::new`] has none of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUrl {
    id: Option<UrlId>,
    identity: Identity,
    pub metadata: UrlMetadata,
    created_at: Option<i64>,
    updated_at: Option<i64>,
    deleted_at: Option<i64>,
}

impl CanonicalUrl {
    /// Unpersisted candidate for `identity`.
    pub fn new(identity: Identity) -> Self {
        Self {
            id: None,
            identity,
            metadata: UrlMetadata::default(),
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }

    /// Classifies and decomposes `input` into an unpersisted candidate.
    pub fn from_input(input: &str) -> Result<Self, UrlError> {
        provider::parse(input).map(Self::new)
    }

    /// Rebuilds a stored record. For [`UrlStore`](crate::store::UrlStore)
    /// implementations only.
    pub fn restore(
        id: UrlId,
        identity: Identity,
        metadata: UrlMetadata,
        created_at: i64,
        updated_at: i64,
        deleted_at: Option<i64>,
    ) -> Self {
        Self {
            id: Some(id),
            identity,
            metadata,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            deleted_at,
        }
    }

    pub fn id(&self) -> Option<UrlId> {
        self.id
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn kind(&self) -> ProviderKind {
        self.identity.kind()
    }

    pub fn created_at(&self) -> Option<i64> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<i64> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Canonical link assembled from the identity fields.
    pub fn url(&self) -> String {
        self.identity.assemble()
    }

    /// oEmbed endpoint describing this link. Assembly only; nothing is fetched.
    pub fn oembed_url(&self) -> String {
        let canonical = self.url();
        let link = canonical.as_str();
        let (base, params): (&str, [(&str, &str); 2]) = match self.kind() {
            ProviderKind::YouTube => (
                "https://www.youtube.com/oembed",
                [("url", link), ("format", "json")],
            ),
            ProviderKind::SoundCloud => (
                "https://soundcloud.com/oembed",
                [("format", "json"), ("url", link)],
            ),
            ProviderKind::Mixcloud => (
                "https://www.mixcloud.com/oembed/",
                [("url", link), ("format", "json")],
            ),
        };
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        format!("{base}?{query}")
    }
}
