//! Errors surfaced by classification, decomposition and canonicalization.

use crate::provider::ProviderKind;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlError {
    /// No supported provider matched the input.
    #[error("not a YouTube, SoundCloud or Mixcloud link: '{input}'")]
    UnrecognizedUrl { input: String },

    /// The provider pattern did not yield identity fields.
    #[error("not a valid {kind} link: '{input}'")]
    InvalidUrlFormat { kind: ProviderKind, input: String },

    /// A provider tag outside the supported set (e.g. a foreign database row).
    #[error("unsupported url type '{0}'")]
    UnsupportedUrlType(String),

    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

impl UrlError {
    /// True for errors the user can fix by supplying a different link.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            UrlError::UnrecognizedUrl { .. } | UrlError::InvalidUrlFormat { .. }
        )
    }
}

impl From<StoreError> for UrlError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict => {
                UrlError::Persistence(anyhow::anyhow!("unresolved identity conflict"))
            }
            // Row decoding reports unknown provider tags as UrlError.
            StoreError::Other(e) => match e.downcast::<UrlError>() {
                Ok(inner) => inner,
                Err(e) => UrlError::Persistence(e),
            },
        }
    }
}
