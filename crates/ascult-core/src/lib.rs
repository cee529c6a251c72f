pub mod canonical;
pub mod config;
pub mod enrich;
pub mod error;
pub mod logging;
pub mod provider;
pub mod record;
pub mod store;

pub use canonical::{Canonicalized, Canonicalizer};
pub use error::UrlError;
pub use provider::{Identity, ProviderKind};
pub use record::{CanonicalUrl, UrlMetadata};
