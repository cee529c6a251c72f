//! Provider link patterns.
//!
//! These are unanchored substring matches: a string that merely contains a
//! provider host followed by the expected path shape is accepted, whatever
//! surrounds it. Pasted links frequently carry extra text, and existing
//! stored identities were derived with exactly these patterns, so they must
//! not be tightened.
//!
//! Matching is byte-oriented (`regex::bytes`, Unicode off): the unescaped
//! host `.` consumes exactly one byte and case folding is ASCII only, so a
//! multi-byte character never stands in for the dot.

use regex::bytes::Regex as BytesRegex;
use regex::Regex;
use std::sync::LazyLock;

/// `youtube.com/watch?...v=<id>`; `<id>` runs up to the next `&`, `#` or `/`.
/// Case-insensitive.
pub(crate) static YOUTUBE: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r"(?i-u)youtube.com/watch\?(.*&)?v=(?P<id>[^&#/]+)").expect("youtube pattern")
});

/// `soundcloud.com/<user>/<track>`; each segment excludes `/`, `?` and `#`.
pub(crate) static SOUNDCLOUD: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r"(?-u)soundcloud.com/(?P<user>[^/?#]+)/(?P<track>[^/?#]+)")
        .expect("soundcloud pattern")
});

/// `mixcloud.com/<user>/<mix>`; same segment rule as SoundCloud.
pub(crate) static MIXCLOUD: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r"(?-u)mixcloud.com/(?P<user>[^/?#]+)/(?P<mix>[^/?#]+)").expect("mixcloud pattern")
});

/// Anchored form check for YouTube links (optional scheme and `www.`,
/// `youtube.com` or `youtu.be`, then `/watch?v=<id>`). Advisory only.
static YOUTUBE_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?:https?://)?             # optional protocol
         (?:www\.)?                 # optional subdomain
         (?:youtube\.com|youtu\.be) # domain
         /watch\?v=([^&]+)          # video id
        ",
    )
    .expect("strict youtube pattern")
});

/// Returns true if `input` is a well-formed YouTube watch link.
///
/// This never influences classification; it only lets callers warn about
/// links that were accepted by the permissive pattern but look unusual.
pub fn is_strict_youtube_link(input: &str) -> bool {
    YOUTUBE_STRICT.is_match(input)
}
