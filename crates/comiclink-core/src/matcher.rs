//! Find xkcd comic links in free-form message text.
//!
//! Recognizes `[http[s]://]xkcd.com/<digits>[/]`. The host match is
//! case-sensitive and digits are ASCII only.

use regex::Regex;
use std::sync::LazyLock;

static LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://)?xkcd\.com/(?P<id>[0-9]+)/?").expect("valid regex")
});

static STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?xkcd\.com/(?P<id>[0-9]+)/?$").expect("valid regex")
});

/// A comic link found in a message. Lives only for one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicReference {
    /// The matched substring, e.g. `https://xkcd.com/2057/`.
    pub raw_url: String,
    /// Decimal digits of the comic number, passed through unvalidated.
    pub identifier: String,
}

/// Extract the first comic reference from `text`.
///
/// In strict mode the whole text must be the link (no trimming); otherwise
/// the first match anywhere in the text wins.
pub fn find_reference(text: &str, strict: bool) -> Option<ComicReference> {
    let re = if strict { &*STRICT } else { &*LOOSE };
    let caps = re.captures(text)?;
    let raw_url = caps.get(0)?.as_str().to_string();
    let identifier = caps.name("id")?.as_str().to_string();
    Some(ComicReference {
        raw_url,
        identifier,
    })
}
