//! Comic data produced by the resolvers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a scraped comic image carries no `title` attribute.
pub const DEFAULT_IMAGE_TITLE: &str = "xkcd comic";

/// Publication date as the endpoint reports it (decimal strings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedDate {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
}

impl PublishedDate {
    /// `YYYY-MM-DD`, or None when any part is missing or not numeric.
    pub fn to_iso(&self) -> Option<String> {
        let year: u16 = self.year.trim().parse().ok()?;
        let month: u8 = self.month.trim().parse().ok()?;
        let day: u8 = self.day.trim().parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(format!("{:04}-{:02}-{:02}", year, month, day))
    }
}

/// Decoded `info.0.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicMetadata {
    #[serde(rename = "num")]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub safe_title: String,
    #[serde(rename = "img", default)]
    pub image_url: String,
    #[serde(rename = "alt", default)]
    pub alt_text: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub news: String,
    #[serde(flatten)]
    pub published: PublishedDate,
}

impl ComicMetadata {
    /// Human-readable title, preferring the safe variant.
    pub fn display_title(&self) -> &str {
        if self.safe_title.is_empty() {
            &self.title
        } else {
            &self.safe_title
        }
    }
}

/// Image reference scraped from the rendered comic page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComicImage {
    /// Comic number taken from the message reference.
    pub id: String,
    /// Absolute image URL.
    pub image_url: String,
    /// The image's `title` attribute or [`DEFAULT_IMAGE_TITLE`].
    pub title: String,
    pub alt: Option<String>,
}

/// What a resolver hands back for one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedComic {
    Metadata(ComicMetadata),
    Image(ComicImage),
}

impl ResolvedComic {
    pub fn image_url(&self) -> &str {
        match self {
            ResolvedComic::Metadata(m) => &m.image_url,
            ResolvedComic::Image(i) => &i.image_url,
        }
    }
}

impl fmt::Display for ResolvedComic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedComic::Metadata(m) => write!(f, "#{} {}", m.id, m.display_title()),
            ResolvedComic::Image(i) => write!(f, "#{} {}", i.id, i.image_url),
        }
    }
}
