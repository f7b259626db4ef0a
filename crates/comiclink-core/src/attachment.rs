//! Build the comic preview attachment and merge it into a post.

use serde_json::Value;
use std::fmt::Display;

use crate::comic::ResolvedComic;
use crate::post::{Attachment, Post, ATTACHMENTS_PROP};

/// Prefix of every preview title.
pub const TITLE_PREFIX: &str = "XKCD Comic - ";

/// Property set to `true` on enriched posts.
pub const ENRICHED_PROP: &str = "xkcd";

/// Canonical comic page, independent of the endpoint used for lookups.
pub fn canonical_link(id: impl Display) -> String {
    format!("https://xkcd.com/{}/", id)
}

/// The preview block for one resolved comic.
pub fn preview_attachment(comic: &ResolvedComic) -> Attachment {
    match comic {
        ResolvedComic::Metadata(m) => Attachment {
            title: format!("{}{}", TITLE_PREFIX, m.display_title()),
            title_link: canonical_link(m.id),
            image_url: m.image_url.clone(),
            text: m.alt_text.clone(),
            ..Attachment::default()
        },
        ResolvedComic::Image(img) => {
            let name = img
                .alt
                .clone()
                .unwrap_or_else(|| format!("#{}", img.id));
            Attachment {
                title: format!("{}{}", TITLE_PREFIX, name),
                title_link: canonical_link(&img.id),
                image_url: img.image_url.clone(),
                text: img.title.clone(),
                ..Attachment::default()
            }
        }
    }
}

/// Drop absent entries from `existing`, keep the rest in order, append `preview`.
///
/// Earlier comic previews are not deduplicated.
pub fn merge_attachments(
    existing: Vec<Option<Attachment>>,
    preview: Attachment,
) -> Vec<Attachment> {
    let mut merged: Vec<Attachment> = existing.into_iter().flatten().collect();
    merged.push(preview);
    merged
}

pub fn build(existing: Vec<Option<Attachment>>, comic: &ResolvedComic) -> Vec<Attachment> {
    merge_attachments(existing, preview_attachment(comic))
}

/// Flag `post` as enriched and replace its attachment list with the merged one.
pub fn enrich_post(post: &mut Post, comic: &ResolvedComic) {
    post.add_prop(ENRICHED_PROP, true);
    let merged = build(post.attachments(), comic);
    post.add_prop(
        ATTACHMENTS_PROP,
        Value::Array(merged.into_iter().map(Value::from).collect()),
    );
}
