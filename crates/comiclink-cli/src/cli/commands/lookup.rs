//! `comiclink lookup <id>` – resolve one comic.

use anyhow::{Context, Result};
use comiclink_core::attachment::canonical_link;
use comiclink_core::comic::ResolvedComic;
use comiclink_core::config::PluginConfig;
use comiclink_core::matcher;
use comiclink_core::resolver;

pub async fn run_lookup(cfg: &PluginConfig, id: &str) -> Result<()> {
    let reference = matcher::find_reference(&canonical_link(id), true)
        .ok_or_else(|| anyhow::anyhow!("not a comic number: {}", id))?;
    let resolver = resolver::resolver_for(cfg);
    let comic = tokio::task::spawn_blocking(move || resolver.resolve(&reference))
        .await
        .context("lookup task join")?
        .with_context(|| format!("lookup comic {}", id))?;

    println!("{}", serde_json::to_string_pretty(&comic)?);
    if let ResolvedComic::Metadata(m) = &comic {
        if let Some(date) = m.published.to_iso() {
            println!("published {}", date);
        }
    }
    Ok(())
}
