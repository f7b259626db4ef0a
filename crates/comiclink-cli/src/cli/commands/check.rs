//! `comiclink check <message>` – run the hook once.

use anyhow::Result;
use comiclink_core::config::PluginConfig;
use comiclink_core::hook::{ComicHook, HookContext, HookOutcome};
use comiclink_core::post::Post;

pub async fn run_check(cfg: PluginConfig, message: &str) -> Result<()> {
    let hook = ComicHook::from_config(cfg);
    let ctx = HookContext {
        request_id: Some("cli".to_string()),
    };
    match hook.message_will_be_posted(&ctx, Post::new(message)).await {
        HookOutcome::Replace(post) => println!("{}", serde_json::to_string_pretty(&post)?),
        HookOutcome::Pass => println!("unchanged"),
        HookOutcome::Reject(reason) => println!("rejected: {}", reason),
    }
    Ok(())
}
