//! Pre-commit message hook.
//!
//! On every post the host is about to persist: find a comic reference, resolve
//! it, and attach a preview. Any failure along the way lets the post through
//! untouched; the hook never rejects a post.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::attachment;
use crate::comic::ResolvedComic;
use crate::config::{ConfigSource, PluginConfig};
use crate::config_store::ConfigStore;
use crate::matcher::{self, ComicReference};
use crate::post::Post;
use crate::resolver::{self, Resolver};

/// Per-invocation information supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct HookContext {
    pub request_id: Option<String>,
}

/// What the host should do with the post.
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    /// Persist the original post unchanged.
    Pass,
    /// Persist this post instead.
    Replace(Post),
    /// Refuse the post with a reason.
    Reject(String),
}

impl HookOutcome {
    /// The host's `(replacement, rejection reason)` pair; an empty reason means accepted.
    pub fn into_parts(self) -> (Option<Post>, String) {
        match self {
            HookOutcome::Pass => (None, String::new()),
            HookOutcome::Replace(post) => (Some(post), String::new()),
            HookOutcome::Reject(reason) => (None, reason),
        }
    }
}

pub struct ComicHook {
    store: Arc<ConfigStore>,
    resolver: Arc<dyn Resolver>,
}

impl ComicHook {
    pub fn new(store: Arc<ConfigStore>, resolver: Arc<dyn Resolver>) -> Self {
        Self { store, resolver }
    }

    /// Hook with its resolver chosen by `cfg`, which also seeds the store.
    pub fn from_config(cfg: PluginConfig) -> Self {
        let resolver = resolver::resolver_for(&cfg);
        Self::new(Arc::new(ConfigStore::with_config(cfg)), resolver)
    }

    pub fn config_store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Reload configuration after the host signals a change.
    pub fn on_configuration_change(&self, source: &dyn ConfigSource) -> Result<()> {
        let cfg = source
            .load_plugin_configuration()
            .context("failed to load plugin configuration")?;
        self.store.set(Arc::new(cfg));
        Ok(())
    }

    /// Called before `post` is committed.
    pub async fn message_will_be_posted(&self, ctx: &HookContext, mut post: Post) -> HookOutcome {
        let cfg = self.store.get();
        let debug = cfg.debug;
        if debug {
            tracing::debug!(request_id = ?ctx.request_id, "message received - processing");
        }

        let Some(reference) = matcher::find_reference(&post.message, cfg.strict_trigger) else {
            if debug {
                tracing::debug!("no comic URL found - skipping");
            }
            return HookOutcome::Pass;
        };
        if debug {
            tracing::debug!(
                "comic URL {} found - fetching info for comic {}",
                reference.raw_url,
                reference.identifier
            );
        }

        let Some(comic) = self.resolve(reference, debug).await else {
            return HookOutcome::Pass;
        };

        attachment::enrich_post(&mut post, &comic);
        if debug {
            tracing::debug!("post modified with preview for comic {}", comic);
        }
        HookOutcome::Replace(post)
    }

    /// Run the blocking lookup off the async executor. None on any failure.
    async fn resolve(&self, reference: ComicReference, debug: bool) -> Option<ResolvedComic> {
        let resolver = Arc::clone(&self.resolver);
        let identifier = reference.identifier.clone();
        let joined = tokio::task::spawn_blocking(move || resolver.resolve(&reference)).await;

        match joined {
            Ok(Ok(comic)) => {
                if debug {
                    tracing::debug!("comic {} resolved: {}", identifier, comic.image_url());
                }
                Some(comic)
            }
            Ok(Err(e)) => {
                if debug {
                    tracing::debug!(kind = ?e.kind(), "lookup for comic {} failed: {}", identifier, e);
                }
                None
            }
            Err(e) => {
                tracing::warn!("lookup task for comic {} did not complete: {}", identifier, e);
                None
            }
        }
    }
}
