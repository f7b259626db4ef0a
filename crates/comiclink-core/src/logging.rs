//! Logging init driven by the plugin configuration.
//!
//! `RUST_LOG` picks the base filter (default `info`). With `debug = true` the
//! crate's own targets are raised to `debug` on top of whatever base is in
//! effect, so each hook step shows up in the log.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::PluginConfig;

const BASE_FILTER: &str = "info";
const DEBUG_TARGETS: &[&str] = &["comiclink", "comiclink_core"];

/// Directive string for `EnvFilter`: `base`, plus per-crate `debug` when asked.
pub fn filter_directives(base: &str, debug: bool) -> String {
    let mut directives = base.trim().trim_matches(',').to_string();
    if debug {
        for target in DEBUG_TARGETS {
            if !directives.is_empty() {
                directives.push(',');
            }
            directives.push_str(target);
            directives.push_str("=debug");
        }
    }
    directives
}

fn env_filter(cfg: &PluginConfig) -> EnvFilter {
    let base = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| BASE_FILTER.to_string());
    let directives = filter_directives(&base, cfg.debug);
    EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter {:?}: {}", directives, err);
        EnvFilter::new(filter_directives(BASE_FILTER, cfg.debug))
    })
}

/// Log to `$XDG_STATE_HOME/comiclink/comiclink.log`.
///
/// Errors when the state dir is unusable; callers fall back to [`init_logging_stderr`].
pub fn init_logging(cfg: &PluginConfig) -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("comiclink")?;
    let log_dir = xdg_dirs.get_state_home().join("comiclink");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("comiclink.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))?;

    tracing::info!(
        debug = cfg.debug,
        "comiclink logging initialized at {}",
        log_file_path.display()
    );

    Ok(())
}

/// Log to stderr only.
pub fn init_logging_stderr(cfg: &PluginConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(filter_directives(BASE_FILTER, false), "info");
    }

    #[test]
    fn debug_raises_own_targets() {
        let directives = filter_directives(BASE_FILTER, true);
        assert_eq!(directives, "info,comiclink=debug,comiclink_core=debug");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn debug_extends_custom_base() {
        assert_eq!(
            filter_directives("warn,curl=trace,", true),
            "warn,curl=trace,comiclink=debug,comiclink_core=debug"
        );
        assert_eq!(
            filter_directives("", true),
            "comiclink=debug,comiclink_core=debug"
        );
    }

    #[test]
    fn custom_base_kept_without_debug() {
        assert_eq!(filter_directives(" warn ", false), "warn");
    }
}
