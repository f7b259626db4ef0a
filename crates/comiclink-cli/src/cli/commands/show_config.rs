//! `comiclink config` – print config location and values.

use anyhow::Result;
use comiclink_core::config::{self, PluginConfig};

pub fn run_show_config(cfg: &PluginConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    println!("strict_trigger = {}", cfg.strict_trigger);
    println!("debug = {}", cfg.debug);
    println!("resolver = {:?}", cfg.resolver);
    println!("base_url = {}", cfg.base_url);
    Ok(())
}
