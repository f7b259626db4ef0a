//! CLI for comiclink: a stand-in host that feeds messages through the hook.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use comiclink_core::config::{PluginConfig, ResolverBackend};

use commands::{run_check, run_lookup, run_show_config};

/// Top-level CLI for comiclink.
#[derive(Debug, Parser)]
#[command(name = "comiclink")]
#[command(about = "comiclink: attach xkcd previews to chat messages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Resolver strategy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Json,
    Html,
}

impl From<BackendArg> for ResolverBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Json => ResolverBackend::Json,
            BackendArg::Html => ResolverBackend::Html,
        }
    }
}

/// Settings that override config.toml for a single invocation.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Resolver to use instead of the configured one.
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Endpoint root to use instead of the configured one (e.g. a local mirror).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Overrides {
    pub fn apply(&self, mut cfg: PluginConfig) -> Result<PluginConfig> {
        if let Some(backend) = self.backend {
            cfg.resolver = backend.into();
        }
        if let Some(base_url) = &self.base_url {
            cfg.base_url = base_url.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run one message through the hook and print the resulting post.
    Check {
        /// Message text as a user would post it.
        message: String,

        /// Only trigger when the whole message is the comic URL.
        #[arg(long)]
        strict: bool,

        /// Log each hook step.
        #[arg(long)]
        debug: bool,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Resolve a single comic by number and print what the resolver returns.
    Lookup {
        /// Comic number, e.g. 2057.
        id: String,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    /// Fold this invocation's flags and overrides into the loaded config.
    pub fn effective_config(&self, cfg: PluginConfig) -> Result<PluginConfig> {
        match self {
            CliCommand::Check {
                strict,
                debug,
                overrides,
                ..
            } => {
                let mut cfg = overrides.apply(cfg)?;
                cfg.strict_trigger |= *strict;
                cfg.debug |= *debug;
                Ok(cfg)
            }
            CliCommand::Lookup { overrides, .. } => overrides.apply(cfg),
            CliCommand::Config => Ok(cfg),
        }
    }

    pub async fn run(self, cfg: PluginConfig) -> Result<()> {
        tracing::debug!("effective config: {:?}", cfg);

        match self {
            CliCommand::Check { message, .. } => run_check(cfg, &message).await?,
            CliCommand::Lookup { id, .. } => run_lookup(&cfg, &id).await?,
            CliCommand::Config => run_show_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
