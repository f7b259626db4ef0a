//! CLI command handlers, one per file.

mod check;
mod lookup;
mod show_config;

pub use check::run_check;
pub use lookup::run_lookup;
pub use show_config::run_show_config;
