pub mod config;
pub mod config_store;
pub mod logging;

pub mod attachment;
pub mod comic;
pub mod hook;
pub mod http;
pub mod matcher;
pub mod post;
pub mod resolver;
