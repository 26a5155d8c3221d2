mod args;
mod commands;
pub mod config;
mod handlers;
pub mod log;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
