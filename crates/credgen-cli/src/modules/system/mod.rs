pub(crate) mod args;
pub(crate) mod config;
mod shell;
pub(crate) mod types;

pub(crate) use config::{normalize_base_url, ServiceConfig};
pub(crate) use shell::run_shell;
#[cfg(test)]
pub(crate) use shell::run_shell_with;
pub(crate) use types::{CommandContext, OutputMode};
