mod actions;
pub(crate) mod args;
mod http;
mod types;

pub(crate) use actions::handle_credential_command;
pub use http::HttpCredentialService;
