use clap::{Args, Parser, Subcommand};

use crate::modules::credentials::args::CredentialCommand;

/// One line typed at the interactive prompt.
#[derive(Parser)]
#[command(name = "credgen", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    #[command(flatten)]
    Credential(CredentialCommand),
    #[command(about = "Point the console at another service address")]
    SetUrl(SetUrlArgs),
    #[command(about = "Print the current service address")]
    Url,
    #[command(alias = "quit", about = "Leave the console")]
    Exit,
}

#[derive(Args)]
pub struct SetUrlArgs {
    #[arg(help = "Service base URL")]
    pub addr: String,
}
