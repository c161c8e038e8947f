use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::credentials::args::*;

#[derive(Parser)]
#[command(name = "credgen")]
#[command(about = "Credential issuance console")]
pub struct Cli {
    #[arg(long, env = "CREDGEN_ADDR", help = "Credential service base URL")]
    pub addr: Option<String>,
    #[arg(long, env = "CREDGEN_TIMEOUT", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Print outcomes as JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Credential(CredentialCommand),
    #[command(about = "Start an interactive console session")]
    Shell,
}
