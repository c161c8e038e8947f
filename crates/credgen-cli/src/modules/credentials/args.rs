use clap::{Args, Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum CredentialCommand {
    #[command(about = "Request a new credential")]
    Create(CreateArgs),
    #[command(
        alias = "check-status",
        about = "Check a request by ID and fetch its secret once approved"
    )]
    Status(IdArgs),
    #[command(about = "List all credentials (admin)")]
    List(ListArgs),
    #[command(about = "Approve a pending request (admin)")]
    Approve(IdArgs),
    #[command(about = "Revoke a credential (admin)")]
    Revoke(IdArgs),
    #[command(
        alias = "debug-reveal",
        about = "Decrypt a stored secret through the debug endpoint (admin)"
    )]
    Reveal(IdArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long, default_value = "", help = "Identity the credential is issued to")]
    pub principal: String,
    #[arg(long, default_value = "", help = "Comma-separated scopes, e.g. read,write:db")]
    pub scopes: String,
    #[arg(long = "ttl", default_value = "3600", allow_hyphen_values = true)]
    pub ttl_seconds: String,
    #[arg(long, default_value = "40", allow_hyphen_values = true)]
    pub length: String,
    #[arg(long = "type", help = "Credential type (service default: api_key)")]
    pub kind: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Credential or request ID")]
    pub id: String,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value = "table")]
    pub format: ListFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}
