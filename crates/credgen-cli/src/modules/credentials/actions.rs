use credgen_core::{dispatch, ConsoleCommand, CreateForm, Outcome};

use super::args::{CredentialCommand, ListFormat};
use crate::modules::shared::{render_listing_json, render_outcome, Rendered};
use crate::modules::system::{CommandContext, OutputMode};

/// Maps parsed arguments onto a console command. The list format is the only
/// argument that affects rendering rather than the call itself.
fn console_command(command: CredentialCommand) -> (ConsoleCommand, Option<ListFormat>) {
    match command {
        CredentialCommand::Create(args) => (
            ConsoleCommand::Create(CreateForm {
                principal: args.principal,
                scopes: args.scopes,
                ttl_seconds: args.ttl_seconds,
                length: args.length,
                kind: args.kind,
            }),
            None,
        ),
        CredentialCommand::Status(args) => (ConsoleCommand::CheckStatus { id: args.id }, None),
        CredentialCommand::List(args) => (ConsoleCommand::List, Some(args.format)),
        CredentialCommand::Approve(args) => (ConsoleCommand::Approve { id: args.id }, None),
        CredentialCommand::Revoke(args) => (ConsoleCommand::Revoke { id: args.id }, None),
        CredentialCommand::Reveal(args) => (ConsoleCommand::DebugReveal { id: args.id }, None),
    }
}

pub(crate) async fn handle_credential_command(
    command: CredentialCommand,
    ctx: &CommandContext<'_>,
) -> Rendered {
    let (command, list_format) = console_command(command);
    let outcome = dispatch(command, &*ctx.service).await;
    match (&outcome, list_format, ctx.output) {
        (Outcome::Listing(items), Some(ListFormat::Json), OutputMode::Text) => {
            render_listing_json(items)
        }
        _ => render_outcome(&outcome, ctx.output),
    }
}
