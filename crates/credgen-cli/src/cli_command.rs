use crate::cli_args::*;
use crate::modules::credentials::handle_credential_command;
use crate::modules::system::{run_shell, CommandContext};

/// Runs one top-level command. Returns whether it succeeded; a failed
/// credential command has already been reported on stderr.
pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<bool> {
    match command {
        Command::Credential(command) => {
            let rendered = handle_credential_command(command, ctx).await;
            if rendered.failed {
                eprintln!("{}", rendered.body);
            } else {
                println!("{}", rendered.body);
            }
            Ok(!rendered.failed)
        }
        Command::Shell => {
            run_shell(ctx).await?;
            Ok(true)
        }
    }
}
