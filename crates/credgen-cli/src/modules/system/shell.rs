use std::io::{BufRead, Write};

use clap::Parser;
use tracing::info;

use super::args::{ShellCommand, ShellLine};
use super::CommandContext;
use crate::modules::credentials::args::CredentialCommand;
use crate::modules::credentials::handle_credential_command;

const PROMPT: &str = "credgen> ";

pub(crate) enum ShellAction {
    Run(CredentialCommand),
    SetUrl(String),
    ShowUrl,
    Exit,
    Skip,
    Usage(String),
}

/// Splits a prompt line into words. Single and double quotes group words
/// containing spaces; there are no escapes.
pub(crate) fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }
    if let Some(open) = quote {
        return Err(format!("unterminated {open} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

pub(crate) fn parse_shell_line(line: &str) -> ShellAction {
    let words = match split_line(line) {
        Ok(words) => words,
        Err(message) => return ShellAction::Usage(format!("{message}\n")),
    };
    if words.is_empty() {
        return ShellAction::Skip;
    }
    match ShellLine::try_parse_from(words) {
        Ok(parsed) => match parsed.command {
            ShellCommand::Credential(command) => ShellAction::Run(command),
            ShellCommand::SetUrl(args) => ShellAction::SetUrl(args.addr),
            ShellCommand::Url => ShellAction::ShowUrl,
            ShellCommand::Exit => ShellAction::Exit,
        },
        Err(err) => ShellAction::Usage(err.render().to_string()),
    }
}

/// Interactive console over stdin/stdout.
pub(crate) async fn run_shell(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_shell_with(ctx, stdin.lock(), stdout.lock()).await
}

/// Reads commands until `exit` or end of input. A failed command is printed
/// and the session continues; the service address set with `set-url` applies
/// to every later command in the session.
pub(crate) async fn run_shell_with<R, W>(
    ctx: &mut CommandContext<'_>,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Connected to {}. Type 'help' for commands.",
        ctx.service.base_url()
    )?;
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        match parse_shell_line(&line) {
            ShellAction::Run(command) => {
                let rendered = handle_credential_command(command, ctx).await;
                writeln!(out, "{}", rendered.body)?;
            }
            ShellAction::SetUrl(addr) => {
                ctx.service.set_base_url(&addr);
                info!(addr = %ctx.service.base_url(), "service address updated");
                writeln!(out, "URL saved: {}", ctx.service.base_url())?;
            }
            ShellAction::ShowUrl => writeln!(out, "{}", ctx.service.base_url())?,
            ShellAction::Exit => break,
            ShellAction::Skip => {}
            ShellAction::Usage(text) => write!(out, "{text}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_line_honours_quotes() {
        assert_eq!(
            split_line("create --principal 'svc a' --scopes \"read,write\"").expect("split"),
            vec!["create", "--principal", "svc a", "--scopes", "read,write"]
        );
        assert_eq!(split_line("  list  ").expect("split"), vec!["list"]);
        assert_eq!(
            split_line("create --principal ''").expect("split"),
            vec!["create", "--principal", ""]
        );
        assert!(split_line("status 'abc").is_err());
    }

    #[test]
    fn parse_shell_line_maps_commands() {
        assert!(matches!(parse_shell_line(""), ShellAction::Skip));
        assert!(matches!(parse_shell_line("quit"), ShellAction::Exit));
        assert!(matches!(parse_shell_line("url"), ShellAction::ShowUrl));
        assert!(matches!(
            parse_shell_line("set-url http://localhost:8000"),
            ShellAction::SetUrl(addr) if addr == "http://localhost:8000"
        ));
        assert!(matches!(
            parse_shell_line("check-status abc123"),
            ShellAction::Run(CredentialCommand::Status(args)) if args.id == "abc123"
        ));
        assert!(matches!(parse_shell_line("frobnicate"), ShellAction::Usage(_)));
    }
}
