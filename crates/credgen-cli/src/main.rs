use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;


use crate::cli_args::Cli;
use crate::cli_command::handle_command;
use crate::modules::credentials::HttpCredentialService;
use crate::modules::system::{CommandContext, OutputMode, ServiceConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = ServiceConfig::resolve(cli.addr, cli.timeout);
    let mut service = HttpCredentialService::new(config)?;
    let mut ctx = CommandContext {
        service: &mut service,
        output: if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
    };

    let succeeded = handle_command(cli.command, &mut ctx).await?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
