use std::io;
use std::process::ExitCode;

use clap::Parser;
use room_type_cli::{run, Cli, Command, TerminalView, UreqTransport};
use room_type_core::{RoomTypeClient, RoomTypeController};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so they never mix with listings on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let assume_yes = matches!(cli.command, Command::Inactivate { yes: true, .. });

    let view = TerminalView::new(io::stdin().lock(), io::stdout().lock()).assume_yes(assume_yes);
    let mut controller =
        RoomTypeController::new(RoomTypeClient::new(&cli.api_url), UreqTransport::new(), view);

    match run(cli.command, &mut controller) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            Ok(ExitCode::FAILURE)
        }
    }
}
