// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, set up logging, create an API
//   client and hand the command to `cli::run`.
// - Returns `anyhow::Result` so a transport failure is reported once and
//   the process exits non-zero. API refusals and input mistakes are
//   printed by the handlers and end with a normal exit.

use alquran_cli::{api::ApiClient, cli::{self, Cli}, ui};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so they never interleave with the text on stdout.
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let api = ApiClient::new()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(args.command, &api, &mut out, ui::terminal_width())
}
