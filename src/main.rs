mod cli;
mod db;
mod execution;
mod query;

use cli::{commands, config::RunConfig, error::AthenaViewsError, output, ux, Parser};
use execution::RunSummary;
use tracing::Instrument;


async fn run_command(args: &cli::Cli) -> Result<RunSummary, AthenaViewsError> {
    let config = RunConfig::from_cli(args)?;
    commands::run(&config).await
}


/// Entry point for the athena-views CLI tool.
///
/// Resolves parameters from flags or `INPUT_*` environment variables, finds
/// every `.sql` file under `--path` and executes each one in Athena, waiting
/// for it to finish. Exits non-zero if any query did not succeed.
#[tokio::main]
async fn main() {
    let args: cli::Cli = cli::Cli::parse();

    if let Err(e) = ux::setup_logging(args.verbose, args.quiet) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let span = tracing::info_span!("cmd", name = cli::CMD_NAME);
    let result = run_command(&args).instrument(span).await;
    let output = output::AthenaViewsOutput::from_result(result);

    if args.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize output: {e}"),
        }
    } else {
        ux::render_human_output(&output);
    }

    if let output::AthenaViewsStatus::Error = output.status {
        std::process::exit(1);
    }
}
