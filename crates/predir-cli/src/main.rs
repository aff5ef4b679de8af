mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Logging is initialized per command once arguments are parsed.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("predir error: {:#}", err);
        std::process::exit(1);
    }
}
