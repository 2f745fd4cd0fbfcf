use std::io;
use std::process::ExitCode;

use clap::Parser;

use file_downloader::cli::{init_tracing, run, Cli};
use file_downloader::progress::ConsoleWriter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(_) => {
            ConsoleWriter::stdout().write_message("\nDownload completed successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            ConsoleWriter::new(io::stderr()).write_message(&format!("\nError: {}", err));
            ExitCode::from(err.exit_code())
        }
    }
}
