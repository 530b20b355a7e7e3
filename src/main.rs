//! SLM entry point: parses flags and hands over to the bootstrap.

use std::process;

use clap::Parser;
use slm::{
    SlmError,
    bootstrap::{self, Dispatcher},
    cli::{Args, ConsoleFrontEnd, formatting::format_error},
};

const PLATFORM_ABORT_MESSAGE: &str =
    "failed to get executable directory, please ensure app has sufficient permissions. aborting";

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let dispatcher = Dispatcher::new(Box::new(ConsoleFrontEnd::new()));

    if let Err(e) = bootstrap::run(args, dispatcher).await {
        let message = match e {
            SlmError::Platform(_) => PLATFORM_ABORT_MESSAGE.to_string(),
            other => other.to_string(),
        };

        eprintln!("{}", format_error(&message));
        process::exit(1);
    }
}
