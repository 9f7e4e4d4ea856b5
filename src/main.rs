//! email-metadata: walk a directory of mime encoded email files and dump
//! envelope metadata as CSV on stdout.

use clap::Parser;
use email_metadata::scan;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory to scan recursively
    dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "email_metadata=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match scan(&args.dir, io::stdout().lock()) {
        Ok(summary) => {
            info!(
                "Scanned {}: {} rows, {} skipped",
                args.dir.display(),
                summary.rows,
                summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
