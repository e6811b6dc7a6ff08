use std::{fs::File, path::PathBuf};

use clap::{Parser, Subcommand};
use tokio::time::Instant;
use tracing::{debug, info, Level};

mod reverse;

use reverse::{execute_reverse, ReverseArgs};

/// Small demos built on the `lifo` stack.
#[derive(Parser, Debug)]
#[command(version, about = "Demos for the lifo stack library.")]
struct Cli {
    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Increase log verbosity. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reverse text by pushing each char onto a stack and popping it back off.
    Reverse(ReverseArgs),
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt().with_max_level(log_level(cli.verbose));
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            subscriber.with_writer(file).with_ansi(false).init();
        }
        None => subscriber.with_writer(std::io::stderr).init(),
    }
    debug!("Parsed args: {:?}", cli);

    match cli.command {
        Command::Reverse(args) => execute_reverse(args).await,
    }
}
