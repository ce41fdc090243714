//! CLI entry point for dirtree

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtree::{StreamingFormatter, TreeError, TreeWalker, WalkerConfig};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory tree as indented text")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Report unreadable subdirectories on stderr and keep going
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help and --version
            let _ = e.print();
            process::exit(0);
        }
        eprintln!("dirtree: argument parsing error: {}", e);
        process::exit(1);
    });

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(args.verbose))
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let config = if args.keep_going {
        WalkerConfig::keep_going()
    } else {
        WalkerConfig::default()
    };

    let stdout = io::stdout();
    let mut formatter =
        StreamingFormatter::new(stdout.lock()).with_diagnostics(Box::new(io::stderr()));
    let result = TreeWalker::new(config).walk(&args.path, &mut formatter);

    let mut out = formatter.into_inner();
    let flushed = out.flush();

    match result {
        Ok(summary) => {
            tracing::info!(
                dirs = summary.dir_count,
                files = summary.file_count,
                skipped = summary.skipped_dirs,
                "done"
            );
        }
        Err(TreeError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("dirtree: {}", e);
            process::exit(1);
        }
    }

    if let Err(e) = flushed {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("dirtree: error writing output: {}", e);
            process::exit(1);
        }
    }
}
