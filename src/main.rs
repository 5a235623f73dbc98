// ============================================================
// File: main.rs
//
// Description:
//   Entry point for the txkv command-line front end. Parses the
//   command-line options, installs logging on stderr, creates
//   one in-memory Database and hands stdin/stdout to the REPL.
//
//   Nothing is persisted: all data is gone when the program exits.
// ============================================================
use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use txkv::{Database, database::DEFAULT_NAME, repl_loop};

/// Interactive in-memory key-value store with transactions.
#[derive(Parser)]
#[command(name = "txkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database name shown in log output
    #[arg(short, long, default_value = DEFAULT_NAME)]
    name: String,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}


fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!("Key Value Store");

    let mut db = Database::new(cli.name);
    tracing::info!(db = db.name(), "database ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl_loop(stdin.lock(), &mut stdout, &mut db)
}
