//! LOGOGEN CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch,
//! and exit with a failure status only when the source logo is missing.
//! For programmatic use, prefer the library API (`logogen::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
