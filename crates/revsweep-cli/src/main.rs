//! The `revsweep` binary: scan the review directories and report files that
//! still need attention.
//!
//! Takes no flags or arguments. Configuration comes from `revsweep.toml` in
//! the working directory and `REVSWEEP_*` environment variables. Findings are
//! a normal outcome: the exit code is 0 unless the scan itself fails.

use std::path::Path;

use revsweep_core::config::SweepConfig;
use revsweep_core::errors::SweepError;
use revsweep_core::tracing::init_tracing;
use revsweep_scan::{render, Scanner};

fn run() -> Result<(), SweepError> {
    let config = SweepConfig::load(Path::new("."))?;
    let base = config.scan.effective_base_dir();

    let scanner = Scanner::new(config.scan);
    let report = scanner.scan()?;

    print!("{}", render(&report, &base));
    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
