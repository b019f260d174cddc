//! Shell scripts need a way to emit a line in the same layout as the applications
//! they wrap.
//!
//! Usage:
//!   linelog info "service started"
//!   linelog --format warn "disk at %d%%" 91
//!   linelog raw "[E] already tagged"

use clap::Parser;
use linelog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
