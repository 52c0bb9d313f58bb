//! Sorts its integer arguments and prints them space-separated.
//!
//! Usage: `insort [int ...]`
//!
//! Exit code 0 on success (zero arguments print a bare newline), 1 if memory
//! for a list node cannot be obtained, in which case nothing is printed.
//! Diagnostics go to stderr via `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let line = match insort::sorted_line(env::args().skip(1)) {
        Ok(line) => line,
        Err(err) => {
            // The list has already been dropped, releasing every node.
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = io::stdout().write_all(line.as_bytes()) {
        log::error!("cannot write output: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
