// Binary entry point for hblog
// This is a thin wrapper that delegates to the library implementation

use std::process::ExitCode;

fn main() -> ExitCode {
    match hbtools_logger::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hblog fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
