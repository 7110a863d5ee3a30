use refmsdn_core::logging;

mod cli;

use crate::cli::{Cli, UsageError};

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        match err.downcast_ref::<UsageError>() {
            Some(usage) => eprint!("{}", usage),
            None => eprintln!("ref-msdn error: {:#}", err),
        }
        std::process::exit(1);
    }
}
