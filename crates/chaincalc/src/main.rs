//! chaincalc: chained-operator calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! chaincalc                        # Interactive keypad
//! chaincalc --eval "12*3-6="       # Print -30 (6 - 36) and exit
//! chaincalc --no-keypad --log debug
//! ```

use std::process::ExitCode;

use chaincalc::core::CalcResult;
use chaincalc::logging;
use chaincalc::term::{self, Cli};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();
    let config = cli.host_config()?;
    logging::init_with_config(&config);

    match cli.eval.as_deref() {
        Some(keys) => {
            let readout = term::eval_keys(keys)?;
            println!("{}", term::format_eval(&readout, &config));
            Ok(())
        }
        None => term::run_interactive(config),
    }
}
