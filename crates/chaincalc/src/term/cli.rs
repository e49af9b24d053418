//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::action::Action;
use crate::config::HostConfig;
use crate::core::{CalcResult, Calculator, Readout};

/// Chained-operator calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "chaincalc", version, about, long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, env = "CHAINCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive (overridden by RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,

    /// Hide the history trail
    #[arg(long)]
    pub no_history: bool,

    /// Hide the keypad
    #[arg(long)]
    pub no_keypad: bool,

    /// Press these keys, print the display and history, and exit
    #[arg(short, long, value_name = "KEYS")]
    pub eval: Option<String>,
}

impl Cli {
    /// Loads the config file, if any, and applies flag overrides
    pub fn host_config(&self) -> CalcResult<HostConfig> {
        let mut config = match &self.config {
            Some(path) => HostConfig::load(path)?,
            None => HostConfig::default(),
        };
        if let Some(filter) = &self.log {
            config = config.with_log_filter(filter.clone());
        }
        if self.no_history {
            config.show_history = false;
        }
        if self.no_keypad {
            config.show_keypad = false;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Runs a key string through a fresh calculator
pub fn eval_keys(keys: &str) -> CalcResult<Readout> {
    let mut calc = Calculator::new();
    for action in Action::parse_keys(keys)? {
        calc.apply(action);
    }
    Ok(calc.readout().clone())
}

/// Formats an eval result: the history line (when shown and non-empty) then the display
#[must_use]
pub fn format_eval(readout: &Readout, config: &HostConfig) -> String {
    if config.show_history && !readout.history.is_empty() {
        format!("{}\n{}", readout.history, readout.display)
    } else {
        readout.display.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chaincalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_is_default_config() {
        let cli = parse(&[]);
        assert!(cli.eval.is_none());
        assert_eq!(cli.host_config().unwrap().log_filter, "warn");
    }

    #[test]
    fn test_flags_override() {
        let cli = parse(&["--no-history", "--no-keypad", "--log", "debug"]);
        let config = cli.host_config().unwrap();
        assert!(!config.show_history);
        assert!(!config.show_keypad);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_filter": "info", "show_keypad": true}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&["--config", path, "--no-keypad"]);
        let config = cli.host_config().unwrap();
        assert_eq!(config.log_filter, "info");
        assert!(!config.show_keypad);
    }

    #[test]
    fn test_empty_log_flag_rejected() {
        let cli = parse(&["--log", ""]);
        assert!(matches!(cli.host_config(), Err(CalcError::Config { .. })));
    }

    #[test]
    fn test_eval_flag() {
        let cli = parse(&["--eval", "5+3="]);
        assert_eq!(cli.eval.as_deref(), Some("5+3="));
    }

    #[test]
    fn test_eval_keys() {
        let readout = eval_keys("1000*3").unwrap();
        assert_eq!(readout.display, "3");
        assert_eq!(readout.history, "1000 *");

        assert_eq!(eval_keys("1000*3=").unwrap().display, "3,000");
        assert!(eval_keys("1+x").is_err());
    }

    #[test]
    fn test_format_eval() {
        let config = HostConfig::default();
        let readout = eval_keys("2+2").unwrap();
        assert_eq!(format_eval(&readout, &config), "2 +\n2");

        let quiet = HostConfig::new().with_history(false);
        assert_eq!(format_eval(&readout, &quiet), "2");

        let done = eval_keys("2+2=").unwrap();
        assert_eq!(format_eval(&done, &config), "4");
    }
}
