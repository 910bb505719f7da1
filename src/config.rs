//! Run configuration for the terminal binary.
//!
//! Flags:
//!
//! ```text
//! --seed N           bag seed (default: seeded from the OS)
//! --tick-ms N        milliseconds between ticks (default: TICK_MS)
//! --log PATH         write logs to PATH (default: no logging)
//! --log-level LEVEL  error|warn|info|debug|trace (default: info)
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub tick_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS as u64,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

/// Parse command-line arguments (program name already stripped).
pub fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match arg.as_str() {
            "--seed" => {
                let v = value("--seed")?;
                config.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--tick-ms" => {
                let v = value("--tick-ms")?;
                let ms = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                if ms == 0 {
                    return Err(anyhow!("--tick-ms must be greater than zero"));
                }
                config.tick_ms = ms;
            }
            "--log" => {
                config.log_file = Some(PathBuf::from(value("--log")?));
            }
            "--log-level" => {
                let v = value("--log-level")?;
                config.log_level = v
                    .parse::<LevelFilter>()
                    .map_err(|_| anyhow!("invalid --log-level value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
    }

    Ok(config)
}

/// Install the file logger if the config asks for one.
///
/// The game owns the terminal, so logs only ever go to a file.
pub fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = fern::log_file(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.log_level)
        .chain(file)
        .apply()
        .context("logger already installed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        assert_eq!(parse_args(&[]).unwrap(), RunConfig::default());
    }

    #[test]
    fn parses_all_flags() {
        let config = parse_args(&args(&[
            "--seed",
            "42",
            "--tick-ms",
            "10",
            "--log",
            "/tmp/blockfall.log",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_ms, 10);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/blockfall.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--tick-ms", "0"])).is_err());
        assert!(parse_args(&args(&["--log-level", "loud"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn no_log_file_means_no_logger() {
        assert!(init_logging(&RunConfig::default()).is_ok());
    }
}
