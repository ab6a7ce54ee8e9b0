// Helios Miner - Free and Open Source Software Statement
//
// This project, helios-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.1
//
// This file sets up the log4rs backend for the `log` facade: a console
// appender and, when requested, a plain file appender, both filtered at the
// configured level.
//
// Tree Location:
// - src/utils/logging.rs (logger initialisation)
// - Depends on: log, log4rs

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

pub const CONSOLE_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} [{t}] {m}{n}";
pub const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} [{t}] {m}{n}";

pub fn to_log_level(s: &str, default: LevelFilter) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => default,
    }
}

pub fn build_config(level: LevelFilter, log_file: Option<&str>) -> anyhow::Result<Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stdout", Box::new(stdout)),
    );
    let mut root = Root::builder().appender("stdout");

    if let Some(path) = log_file {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(path)?;
        builder = builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    Ok(builder.build(root.build(level))?)
}

pub fn init_logger(level: &str, log_file: Option<&str>) -> anyhow::Result<log4rs::Handle> {
    let config = build_config(to_log_level(level, LevelFilter::Info), log_file)?;
    Ok(log4rs::init_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_log_level() {
        assert_eq!(to_log_level("Debug", LevelFilter::Error), LevelFilter::Debug);
        assert_eq!(to_log_level("nope", LevelFilter::Info), LevelFilter::Info);
    }

    #[test]
    fn test_build_console_only_config() {
        let config = build_config(LevelFilter::Warn, None).unwrap();
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.root().level(), LevelFilter::Warn);
    }
}

// Changelog:
// - v1.0.1 (2026-10-19): Test reads the root level through Root::level().
// - v1.0.0 (2026-09-28): Initial log4rs setup.
//   - Console appender plus optional file appender.
