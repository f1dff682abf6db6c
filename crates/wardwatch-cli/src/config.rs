use std::env;
use std::str::FromStr;

use wardwatch_core::Mode;

pub const MODE_VAR: &str = "WARDWATCH_MODE";
pub const LOG_FORMAT_VAR: &str = "WARDWATCH_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(eyre::eyre!(
                "unsupported log format '{other}': expected \"pretty\" or \"json\""
            )),
        }
    }
}

/// Runtime settings. Environment first, then command-line flags on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub mode: Mode,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let mut config = Config::default();
        if let Ok(mode) = env::var(MODE_VAR) {
            config.mode = mode.parse()?;
        }
        if let Ok(format) = env::var(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }
        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        mode: Option<&str>,
        log_format: Option<&str>,
    ) -> eyre::Result<Self> {
        if let Some(mode) = mode {
            self.mode = mode.parse()?;
        }
        if let Some(format) = log_format {
            self.log_format = format.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::default()
            .with_overrides(Some("demo"), Some("json"))
            .unwrap();
        assert_eq!(config.mode, Mode::Demo);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn missing_flags_keep_guideline_and_pretty() {
        let config = Config::default().with_overrides(None, None).unwrap();
        assert_eq!(config.mode, Mode::Guideline);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn bad_mode_flag_is_rejected() {
        assert!(Config::default().with_overrides(Some("audit"), None).is_err());
    }

    #[test]
    fn log_format_rejects_unknown_values() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }
}
