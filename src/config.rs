use anyhow::{bail, Result};

use crate::telemetry::DEFAULT_CAPACITY;
use crate::types::ConnectionMode;

const DEFAULT_URL: &str = "ws://127.0.0.1:3000/";

#[derive(Clone, Debug)]
pub struct StreamConfig {
    pub url: String,
    pub mode: ConnectionMode,
    /// Points retained per series.
    pub capacity: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("PULSEMON_URL").unwrap_or_else(|_| DEFAULT_URL.to_owned()),
            mode: ConnectionMode::Network,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StreamConfig {
    /// Parses `pulsemon [--sim | WS_URL]`.
    pub fn from_args(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        for arg in args {
            match arg.as_str() {
                "--sim" => config.mode = ConnectionMode::Simulation,
                flag if flag.starts_with('-') => bail!("unknown flag: {flag}"),
                url => config.url = url.to_owned(),
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_flag_selects_the_simulator() {
        let config = StreamConfig::from_args(["--sim".to_owned()].into_iter()).unwrap();
        assert_eq!(config.mode, ConnectionMode::Simulation);
    }

    #[test]
    fn positional_arg_overrides_the_url() {
        let config =
            StreamConfig::from_args(["wss://example.test/feed".to_owned()].into_iter()).unwrap();
        assert_eq!(config.url, "wss://example.test/feed");
        assert_eq!(config.mode, ConnectionMode::Network);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(StreamConfig::from_args(["--bogus".to_owned()].into_iter()).is_err());
    }
}
