use crate::anomalies::Anomalies;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, PartialEq)]
pub(crate) struct Config {
    /// Which of the game's deliberate defects are active, and how often they
    /// fire
    #[serde(default)]
    pub(crate) anomalies: Anomalies,

    /// Settings about what gets drawn
    #[serde(default)]
    pub(crate) display: DisplayConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snake3d").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// Draw the invisible barrier and the dormant auto-pause countdown
    pub(crate) show_barrier: bool,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::distr::Bernoulli;
    use std::io::Write;
    use std::num::NonZeroU64;

    fn load_str(s: &str) -> Result<Config, ConfigError> {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        file.write_all(s.as_bytes())
            .expect("failed to write temp file");
        Config::load(file.path(), false)
    }

    #[test]
    fn empty_file_is_default() {
        let cfg = load_str("").expect("empty config should parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.anomalies, Anomalies::default());
        assert!(
            !cfg.display.show_barrier,
            "overlay should be off by default"
        );
    }

    #[test]
    fn full_file() {
        let cfg = load_str(concat!(
            "[anomalies]\n",
            "reversal-period = 5\n",
            "spawn-bypass-probability = 1.0\n",
            "phantom-apples = false\n",
            "invisible-barrier = false\n",
            "spawn-attempts = 10\n",
            "\n",
            "[display]\n",
            "show-barrier = true\n",
        ))
        .expect("config should parse");
        assert_eq!(cfg.anomalies.reversal_period, NonZeroU64::new(5));
        assert!(
            cfg.anomalies.allows_reversal(10),
            "period of 5 allows tick 10"
        );
        assert_eq!(
            cfg.anomalies.spawn_bypass,
            Bernoulli::new(1.0).expect("1 should be a valid probability")
        );
        assert!(
            !cfg.anomalies.phantom_apples,
            "phantom apples should be off"
        );
        assert!(!cfg.anomalies.invisible_barrier, "barrier should be off");
        assert_eq!(cfg.anomalies.spawn_attempts, 10);
        assert!(cfg.display.show_barrier, "overlay should be on");
    }

    #[test]
    fn zero_period_disables_reversal() {
        let cfg = load_str("[anomalies]\nreversal-period = 0\n").expect("config should parse");
        assert_eq!(cfg.anomalies.reversal_period, None);
        assert_eq!(cfg.anomalies.spawn_attempts, 200);
    }

    #[test]
    fn bad_probability() {
        let r = load_str("[anomalies]\nspawn-bypass-probability = 1.5\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn unknown_type() {
        let r = load_str("[display]\nshow-barrier = \"yes\"\n");
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn missing_allowed() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        let cfg = Config::load(&path, true).expect("missing file should be allowed");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn missing_not_allowed() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))), "{r:?}");
    }
}
