//! # Run Configuration
//!
//! A YAML document describing one run of the generator. Every key except
//! `tonic` is optional:
//!
//! ```yaml
//! tonic: C                 # case-sensitive tonic spelling
//! modes: [Major, Ousak]    # default: all 22 modes
//! intervals: MMmMMMm       # extra custom interval walk
//! interval-policy: strict  # lenient (default) | strict
//! format: yaml             # text (default) | yaml | json
//! ```

use serde::Deserialize;

use crate::error::ScaleError;
use crate::interval::IntervalPolicy;
use crate::mode::Mode;
use crate::pitch::Tonic;
use crate::report::OutputFormat;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub tonic: Option<String>,
    pub modes: Option<Vec<String>>,
    pub intervals: Option<String>,
    pub interval_policy: Option<String>,
    pub format: Option<String>,
}

/// Resolved, validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tonic: Tonic,
    pub modes: Vec<Mode>,
    pub intervals: Option<String>,
    pub interval_policy: IntervalPolicy,
    pub format: OutputFormat,
}

impl Config {
    /// Defaults for a tonic: all modes, lenient intervals, text output
    pub fn new(tonic: Tonic) -> Self {
        Self {
            tonic,
            modes: Mode::ALL.to_vec(),
            intervals: None,
            interval_policy: IntervalPolicy::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ScaleError> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ScaleError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, ScaleError> {
        let tonic = match &raw.tonic {
            Some(tonic) => Tonic::parse(tonic)?,
            None => return Err(ScaleError::Config("tonic is required".to_string())),
        };

        let mut config = Self::new(tonic);

        if let Some(modes) = &raw.modes {
            if modes.is_empty() {
                return Err(ScaleError::Config("modes must not be empty".to_string()));
            }
            config.modes = modes
                .iter()
                .map(|name| Mode::from_name(name))
                .collect::<Result<_, _>>()?;
        }

        if let Some(policy) = &raw.interval_policy {
            config.interval_policy = IntervalPolicy::from_str(policy).ok_or_else(|| {
                ScaleError::Config(format!("Invalid interval policy: {}", policy))
            })?;
        }

        if let Some(format) = &raw.format {
            config.format = OutputFormat::from_str(format)
                .ok_or_else(|| ScaleError::Config(format!("Invalid format: {}", format)))?;
        }

        config.intervals = raw.intervals;
        Ok(config)
    }
}
