use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::wizard::WizardTimeouts;

/// Runtime configuration for the binary. The library itself takes plain
/// values; this layer only exists so operators can tune timeouts and the
/// simulator without recompiling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub wallet: WalletConfig,
    pub publish: PublishConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletConfig {
    /// Bounded wait for authorization requests, in seconds. Unset waits
    /// indefinitely, matching the provider contract.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Bounded wait for the publish call, in seconds.
    pub timeout_secs: Option<u64>,
    pub simulator: SimulatorConfig,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            simulator: SimulatorConfig::default(),
        }
    }
}

/// Tuning for the bundled simulated ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Fabricated chain-write latency.
    pub latency_ms: u64,
    /// Fail this many publishes before succeeding. Demo knob.
    pub fail_first: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            latency_ms: 3000,
            fail_first: 0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&raw).map_err(|err| ConfigError::Load(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise the default config file when it
    /// exists, otherwise built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn default_path() -> Option<std::path::PathBuf> {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".decentralizeit").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.wallet.request_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "wallet.request_timeout_secs must be positive".into(),
            ));
        }
        if self.publish.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "publish.timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn wizard_timeouts(&self) -> WizardTimeouts {
        WizardTimeouts {
            wallet_request: self.wallet.request_timeout_secs.map(Duration::from_secs),
            publish: self.publish.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn simulator_latency(&self) -> Duration {
        Duration::from_millis(self.publish.simulator.latency_ms)
    }
}
