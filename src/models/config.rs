//! Configuration model loaded from external sources.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::console::DEBOUNCE_DELAY;
use crate::domain::types::{PageSize, TypeConstraintError};
use crate::seed::MOCK_DATA_SIZE;
use crate::services::api::Latency;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Tunables of the console and its simulated backend.
pub struct ConsoleConfig {
    /// Number of generated employees the store starts with.
    pub seed_size: usize,
    pub debounce_delay_ms: u64,
    pub default_page_size: usize,
    pub list_latency_ms: u64,
    pub create_latency_ms: u64,
    pub update_latency_ms: u64,
    pub delete_latency_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let latency = Latency::default();
        Self {
            seed_size: MOCK_DATA_SIZE,
            debounce_delay_ms: DEBOUNCE_DELAY.as_millis() as u64,
            default_page_size: PageSize::default().get(),
            list_latency_ms: latency.list.as_millis() as u64,
            create_latency_ms: latency.create.as_millis() as u64,
            update_latency_ms: latency.update.as_millis() as u64,
            delete_latency_ms: latency.delete.as_millis() as u64,
        }
    }
}

impl ConsoleConfig {
    /// Loads `{dir}/default`, the optional `{dir}/{app_env}` profile and
    /// `APP_*` environment overrides, in increasing precedence.
    pub fn load(dir: &str, app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{dir}/default")).required(false))
            .add_source(File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn page_size(&self) -> Result<PageSize, TypeConstraintError> {
        PageSize::new(self.default_page_size)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn latency(&self) -> Latency {
        Latency {
            list: Duration::from_millis(self.list_latency_ms),
            create: Duration::from_millis(self.create_latency_ms),
            update: Duration::from_millis(self.update_latency_ms),
            delete: Duration::from_millis(self.delete_latency_ms),
        }
    }
}
