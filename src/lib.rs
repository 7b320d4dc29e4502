//! Core of an employee records console: paged search over an in-memory store,
//! debounced search input, page strip computation and a simulated async API.

#[cfg(feature = "console")]
use rand::SeedableRng;
#[cfg(feature = "console")]
use rand::rngs::StdRng;

#[cfg(feature = "console")]
use crate::console::EmployeeConsole;
#[cfg(feature = "console")]
use crate::models::config::ConsoleConfig;
#[cfg(feature = "console")]
use crate::repository::InMemoryRepository;
#[cfg(feature = "console")]
use crate::services::api::EmployeeApi;
#[cfg(feature = "console")]
use crate::services::{ServiceError, ServiceResult};

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "console")]
pub mod debounce;
pub mod domain;
mod error_conversions;
pub mod forms;
#[cfg(feature = "console")]
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
#[cfg(feature = "console")]
pub mod seed;
#[cfg(feature = "console")]
pub mod services;

/// Builds a console over a freshly seeded in-memory store and lists the first
/// page. `seed` makes the generated records reproducible.
#[cfg(feature = "console")]
pub async fn build_console(
    config: &ConsoleConfig,
    seed: Option<u64>,
) -> ServiceResult<EmployeeConsole<InMemoryRepository>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let employees = seed::generate_employees(config.seed_size, &mut rng)?;
    log::info!("Seeded store with {} employees", employees.len());

    let api = EmployeeApi::new(InMemoryRepository::new(employees), config.latency());
    let page_size = config.page_size().map_err(ServiceError::from)?;

    let mut console = EmployeeConsole::new(api, page_size, config.debounce_delay());
    console.refresh().await?;
    Ok(console)
}
