//! Simulated employee API backed by a local repository.
//!
//! Every call waits for a fixed latency before touching the repository so the
//! console experiences the same suspension points as with a remote backend.

use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;

use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::{EmployeeId, PageSize};
use crate::pagination::PageResult;
use crate::repository::{EmployeeListQuery, EmployeeReader, EmployeeWriter};
use crate::services::{ServiceError, ServiceResult};

/// Result payload returned by [`EmployeeApi::delete`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Simulated round-trip time of each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(100),
            create: Duration::from_millis(200),
            update: Duration::from_millis(150),
            delete: Duration::from_millis(100),
        }
    }
}

impl Latency {
    pub const NONE: Latency = Latency {
        list: Duration::ZERO,
        create: Duration::ZERO,
        update: Duration::ZERO,
        delete: Duration::ZERO,
    };
}

#[derive(Debug)]
pub struct EmployeeApi<R> {
    repo: R,
    latency: Latency,
}

impl<R> EmployeeApi<R> {
    pub fn new(repo: R, latency: Latency) -> Self {
        Self { repo, latency }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

impl<R> EmployeeApi<R>
where
    R: EmployeeReader,
{
    /// Returns one page of employees matching `search`.
    pub async fn list(
        &self,
        page: usize,
        page_size: PageSize,
        search: &str,
    ) -> ServiceResult<PageResult<Employee>> {
        sleep(self.latency.list).await;

        let query = EmployeeListQuery::new()
            .search(search)
            .paginate(page, page_size);

        self.repo.list_employees(query).map_err(|err| {
            log::error!("Failed to list employees: {err}");
            ServiceError::from(err)
        })
    }
}

impl<R> EmployeeApi<R>
where
    R: EmployeeWriter,
{
    /// Stores a new employee and returns it with its assigned id.
    pub async fn create(&self, data: &NewEmployee) -> ServiceResult<Employee> {
        sleep(self.latency.create).await;

        let employee = self.repo.create_employee(data).map_err(|err| {
            log::error!("Failed to create employee: {err}");
            ServiceError::from(err)
        })?;
        log::info!("Created employee {}", employee.id);
        Ok(employee)
    }

    /// Replaces the employee with `id` by `data`.
    pub async fn update(&self, id: EmployeeId, data: &NewEmployee) -> ServiceResult<Employee> {
        sleep(self.latency.update).await;

        let employee = self.repo.update_employee(id, data).map_err(|err| {
            log::error!("Failed to update employee {id}: {err}");
            ServiceError::from(err)
        })?;
        log::info!("Updated employee {id}");
        Ok(employee)
    }

    pub async fn delete(&self, id: EmployeeId) -> ServiceResult<DeleteResponse> {
        sleep(self.latency.delete).await;

        self.repo.delete_employee(id).map_err(|err| {
            log::error!("Failed to delete employee {id}: {err}");
            ServiceError::from(err)
        })?;
        log::info!("Deleted employee {id}");
        Ok(DeleteResponse { success: true })
    }
}
