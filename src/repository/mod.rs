use crate::{
    domain::{
        employee::{Employee, NewEmployee},
        types::{EmployeeId, PageSize},
    },
    pagination::PageResult,
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: PageSize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PageSize::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeListQuery {
    pub search: Option<String>,
    pub pagination: Pagination,
}

impl EmployeeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to employees matching `term`. Blank terms are
    /// ignored.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let trimmed = term.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: PageSize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }
}

pub trait EmployeeReader {
    fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>>;
    fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<PageResult<Employee>>;
}

pub trait EmployeeWriter {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    fn update_employee(
        &self,
        employee_id: EmployeeId,
        updates: &NewEmployee,
    ) -> RepositoryResult<Employee>;
    fn delete_employee(&self, employee_id: EmployeeId) -> RepositoryResult<()>;
}
