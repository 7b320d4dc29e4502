//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::EmployeeId;
use crate::pagination::PageResult;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EmployeeListQuery, EmployeeReader, EmployeeWriter};

mock! {
    pub Repository {}

    impl EmployeeReader for Repository {
        fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>>;
        fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<PageResult<Employee>>;
    }

    impl EmployeeWriter for Repository {
        fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
        fn update_employee(
            &self,
            employee_id: EmployeeId,
            updates: &NewEmployee,
        ) -> RepositoryResult<Employee>;
        fn delete_employee(&self, employee_id: EmployeeId) -> RepositoryResult<()>;
    }
}
