//! In-memory employee store standing in for a persistent backend.

use std::cell::{Cell, RefCell};

use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::EmployeeId;
use crate::pagination::PageResult;
use crate::query;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{EmployeeListQuery, EmployeeReader, EmployeeWriter};

/// Single-writer record set. Ids come from a counter that starts past the
/// largest id present at construction, so they are never reused.
#[derive(Debug)]
pub struct InMemoryRepository {
    employees: RefCell<Vec<Employee>>,
    next_id: Cell<EmployeeId>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InMemoryRepository {
    pub fn new(employees: Vec<Employee>) -> Self {
        let next_id = employees
            .iter()
            .map(|employee| employee.id)
            .max()
            .map_or(EmployeeId::FIRST, EmployeeId::next);

        Self {
            employees: RefCell::new(employees),
            next_id: Cell::new(next_id),
        }
    }

    pub fn len(&self) -> usize {
        self.employees.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.borrow().is_empty()
    }

    fn allocate_id(&self) -> EmployeeId {
        let id = self.next_id.get();
        self.next_id.set(id.next());
        id
    }
}

impl EmployeeReader for InMemoryRepository {
    fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>> {
        Ok(self
            .employees
            .borrow()
            .iter()
            .find(|employee| employee.id == id)
            .cloned())
    }

    fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<PageResult<Employee>> {
        let employees = self.employees.borrow();
        Ok(query::query(
            employees.as_slice(),
            query.search.as_deref().unwrap_or_default(),
            query.pagination.page,
            query.pagination.per_page,
        ))
    }
}

impl EmployeeWriter for InMemoryRepository {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee> {
        let employee = Employee::from_new(self.allocate_id(), new_employee.clone());
        self.employees.borrow_mut().push(employee.clone());
        Ok(employee)
    }

    fn update_employee(
        &self,
        employee_id: EmployeeId,
        updates: &NewEmployee,
    ) -> RepositoryResult<Employee> {
        let mut employees = self.employees.borrow_mut();
        let slot = employees
            .iter_mut()
            .find(|employee| employee.id == employee_id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = Employee::from_new(employee_id, updates.clone());
        Ok(slot.clone())
    }

    fn delete_employee(&self, employee_id: EmployeeId) -> RepositoryResult<()> {
        let mut employees = self.employees.borrow_mut();
        let index = employees
            .iter()
            .position(|employee| employee.id == employee_id)
            .ok_or(RepositoryError::NotFound)?;
        employees.remove(index);
        Ok(())
    }
}
