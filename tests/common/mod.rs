#![allow(dead_code)]

use chrono::NaiveDate;
use employee_console::domain::employee::{Employee, NewEmployee};
use employee_console::domain::types::{Department, EmployeeEmail, EmployeeId, PersonName};

/// Builds a payload for a new employee with a derived email address.
pub fn new_employee(first: &str, last: &str, department: Department) -> NewEmployee {
    NewEmployee {
        first_name: PersonName::new(first).expect("valid first name"),
        last_name: PersonName::new(last).expect("valid last name"),
        email: EmployeeEmail::new(format!(
            "{}.{}@company.com",
            first.to_lowercase(),
            last.to_lowercase()
        ))
        .expect("valid email"),
        department,
        salary: 55_000,
        join_date: NaiveDate::from_ymd_opt(2021, 6, 1).expect("valid date"),
        is_active: true,
    }
}

pub fn employee(id: i64, first: &str, last: &str, department: Department) -> Employee {
    Employee::from_new(
        EmployeeId::new(id).expect("valid id"),
        new_employee(first, last, department),
    )
}

/// Small, hand-written record set with predictable search hits.
pub fn staff() -> Vec<Employee> {
    vec![
        employee(1, "John", "Smith", Department::Engineering),
        employee(2, "Jane", "Johnson", Department::Marketing),
        employee(3, "Mike", "Williams", Department::Sales),
        employee(4, "Sarah", "Brown", Department::Hr),
        employee(5, "David", "Jones", Department::Finance),
        employee(6, "Emily", "Garcia", Department::Operations),
        employee(7, "Chris", "Miller", Department::It),
        employee(8, "Lisa", "Davis", Department::Legal),
        employee(9, "Tom", "Wilson", Department::Engineering),
        employee(10, "Anna", "Moore", Department::Engineering),
        employee(11, "John", "Brown", Department::Sales),
        employee(12, "Jane", "Garcia", Department::Finance),
    ]
}

pub fn id(value: i64) -> EmployeeId {
    EmployeeId::new(value).expect("valid id")
}
