//! Random employee records used to populate the in-memory store.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::employee::{Employee, generate_email};
use crate::domain::types::{Department, EmployeeEmail, EmployeeId, PersonName, TypeConstraintError};

/// Default number of generated employees.
pub const MOCK_DATA_SIZE: usize = 10_000;

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Mike", "Sarah", "David", "Emily", "Chris", "Lisa", "Tom", "Anna",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
    "Moore",
];

/// Generates `count` employees with ids `1..=count`.
pub fn generate_employees<G: Rng + ?Sized>(
    count: usize,
    rng: &mut G,
) -> Result<Vec<Employee>, TypeConstraintError> {
    (1..=count as i64)
        .map(|id| generate_employee(id, rng))
        .collect()
}

fn generate_employee<G: Rng + ?Sized>(
    id: i64,
    rng: &mut G,
) -> Result<Employee, TypeConstraintError> {
    let first_name = *FIRST_NAMES.choose(rng).unwrap_or(&FIRST_NAMES[0]);
    let last_name = *LAST_NAMES.choose(rng).unwrap_or(&LAST_NAMES[0]);
    let department = *Department::ALL.choose(rng).unwrap_or(&Department::Engineering);

    Ok(Employee {
        id: EmployeeId::new(id)?,
        first_name: PersonName::new(first_name)?,
        last_name: PersonName::new(last_name)?,
        email: EmployeeEmail::new(generate_email(first_name, last_name, id))?,
        department,
        salary: rng.random_range(40_000..140_000),
        join_date: random_join_date(rng),
        is_active: rng.random_bool(0.9),
    })
}

fn random_join_date<G: Rng + ?Sized>(rng: &mut G) -> NaiveDate {
    let year = rng.random_range(2020..2025);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    // Day 28 exists in every month.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
