use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Department, EmployeeEmail, EmployeeId, PersonName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmployeeEmail,
    pub department: Department,
    pub salary: u64,
    pub join_date: NaiveDate,
    pub is_active: bool,
}

/// Employee payload without an identifier, used for both create and update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmployeeEmail,
    pub department: Department,
    pub salary: u64,
    pub join_date: NaiveDate,
    pub is_active: bool,
}

impl Employee {
    /// Builds the stored record from a payload and the id owning it.
    pub fn from_new(id: EmployeeId, data: NewEmployee) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            department: data.department,
            salary: data.salary,
            join_date: data.join_date,
            is_active: data.is_active,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match against the searchable fields.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.department.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

impl From<&Employee> for NewEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department: employee.department,
            salary: employee.salary,
            join_date: employee.join_date,
            is_active: employee.is_active,
        }
    }
}

/// Formats a salary with a dollar sign and thousands separators.
pub fn format_salary(salary: u64) -> String {
    let digits = salary.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Builds the company email address used for generated employees.
pub fn generate_email(first_name: &str, last_name: &str, id: i64) -> String {
    format!(
        "{}.{}{id}@company.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}
