use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::{
        employee::{Employee, NewEmployee},
        types::{Department, EmployeeEmail, PersonName},
    },
    forms::FormError,
};

/// Date format used by the join date input.
const JOIN_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Raw values of the add/edit employee form, as typed by the user.
pub struct EmployeeForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Format is checked after trimming, when building the domain value.
    #[validate(length(min = 1))]
    pub email: String,
    /// One of the department names; empty until the user picks one.
    #[validate(length(min = 1))]
    pub department: String,
    /// Whole dollars, not yet parsed.
    #[validate(length(min = 1))]
    pub salary: String,
    /// `YYYY-MM-DD`, not yet parsed.
    #[validate(length(min = 1))]
    pub join_date: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            department: String::new(),
            salary: String::new(),
            join_date: String::new(),
            is_active: default_active(),
        }
    }
}

impl From<&Employee> for EmployeeForm {
    /// Pre-fills the form with the employee being edited.
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.to_string(),
            last_name: employee.last_name.to_string(),
            email: employee.email.to_string(),
            department: employee.department.to_string(),
            salary: employee.salary.to_string(),
            join_date: employee.join_date.format(JOIN_DATE_FORMAT).to_string(),
            is_active: employee.is_active,
        }
    }
}

impl TryFrom<EmployeeForm> for NewEmployee {
    type Error = FormError;

    fn try_from(form: EmployeeForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let first_name = PersonName::new(form.first_name).map_err(|_| FormError::InvalidName)?;
        let last_name = PersonName::new(form.last_name).map_err(|_| FormError::InvalidName)?;
        let email = EmployeeEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?;
        let department = form
            .department
            .parse::<Department>()
            .map_err(|_| FormError::InvalidDepartment)?;
        let salary = form
            .salary
            .trim()
            .parse::<u64>()
            .map_err(|_| FormError::InvalidSalary)?;
        let join_date = NaiveDate::parse_from_str(form.join_date.trim(), JOIN_DATE_FORMAT)
            .map_err(|_| FormError::InvalidJoinDate)?;

        Ok(NewEmployee {
            first_name,
            last_name,
            email,
            department,
            salary,
            join_date,
            is_active: form.is_active,
        })
    }
}
