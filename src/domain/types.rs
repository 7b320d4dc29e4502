//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, a closed department list) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Department is not part of the closed department list.
    #[error("unknown department: {0}")]
    UnknownDepartment(String),
    /// Page size is not one of the selectable sizes.
    #[error("page size {0} is not allowed")]
    InvalidPageSize(usize),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Unique identifier for an employee, assigned by the store.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Identifier handed out by an empty store.
    pub const FIRST: EmployeeId = EmployeeId(1);

    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i64` backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for EmployeeId {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeId> for i64 {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeEmail(String);

impl EmployeeEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for EmployeeEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmployeeEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmployeeEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeEmail> for String {
    fn from(value: EmployeeEmail) -> Self {
        value.0
    }
}

const MAX_STRIP_PASSES: usize = 4;

/// Removes every tag (and the content of script/style elements) from `text`
/// and returns plain text, not HTML: the entities the sanitizer writes for
/// `&`, `<`, `>` and non-breaking spaces are turned back into characters.
///
/// Repeats until stable so that stripping an already plain value is a no-op.
fn strip_markup(text: &str) -> String {
    let sanitizer = {
        let mut builder = ammonia::Builder::default();
        builder.tags(HashSet::new());
        builder
    };

    let mut current = text.to_string();
    for _ in 0..MAX_STRIP_PASSES {
        let stripped = sanitizer
            .clean(&current)
            .to_string()
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&nbsp;", "\u{a0}")
            .replace("&amp;", "&");
        if stripped == current {
            break;
        }
        current = stripped;
    }
    current
}

/// First or last name of an employee. Markup is stripped and surrounding
/// whitespace trimmed; the result must not be empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = strip_markup(&value.into());
        let trimmed = sanitized.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for PersonName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

/// Department an employee belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
    #[serde(rename = "IT")]
    It,
    Legal,
}

impl Department {
    /// Every department in the order offered by the form's selection list.
    pub const ALL: [Department; 8] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Operations,
        Department::It,
        Department::Legal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::It => "IT",
            Department::Legal => "Legal",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Department::ALL
            .into_iter()
            .find(|department| department.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TypeConstraintError::UnknownDepartment(trimmed.to_string()))
    }
}

/// Number of rows shown per page; restricted to the selectable sizes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Sizes offered by the page size selector.
    pub const ALLOWED: [usize; 5] = [10, 25, 50, 100, 1000];

    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidPageSize(value))
        }
    }

    /// All selectable page sizes in ascending order.
    pub fn all() -> impl Iterator<Item = PageSize> {
        Self::ALLOWED.into_iter().map(PageSize)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(10)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.0
    }
}
