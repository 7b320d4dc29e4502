//! Domain aggregates exposed by the console service layer.

pub mod employee;
pub mod types;
