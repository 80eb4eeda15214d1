//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for the employee table.
//! - Isolate SQLite statement details from form-handling orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Employee::validate()` before persistence.
//! - Every operation returns a typed result; no outcome is logged-and-swallowed.

pub mod employee_repo;
