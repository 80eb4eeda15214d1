//! Form-handling services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the five user actions.
//! - Keep UI shells decoupled from storage details.

pub mod employee_service;
