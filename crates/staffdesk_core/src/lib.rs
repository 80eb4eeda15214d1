//! Core domain logic for StaffDesk.
//! This crate is the single source of truth for the employee-records workflow.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{default_config_path, ConfigError, StorageConfig};
pub use db::{open_db, DbError, DbResult, MEMORY_ENDPOINT};
pub use logging::{default_log_dir, default_log_level, init_logging, logging_status};
pub use model::employee::{
    Employee, EmployeeId, EmployeeValidationError, DEPARTMENT_MAX_CHARS, EMAIL_MAX_CHARS,
    NAME_MAX_CHARS,
};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use service::employee_service::{
    EmployeeService, FormInput, FormResponse, UpdateResponse, ViewResponse,
    DELETE_TABLE_CONFIRMATION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
