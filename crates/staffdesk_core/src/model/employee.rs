//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the `employeesdetails` table.
//! - Enforce the character limits the storage schema declares.
//!
//! # Invariants
//! - `id` is the registration key and never changes afterwards.
//! - `name` and `email` hold at most 30 characters, `department` at most 50.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable primary key for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// Declared width of the `name` column.
pub const NAME_MAX_CHARS: usize = 30;
/// Declared width of the `email` column.
pub const EMAIL_MAX_CHARS: usize = 30;
/// Declared width of the `department` column.
pub const DEPARTMENT_MAX_CHARS: usize = 50;

/// Canonical employee record.
///
/// Every field except `id` is replaceable in-place via update; destroying
/// records happens only in bulk when the table is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Registration key supplied by the user, unique per table.
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    /// Contact address. No format validation beyond the length limit.
    pub email: String,
    pub department: String,
}

impl Employee {
    /// Creates a record from already-parsed field values.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            email: email.into(),
            department: department.into(),
        }
    }

    /// Checks the declared column widths.
    ///
    /// SQLite does not enforce `VARCHAR(n)` limits, so write paths call this
    /// before every mutation.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        let name_chars = self.name.chars().count();
        if name_chars > NAME_MAX_CHARS {
            return Err(EmployeeValidationError::NameTooLong { chars: name_chars });
        }

        let email_chars = self.email.chars().count();
        if email_chars > EMAIL_MAX_CHARS {
            return Err(EmployeeValidationError::EmailTooLong { chars: email_chars });
        }

        let department_chars = self.department.chars().count();
        if department_chars > DEPARTMENT_MAX_CHARS {
            return Err(EmployeeValidationError::DepartmentTooLong {
                chars: department_chars,
            });
        }

        Ok(())
    }
}

/// Violated field length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    NameTooLong { chars: usize },
    EmailTooLong { chars: usize },
    DepartmentTooLong { chars: usize },
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooLong { chars } => {
                write!(f, "name exceeds {NAME_MAX_CHARS} characters (got {chars})")
            }
            Self::EmailTooLong { chars } => {
                write!(f, "email exceeds {EMAIL_MAX_CHARS} characters (got {chars})")
            }
            Self::DepartmentTooLong { chars } => write!(
                f,
                "department exceeds {DEPARTMENT_MAX_CHARS} characters (got {chars})"
            ),
        }
    }
}

impl Error for EmployeeValidationError {}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeValidationError, DEPARTMENT_MAX_CHARS, NAME_MAX_CHARS};

    #[test]
    fn validate_accepts_fields_at_the_limit() {
        let employee = Employee::new(
            1,
            "n".repeat(NAME_MAX_CHARS),
            30,
            "e".repeat(30),
            "d".repeat(DEPARTMENT_MAX_CHARS),
        );
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn validate_rejects_overlong_name() {
        let employee = Employee::new(1, "n".repeat(NAME_MAX_CHARS + 1), 30, "a@x.com", "Eng");
        assert_eq!(
            employee.validate(),
            Err(EmployeeValidationError::NameTooLong {
                chars: NAME_MAX_CHARS + 1
            })
        );
    }

    #[test]
    fn validate_rejects_overlong_email_and_department() {
        let overlong_email = Employee::new(1, "Ann", 30, "e".repeat(31), "Eng");
        assert!(matches!(
            overlong_email.validate(),
            Err(EmployeeValidationError::EmailTooLong { chars: 31 })
        ));

        let overlong_department = Employee::new(1, "Ann", 30, "a@x.com", "d".repeat(51));
        assert!(matches!(
            overlong_department.validate(),
            Err(EmployeeValidationError::DepartmentTooLong { chars: 51 })
        ));
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        // Multi-byte characters must count once each.
        let employee = Employee::new(1, "é".repeat(NAME_MAX_CHARS), 30, "a@x.com", "Eng");
        assert!(employee.validate().is_ok());
    }
}
