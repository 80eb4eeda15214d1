//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the table lifecycle and row operations over `employeesdetails`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Employee::validate()` before SQL mutations.
//! - Constraint violations on insert surface as `DuplicateId`, missing-table
//!   failures as `TableMissing`; callers decide how to present them.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

// SQLite treats the VARCHAR widths as affinity only; `Employee::validate()`
// enforces them.
const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS employeesdetails (
    id INTEGER PRIMARY KEY,
    name VARCHAR(30),
    age INT,
    email VARCHAR(30),
    department VARCHAR(50)
);";

pub type RepoResult<T> = Result<T, RepoError>;

/// Typed outcome for every storage operation.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    Db(DbError),
    DuplicateId(EmployeeId),
    TableMissing,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "employee id {id} is already registered"),
            Self::TableMissing => write!(f, "employee table does not exist"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::TableMissing => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if is_missing_table(&value) {
            return Self::TableMissing;
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data access contract for the employee table.
pub trait EmployeeRepository {
    /// Creates the table when absent; succeeding runs are no-ops.
    fn create_table(&self) -> RepoResult<()>;
    /// Inserts one row; fails on duplicate `id` or missing table.
    fn register_employee(&self, employee: &Employee) -> RepoResult<()>;
    /// Counts matching rows for `id`.
    fn employee_exists(&self, id: EmployeeId) -> RepoResult<bool>;
    /// Fetches all rows in storage-engine-native order, one delimited line
    /// per record, newline separated. Empty table yields an empty string.
    fn list_employees_as_text(&self) -> RepoResult<String>;
    /// Replaces all non-key fields for `employee.id`; a no-op when the id is
    /// absent (callers pre-check existence).
    fn update_employee(&self, employee: &Employee) -> RepoResult<()>;
    /// Drops the table when present.
    fn drop_table(&self) -> RepoResult<()>;
    /// Releases the connection. Idempotence is by construction: the handle
    /// is consumed, so a second close cannot be expressed.
    fn close(self) -> RepoResult<()>
    where
        Self: Sized;
}

/// SQLite-backed employee repository owning the process-lifetime connection.
pub struct SqliteEmployeeRepository {
    conn: Connection,
}

impl SqliteEmployeeRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn create_table(&self) -> RepoResult<()> {
        self.conn.execute(CREATE_TABLE_SQL, [])?;
        Ok(())
    }

    fn register_employee(&self, employee: &Employee) -> RepoResult<()> {
        employee.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO employeesdetails (id, name, age, email, department)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                employee.id,
                employee.name.as_str(),
                employee.age,
                employee.email.as_str(),
                employee.department.as_str(),
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            // The primary key is the table's only constraint.
            Err(err) if is_constraint_violation(&err) => {
                Err(RepoError::DuplicateId(employee.id))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn employee_exists(&self, id: EmployeeId) -> RepoResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM employeesdetails WHERE id = ?1;",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn list_employees_as_text(&self) -> RepoResult<String> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, age, email, department FROM employeesdetails;")?;
        let mut rows = stmt.query([])?;

        let mut lines: Vec<String> = Vec::new();
        while let Some(row) = rows.next()? {
            lines.push(format_employee_line(&parse_employee_row(row)?));
        }

        Ok(lines.join("\n"))
    }

    fn update_employee(&self, employee: &Employee) -> RepoResult<()> {
        employee.validate()?;

        self.conn.execute(
            "UPDATE employeesdetails
             SET name = ?1, age = ?2, email = ?3, department = ?4
             WHERE id = ?5;",
            params![
                employee.name.as_str(),
                employee.age,
                employee.email.as_str(),
                employee.department.as_str(),
                employee.id,
            ],
        )?;

        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute("DROP TABLE IF EXISTS employeesdetails;", [])?;
        Ok(())
    }

    fn close(self) -> RepoResult<()> {
        self.conn
            .close()
            .map_err(|(_conn, err)| RepoError::Db(DbError::Sqlite(err)))
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        email: row.get("email")?,
        department: row.get("department")?,
    })
}

/// Formats one record the way the results panel expects it.
fn format_employee_line(employee: &Employee) -> String {
    format!(
        "ID: {}, Name: {}, Age: {}, Email: {}, Department: {}",
        employee.id, employee.name, employee.age, employee.email, employee.department
    )
}

fn is_missing_table(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(_, Some(message)) if message.starts_with("no such table")
    )
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _) if inner.code == ErrorCode::ConstraintViolation
    )
}
