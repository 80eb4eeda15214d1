//! Employee form actions.
//!
//! # Responsibility
//! - Turn raw form-field text into validated repository calls.
//! - Produce the notification envelopes a UI shell renders.
//!
//! # Invariants
//! - Non-numeric id/age input never reaches the storage layer.
//! - Every action yields exactly one notification, except a declined
//!   delete-table confirmation which yields none.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError, RepoResult};
use log::{info, warn};

/// Rule rendered after each record line in the results panel.
const RECORD_SEPARATOR: &str = "--------------------------------";

/// Blocking yes/no text shown before the table is dropped.
pub const DELETE_TABLE_CONFIRMATION: &str =
    "Are you sure you want to delete the employee table? This action cannot be undone.";

/// Raw values of the five form fields as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub employee_id: String,
    pub name: String,
    pub age: String,
    pub email: String,
    pub department: String,
}

/// Notification envelope for table and record mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// Text for the modal notification the shell shows.
    pub message: String,
    /// Whether the shell should clear the input fields.
    pub clear_fields: bool,
}

impl FormResponse {
    fn success(message: impl Into<String>, clear_fields: bool) -> Self {
        Self {
            ok: true,
            message: message.into(),
            clear_fields,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            clear_fields: false,
        }
    }
}

/// Envelope for the read-only results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResponse {
    pub ok: bool,
    /// Formatted records, one per line, each followed by a separator rule.
    /// Empty when the table has no rows.
    pub body: String,
    /// Error notification text; empty on success.
    pub message: String,
}

impl ViewResponse {
    fn success(body: String) -> Self {
        Self {
            ok: true,
            body,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            body: String::new(),
            message: message.into(),
        }
    }
}

/// Update outcome: the notification plus the refreshed results panel.
///
/// The refresh is part of the update workflow itself, so a successful
/// update always carries the re-fetched view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    pub form: FormResponse,
    pub view: Option<ViewResponse>,
}

impl UpdateResponse {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            form: FormResponse::failure(message),
            view: None,
        }
    }
}

/// Use-case entry points for the five form actions.
///
/// Stateless between actions; the only workflow spanning two storage calls
/// is update-then-refresh.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates the employee table; succeeding runs are no-ops.
    pub fn create_table(&self) -> FormResponse {
        match self.repo.create_table() {
            Ok(()) => {
                info!("event=form_create_table module=service status=ok");
                FormResponse::success("Employee table created successfully.", false)
            }
            Err(err) => {
                warn!("event=form_create_table module=service status=error error={err}");
                FormResponse::failure(format!("Failed to create employee table: {err}"))
            }
        }
    }

    /// Registers a new employee from the form fields.
    pub fn register(&self, input: &FormInput) -> FormResponse {
        let (id, age) = match parse_id_and_age(input) {
            Ok(parsed) => parsed,
            Err(()) => {
                warn!("event=form_register module=service status=error error_code=invalid_number");
                return FormResponse::failure("Please enter a valid age.");
            }
        };

        // Pre-check so a duplicate id gets a friendly message instead of a
        // constraint-violation error.
        match self.repo.employee_exists(id) {
            Ok(true) => {
                return FormResponse::failure(format!("Employee with ID {id} already exists."));
            }
            Ok(false) => {}
            Err(err) => return register_failure(id, err),
        }

        let employee = employee_from_fields(id, age, input);
        match self.repo.register_employee(&employee) {
            Ok(()) => {
                info!("event=form_register module=service status=ok id={id}");
                FormResponse::success("Employee has been registered successfully.", true)
            }
            Err(err) => register_failure(id, err),
        }
    }

    /// Fetches all records for the read-only results panel.
    pub fn view(&self) -> ViewResponse {
        match self.repo.list_employees_as_text() {
            Ok(text) => ViewResponse::success(separate_records(&text)),
            Err(err) => {
                warn!("event=form_view module=service status=error error={err}");
                ViewResponse::failure(format!("Failed to view employees: {err}"))
            }
        }
    }

    /// Updates an existing employee and refreshes the results panel.
    pub fn update(&self, input: &FormInput) -> UpdateResponse {
        let (id, age) = match parse_id_and_age(input) {
            Ok(parsed) => parsed,
            Err(()) => {
                warn!("event=form_update module=service status=error error_code=invalid_number");
                return UpdateResponse::failed("Please enter a valid ID and age.");
            }
        };

        match self.repo.employee_exists(id) {
            Ok(true) => {}
            Ok(false) => {
                return UpdateResponse::failed(format!("Employee with ID {id} does not exist."));
            }
            Err(err) => {
                warn!("event=form_update module=service status=error id={id} error={err}");
                return UpdateResponse::failed(format!("Failed to update employee: {err}"));
            }
        }

        let employee = employee_from_fields(id, age, input);
        match self.repo.update_employee(&employee) {
            Ok(()) => {
                info!("event=form_update module=service status=ok id={id}");
                UpdateResponse {
                    form: FormResponse::success("Employee information updated successfully.", true),
                    view: Some(self.view()),
                }
            }
            Err(err) => {
                warn!("event=form_update module=service status=error id={id} error={err}");
                UpdateResponse::failed(format!("Failed to update employee: {err}"))
            }
        }
    }

    /// Runs the delete-table action behind a blocking confirmation prompt.
    ///
    /// The prompt callback receives [`DELETE_TABLE_CONFIRMATION`] and must
    /// return whether the user accepted. Returns `None` when declined; the
    /// shell shows no notification in that case.
    pub fn delete_table<F>(&self, confirm: F) -> Option<FormResponse>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_TABLE_CONFIRMATION) {
            info!("event=form_delete_table module=service status=cancelled");
            return None;
        }

        Some(match self.repo.drop_table() {
            Ok(()) => {
                info!("event=form_delete_table module=service status=ok");
                FormResponse::success("Employee table deleted successfully.", false)
            }
            Err(err) => {
                warn!("event=form_delete_table module=service status=error error={err}");
                FormResponse::failure(format!("Failed to delete the employee table: {err}"))
            }
        })
    }

    /// Releases the underlying storage connection.
    pub fn close(self) -> RepoResult<()> {
        self.repo.close()
    }
}

fn register_failure(id: EmployeeId, err: RepoError) -> FormResponse {
    warn!("event=form_register module=service status=error id={id} error={err}");
    match err {
        // Actionable hint: the table has to exist before registration works.
        RepoError::TableMissing => FormResponse::failure(
            "Employee table not found. Please create the employee table first.",
        ),
        RepoError::DuplicateId(id) => {
            FormResponse::failure(format!("Employee with ID {id} already exists."))
        }
        other => FormResponse::failure(format!("Failed to register employee: {other}")),
    }
}

fn parse_id_and_age(input: &FormInput) -> Result<(EmployeeId, i32), ()> {
    let id = input.employee_id.trim().parse::<EmployeeId>().map_err(|_| ())?;
    let age = input.age.trim().parse::<i32>().map_err(|_| ())?;
    Ok((id, age))
}

fn employee_from_fields(id: EmployeeId, age: i32, input: &FormInput) -> Employee {
    Employee {
        id,
        name: input.name.clone(),
        age,
        email: input.email.clone(),
        department: input.department.clone(),
    }
}

fn separate_records(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut body = String::new();
    for line in text.lines() {
        body.push_str(line);
        body.push('\n');
        body.push_str(RECORD_SEPARATOR);
        body.push('\n');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::separate_records;

    #[test]
    fn separate_records_keeps_empty_input_empty() {
        assert_eq!(separate_records(""), "");
    }

    #[test]
    fn separate_records_appends_a_rule_after_each_line() {
        let body = separate_records("first\nsecond");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "first",
                "--------------------------------",
                "second",
                "--------------------------------",
            ]
        );
    }
}
