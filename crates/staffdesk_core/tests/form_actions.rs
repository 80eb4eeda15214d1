use staffdesk_core::{
    open_db, Employee, EmployeeId, EmployeeRepository, EmployeeService, FormInput, RepoResult,
    SqliteEmployeeRepository, StorageConfig, DELETE_TABLE_CONFIRMATION,
};

fn memory_service() -> EmployeeService<SqliteEmployeeRepository> {
    let conn = open_db(&StorageConfig::in_memory()).unwrap();
    EmployeeService::new(SqliteEmployeeRepository::new(conn))
}

fn form(id: &str, name: &str, age: &str, email: &str, department: &str) -> FormInput {
    FormInput {
        employee_id: id.to_string(),
        name: name.to_string(),
        age: age.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

fn ann_form() -> FormInput {
    form("5", "Ann", "30", "a@x.com", "Eng")
}

/// Repository double proving an action never reached the storage layer.
struct UnreachableRepo;

impl EmployeeRepository for UnreachableRepo {
    fn create_table(&self) -> RepoResult<()> {
        panic!("storage must not be reached");
    }
    fn register_employee(&self, _employee: &Employee) -> RepoResult<()> {
        panic!("storage must not be reached");
    }
    fn employee_exists(&self, _id: EmployeeId) -> RepoResult<bool> {
        panic!("storage must not be reached");
    }
    fn list_employees_as_text(&self) -> RepoResult<String> {
        panic!("storage must not be reached");
    }
    fn update_employee(&self, _employee: &Employee) -> RepoResult<()> {
        panic!("storage must not be reached");
    }
    fn drop_table(&self) -> RepoResult<()> {
        panic!("storage must not be reached");
    }
    fn close(self) -> RepoResult<()> {
        panic!("storage must not be reached");
    }
}

#[test]
fn register_rejects_non_numeric_age_before_any_storage_call() {
    let service = EmployeeService::new(UnreachableRepo);

    let response = service.register(&form("1", "Ann", "abc", "a@x.com", "Eng"));

    assert!(!response.ok);
    assert_eq!(response.message, "Please enter a valid age.");
    assert!(!response.clear_fields);
}

#[test]
fn register_rejects_non_numeric_id_with_the_age_message() {
    // The original form reports the age message for either bad field.
    let service = EmployeeService::new(UnreachableRepo);

    let response = service.register(&form("one", "Ann", "30", "a@x.com", "Eng"));

    assert!(!response.ok);
    assert_eq!(response.message, "Please enter a valid age.");
}

#[test]
fn register_success_notifies_and_clears_fields() {
    let service = memory_service();
    service.create_table();

    let response = service.register(&ann_form());

    assert!(response.ok);
    assert_eq!(response.message, "Employee has been registered successfully.");
    assert!(response.clear_fields);
}

#[test]
fn register_duplicate_reports_already_exists_and_inserts_nothing() {
    let service = memory_service();
    service.create_table();
    assert!(service.register(&ann_form()).ok);

    let response = service.register(&form("5", "Bob", "41", "b@x.com", "Sales"));

    assert!(!response.ok);
    assert_eq!(response.message, "Employee with ID 5 already exists.");

    let view = service.view();
    assert_eq!(view.body.lines().filter(|line| line.starts_with("ID:")).count(), 1);
    assert!(view.body.contains("Name: Ann"));
}

#[test]
fn register_before_create_table_gives_the_actionable_hint() {
    let service = memory_service();

    let response = service.register(&ann_form());

    assert!(!response.ok);
    assert_eq!(
        response.message,
        "Employee table not found. Please create the employee table first."
    );
}

#[test]
fn view_on_an_empty_table_is_ok_and_empty() {
    let service = memory_service();
    service.create_table();

    let view = service.view();

    assert!(view.ok);
    assert_eq!(view.body, "");
    assert_eq!(view.message, "");
}

#[test]
fn view_without_table_fails_with_a_message() {
    let service = memory_service();

    let view = service.view();

    assert!(!view.ok);
    assert!(view.message.starts_with("Failed to view employees:"));
}

#[test]
fn view_separates_records_with_a_rule() {
    let service = memory_service();
    service.create_table();
    service.register(&ann_form());
    service.register(&form("7", "Bob", "41", "b@x.com", "Sales"));

    let view = service.view();

    assert!(view.ok);
    let lines: Vec<&str> = view.body.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID: "));
    assert_eq!(lines[1], "--------------------------------");
    assert!(lines[2].starts_with("ID: "));
    assert_eq!(lines[3], "--------------------------------");
}

#[test]
fn update_rejects_non_numeric_input_before_any_storage_call() {
    let service = EmployeeService::new(UnreachableRepo);

    let outcome = service.update(&form("x", "Ann", "31", "a@x.com", "Eng"));

    assert!(!outcome.form.ok);
    assert_eq!(outcome.form.message, "Please enter a valid ID and age.");
    assert!(outcome.view.is_none());
}

#[test]
fn update_missing_id_reports_does_not_exist_and_changes_nothing() {
    let service = memory_service();
    service.create_table();
    service.register(&ann_form());

    let outcome = service.update(&form("7", "Bob", "41", "b@x.com", "Sales"));

    assert!(!outcome.form.ok);
    assert_eq!(outcome.form.message, "Employee with ID 7 does not exist.");
    assert!(outcome.view.is_none());

    let view = service.view();
    assert!(view.body.contains("ID: 5, Name: Ann, Age: 30, Email: a@x.com, Department: Eng"));
}

#[test]
fn update_success_notifies_clears_fields_and_refreshes_the_view() {
    let service = memory_service();
    service.create_table();
    service.register(&ann_form());

    let outcome = service.update(&form("5", "Ann", "31", "a@x.com", "Eng"));

    assert!(outcome.form.ok);
    assert_eq!(outcome.form.message, "Employee information updated successfully.");
    assert!(outcome.form.clear_fields);

    let view = outcome.view.expect("successful update refreshes the view");
    assert!(view.ok);
    assert!(view.body.contains("ID: 5, Name: Ann, Age: 31, Email: a@x.com, Department: Eng"));
}

#[test]
fn update_without_table_fails_with_the_update_message() {
    let service = memory_service();

    let outcome = service.update(&ann_form());

    assert!(!outcome.form.ok);
    assert!(outcome.form.message.starts_with("Failed to update employee:"));
    assert!(outcome.view.is_none());
}

#[test]
fn declined_delete_confirmation_executes_nothing_and_stays_silent() {
    let service = memory_service();
    service.create_table();
    service.register(&ann_form());

    let response = service.delete_table(|_| false);

    assert!(response.is_none());
    assert!(service.view().ok);
}

#[test]
fn confirmed_delete_drops_the_table() {
    let service = memory_service();
    service.create_table();

    let mut seen_prompt = String::new();
    let response = service.delete_table(|question| {
        seen_prompt = question.to_string();
        true
    });

    assert_eq!(seen_prompt, DELETE_TABLE_CONFIRMATION);
    let response = response.expect("confirmed delete produces a notification");
    assert!(response.ok);
    assert_eq!(response.message, "Employee table deleted successfully.");

    assert!(!service.view().ok);
}

#[test]
fn register_view_update_round_trip() {
    let service = memory_service();
    service.create_table();

    assert!(service.register(&form("5", "Ann", "30", "a@x.com", "Eng")).ok);
    let view = service.view();
    assert!(view.body.contains("ID: 5, Name: Ann, Age: 30, Email: a@x.com, Department: Eng"));

    let outcome = service.update(&form("5", "Ann", "31", "a@x.com", "Eng"));
    assert!(outcome.form.ok);
    let refreshed = outcome.view.expect("refreshed view");
    assert!(refreshed.body.contains("ID: 5, Name: Ann, Age: 31, Email: a@x.com, Department: Eng"));
    assert!(!refreshed.body.contains("Age: 30"));
}

#[test]
fn overlong_field_surfaces_as_a_register_failure() {
    let service = memory_service();
    service.create_table();

    let response = service.register(&form("1", &"n".repeat(31), "30", "a@x.com", "Eng"));

    assert!(!response.ok);
    assert!(response.message.starts_with("Failed to register employee:"));
    assert!(service.view().body.is_empty());
}

#[test]
fn close_releases_the_connection() {
    let service = memory_service();
    service.create_table();
    service.close().unwrap();
}
