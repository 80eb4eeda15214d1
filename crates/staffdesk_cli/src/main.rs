//! Interactive shell entry point.
//!
//! # Responsibility
//! - Stand in for the desktop form window: prompt for the five fields,
//!   dispatch the five actions, render notification envelopes.
//! - Keep startup wiring minimal; all behavior lives in `staffdesk_core`.

use staffdesk_core::{
    core_version, default_config_path, default_log_dir, default_log_level, init_logging, open_db,
    EmployeeService, FormInput, FormResponse, SqliteEmployeeRepository, StorageConfig,
};
use std::io::{self, BufRead, Write};

fn main() {
    println!("staffdesk {}", core_version());

    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    if let Some(log_dir) = default_log_dir() {
        // A broken log setup is reported but never blocks the session.
        if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(&config) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open database: {err}");
            std::process::exit(1);
        }
    };
    let service = EmployeeService::new(SqliteEmployeeRepository::new(conn));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!(
            "actions: [1] create table  [2] register  [3] view  [4] update  [5] delete table  [6] quit"
        );
        let Some(choice) = prompt(&mut lines, "> ") else {
            break;
        };

        match choice.trim() {
            "1" => notify(&service.create_table()),
            "2" => {
                let Some(input) = read_form(&mut lines) else {
                    break;
                };
                notify(&service.register(&input));
            }
            "3" => {
                let view = service.view();
                if view.ok {
                    println!("{}", view.body);
                } else {
                    println!("{}", view.message);
                }
            }
            "4" => {
                let Some(input) = read_form(&mut lines) else {
                    break;
                };
                let outcome = service.update(&input);
                notify(&outcome.form);
                if let Some(view) = outcome.view {
                    println!("{}", view.body);
                }
            }
            "5" => {
                let response = service.delete_table(|question| {
                    prompt(&mut lines, &format!("{question} [y/N] "))
                        .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"))
                });
                if let Some(response) = response {
                    notify(&response);
                }
            }
            "6" | "q" | "quit" => break,
            "" => continue,
            other => println!("unknown action `{other}`"),
        }
    }

    if let Err(err) = service.close() {
        eprintln!("failed to close database: {err}");
    }
}

/// Resolves the storage config: explicit file argument, else the user's
/// conventional config file, else defaults.
fn load_config() -> Result<StorageConfig, String> {
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(path) => StorageConfig::load(&path).map_err(|err| err.to_string()),
        None => match default_config_path() {
            Some(path) => StorageConfig::load_or_default(&path).map_err(|err| err.to_string()),
            None => Ok(StorageConfig::default()),
        },
    }
}

fn notify(response: &FormResponse) {
    let kind = if response.ok { "ok" } else { "error" };
    println!("[{kind}] {}", response.message);
}

fn prompt(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    label: &str,
) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

fn read_form(lines: &mut io::Lines<io::StdinLock<'_>>) -> Option<FormInput> {
    Some(FormInput {
        employee_id: prompt(lines, "id: ")?,
        name: prompt(lines, "name: ")?,
        age: prompt(lines, "age: ")?,
        email: prompt(lines, "email: ")?,
        department: prompt(lines, "department: ")?,
    })
}
