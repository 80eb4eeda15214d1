//! Connection bootstrap for the configured storage endpoint.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections from a `StorageConfig`.
//! - Apply the connection settings required by core behavior.
//!
//! # Invariants
//! - An empty endpoint is rejected before touching the driver.
//! - Credentials in the config are recognized but never block opening; the
//!   embedded engine has no authentication.

use super::{DbError, DbResult};
use crate::config::StorageConfig;
use log::{error, info, warn};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Endpoint value selecting an ephemeral in-memory database.
pub const MEMORY_ENDPOINT: &str = ":memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the database named by `config.endpoint`.
///
/// # Side effects
/// - Creates missing parent directories for file endpoints.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(config: &StorageConfig) -> DbResult<Connection> {
    let endpoint = config.endpoint.trim();
    if endpoint.is_empty() {
        return Err(DbError::InvalidEndpoint("endpoint cannot be empty".to_string()));
    }

    let mode = if endpoint == MEMORY_ENDPOINT {
        "memory"
    } else {
        "file"
    };
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    if config.user.is_some() || config.password.is_some() {
        warn!("event=db_open module=db status=warn reason=credentials_unused mode={mode}");
    }

    if mode == "file" {
        if let Err(err) = ensure_parent_dir(Path::new(endpoint)) {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_dir_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err);
        }
    }

    let conn = match Connection::open(endpoint) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}

fn ensure_parent_dir(endpoint: &Path) -> DbResult<()> {
    if let Some(parent) = endpoint.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| DbError::CreateDirFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
