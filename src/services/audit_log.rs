use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum AuditLogError {
    #[error("Unable to open log file!")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write to log file!")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only text file with one line per paid order.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry(order_id: u32, method_name: &str) -> String {
        format!(
            "Order ID: {} has been successfully checked out and paid using {}",
            order_id, method_name
        )
    }

    /// Opens the file for each record so nothing stays held between checkouts.
    pub fn record(&self, order_id: u32, method_name: &str) -> Result<(), AuditLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| {
                error!("Failed to open audit log {}: {}", self.path.display(), source);
                AuditLogError::Open {
                    path: self.path.clone(),
                    source,
                }
            })?;

        writeln!(file, "{}", Self::entry(order_id, method_name)).map_err(|source| {
            error!("Failed to write audit log {}: {}", self.path.display(), source);
            AuditLogError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        info!("Audit log: order {} recorded", order_id);
        Ok(())
    }
}
