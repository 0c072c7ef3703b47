use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No recipe for dish: {0}")]
    DishNotFound(String),

    #[error("Failed to read {}: {source}", path.display())]
    TableRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a valid table: {source}", path.display())]
    TableParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write stock file {}: {source}", path.display())]
    StockWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Export write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Shopping list CSV failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid recipe or stock data: {0}")]
    InvalidData(String),

    #[error("Exporter '{exporter}' is not available: {reason}")]
    ExporterUnavailable { exporter: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
