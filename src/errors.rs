//! Unified application error type.
//! Every fallible layer (feed, config, cli, export) returns AppError so the
//! binary has a single place where failures are reported.
//! The filter/selection/order engine is total and never produces one.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Feed / ingestion
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No roster sheet found for {0}")]
    SheetNotFound(String),

    #[error("Malformed feed at line {line}: {reason}")]
    FeedSchema { line: u64, reason: String },

    // ---------------------------
    // Parsing errors (user input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid station: {0}")]
    InvalidStation(String),

    #[error("Invalid shift: {0}")]
    InvalidShift(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
