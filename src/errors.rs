//! Unified application error type.
//! Every module (input, core, export, cli, config) returns AppError so the
//! binary can print any failure verbatim.

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
    // Input table
    // ---------------------------
    #[error("Missing required columns in the uploaded file: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid timestamp at row {row}: '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("No records found in the uploaded file")]
    EmptyInput,

    #[error("Unsupported input file: {0}")]
    UnsupportedInput(String),

    #[error("Failed to read input file: {0}")]
    Read(String),

    // ---------------------------
    // Presentation
    // ---------------------------
    #[error("Invalid expected hours: {0}")]
    InvalidExpectedHours(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<calamine::Error> for AppError {
    fn from(e: calamine::Error) -> Self {
        AppError::Read(e.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Read(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
