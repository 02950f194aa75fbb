//! Unified application error type.
//! All modules (props, models, db, config) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Cannot create table {0}: no usable SQL statement")]
    SqlDefinition(String),

    // ---------------------------
    // Field validation
    // ---------------------------
    // Single umbrella kind for every normalize/validate failure, so callers
    // need one catch site. The message carries field name and cause.
    #[error("Plugin rejected value: {0}")]
    Plugin(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Cannot modify immutable field: {0}")]
    ImmutableField(&'static str),

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
    // Logging
    // ---------------------------
    #[error("Logging error: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
