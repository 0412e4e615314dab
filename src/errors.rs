// ABOUTME: Unified error handling for the recipe suggester engine and its callers
// ABOUTME: Defines validation errors, error codes, AppError and the JSON error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Two layers live here:
//!
//! - [`ValidationError`] is the engine's own taxonomy. It is returned verbatim by
//!   the macro planner and by `Nutrition::new`, and is never retried: the engine is
//!   deterministic, so the same input always yields the same error.
//! - [`AppError`] is the caller-facing error with a stable [`ErrorCode`], used at the
//!   catalog loading and CLI boundary. Every engine error converts into it.

use std::error::Error as StdError;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::config::intelligence::ConfigError;

/// Input rejected by the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Macro percentages do not add up to exactly 100
    #[error("macro percentages must sum to 100, got {total}")]
    PercentSum {
        /// The computed protein + fat + carb total
        total: f64,
    },

    /// A numeric input lies outside its declared domain
    #[error("value out of range for field `{field}`")]
    Range {
        /// Name of the offending field, as it appears on the wire
        field: &'static str,
    },
}

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be accepted
    InvalidInput = 3000,
    /// A number is outside its allowed range
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Reading the catalog from storage failed
    StorageError = 9002,
    /// JSON (de)serialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code a transport collaborator should use for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => 400,

            Self::InternalError
            | Self::StorageError
            | Self::SerializationError
            | Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details for the error envelope
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let message = error.to_string();
        match error {
            ValidationError::PercentSum { total } => Self::new(ErrorCode::InvalidInput, message)
                .with_details(json!({ "total": total })),
            ValidationError::Range { field } => Self::new(ErrorCode::ValueOutOfRange, message)
                .with_details(json!({ "field": field })),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

/// Error response envelope handed to a transport collaborator
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}
