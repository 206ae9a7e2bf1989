// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the Lehua Index.
//!
//! Each component defines its own error enum; [`LehuaError`] gathers them
//! so the binary and other top-level callers can propagate any failure with
//! `?` and report it in one place.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data_structures::lehua_trie::LehuaTrieError;
use crate::index::IndexError;

pub mod codec;
pub mod config;

/// Result type alias used throughout the Lehua Index.
pub type LehuaResult<T> = Result<T, LehuaError>;

/// Core error enum for the Lehua Index.
#[derive(Error, Debug)]
pub enum LehuaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the prefix trie.
    #[error("Trie error: {0}")]
    Trie(#[from] LehuaTrieError),

    /// Errors raised while building or restoring the entity index.
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Errors raised while encoding or decoding JSON.
    #[error("Codec error: {0}")]
    Codec(#[from] codec::CodecError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: LehuaError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: LehuaError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the error reporter.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("Error: {context}");
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Report an error through the global error reporter.
pub fn report_error(context: ErrorContext) {
    ERROR_REPORTING.read().report(context);
}

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.write().set_reporter(reporter);
}
