//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Documentation links
//! - Proper exit codes for scripting
//!
//! # Examples
//!
//! ```
//! use coverwise::error::CoverwiseError;
//!
//! let err = CoverwiseError::RecommendationNotFound {
//!     id: "travel-cover".to_string(),
//! };
//!
//! assert!(err.suggestion().is_some());
//! assert_eq!(err.exit_code(), 65);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Enhanced coverwise errors with contextual suggestions
#[derive(Error, Debug)]
pub enum CoverwiseError {
    /// Recommendation id absent from the evaluated snapshot
    #[error("Recommendation not found: '{id}'")]
    RecommendationNotFound {
        /// The id that was requested
        id: String,
    },

    /// Fixture file missing from the fixtures directory
    #[error("Fixture file not found: {path}")]
    FixtureNotFound {
        /// Path to the missing fixture
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Fixture file present but not parseable
    #[error("Invalid fixture file: {path}")]
    InvalidFixture {
        /// Path to the malformed fixture
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// Configured two-policy rate outside the allowed band
    #[error("Two-policy rate {rate} outside allowed range {min}-{max}")]
    RateOutOfRange {
        /// Configured rate
        rate: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl CoverwiseError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// Returns a user-friendly suggestion for how to fix the error, if
    /// available.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::RecommendationNotFound { .. } => Some(
                "Recommendations are recomputed from live policy data.\n\
                 Run 'coverwise recommend' to list current ids, then retry."
                    .to_string(),
            ),
            Self::FixtureNotFound { .. } => {
                Some("Run 'coverwise init' to scaffold sample fixture files".to_string())
            }
            Self::InvalidFixture { path, .. } => Some(format!(
                "Fix the JSON in {} or regenerate it with 'coverwise init'",
                path.display()
            )),
            Self::RateOutOfRange { min, max, .. } => Some(format!(
                "Set rates.two-policy-rate between {} and {} in .coverwise.toml",
                min, max
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    ///
    /// Returns a URL to relevant documentation for resolving this error type.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::RecommendationNotFound { .. } => {
                Some("https://github.com/vitalratel/coverwise#recommendations")
            }
            Self::FixtureNotFound { .. } | Self::InvalidFixture { .. } => {
                Some("https://github.com/vitalratel/coverwise#fixtures")
            }
            Self::RateOutOfRange { .. } => {
                Some("https://github.com/vitalratel/coverwise#configuration")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following
    /// sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RecommendationNotFound { .. } => 65, // EX_DATAERR
            Self::FixtureNotFound { .. } => 66,        // EX_NOINPUT
            Self::InvalidFixture { .. } => 65,         // EX_DATAERR
            Self::RateOutOfRange { .. } => 78,         // EX_CONFIG
            Self::Io { .. } => 74,                     // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to CoverwiseError for suggestions
        if let Some(cw_error) = error.downcast_ref::<CoverwiseError>() {
            if let Some(suggestion) = cw_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = cw_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(cw_error) = error.downcast_ref::<CoverwiseError>() {
            cw_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
