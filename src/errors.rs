/*!
 * Error types for the ytldr application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a caption provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an HTTP request fails
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a provider response fails
    #[error("Failed to parse provider response: {0}")]
    ParseError(String),

    /// Error returned by the remote service itself
    #[error("Provider responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the service
        message: String,
    },

    /// The video has no caption track to fetch
    #[error("No captions available for video: {0}")]
    NoCaptions(String),
}

/// Errors that can occur during summarization
///
/// The selection operation never lets an internal fault escape; every failure
/// is converted into one of these variants at the operation boundary.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The input text contained no sentences after segmentation
    #[error("Input text contains no sentences")]
    EmptyInput,

    /// The requested sentence budget is non-positive
    #[error("Invalid target sentence count: {0} (must be at least 1)")]
    InvalidTarget(i64),

    /// Any unexpected fault during segmentation or selection
    #[error("Summarization failed: {0}")]
    Processing(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The input could not be resolved to a video identifier
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// Error from a caption provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the summarization core
    #[error("Summarize error: {0}")]
    Summarize(#[from] SummarizeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
