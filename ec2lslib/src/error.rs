//! Error types for ec2lslib

use thiserror::Error;

/// Errors that stop a listing.
///
/// Per-cell resolution problems are not errors at this level; they are
/// [`ResolutionMiss`](crate::resolve::ResolutionMiss) values kept inside rows.
#[derive(Error, Debug)]
pub enum Ec2lsError {
    /// Failed to open or read the instance input
    #[error("failed to read input '{input}'")]
    Input {
        input: String,
        source: std::io::Error,
    },

    /// Input is not a describe-instances document
    #[error("malformed describe-instances JSON in '{input}'")]
    Decode {
        input: String,
        source: serde_json::Error,
    },

    /// Filter token is not `EXPR=VALUE`
    #[error("invalid filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    /// Writing the rendered output failed
    #[error("failed to write output")]
    Render(#[from] std::io::Error),
}
