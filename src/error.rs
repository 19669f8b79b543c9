//! Defines custom error types for the application.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("list response does not appear valid: no top-level `items:` line was found")]
    NotAListResponse,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
