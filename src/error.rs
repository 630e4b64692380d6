// Error types for the user list. Both variants are recoverable: the UI
// reports them through the console and keeps the prompt loop running.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be a positive whole number")]
    InvalidAge,

    #[error("no user named {0:?}")]
    NotFound(String),
}
