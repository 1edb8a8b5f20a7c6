//! Error Types

use thiserror::Error;

/// The page markup does not match what a component needs
#[derive(Debug, Error, PartialEq)]
pub enum MarkupError {
    #[error("required element `{selector}` not found")]
    MissingElement { selector: String },

    #[error("element `{selector}` is not a <{expected}>")]
    WrongElementType { selector: String, expected: &'static str },

    #[error("invalid selector `{selector}`")]
    BadSelector { selector: String },

    #[error("DOM call failed: {0}")]
    Dom(String),
}

/// A contact form submission did not go through
#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("submission not delivered: {0}")]
    Undelivered(String),
}
