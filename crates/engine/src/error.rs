//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidKind`] thrown when a movement kind is not one of the two domain
//!   literals.
//! - [`InvalidAmount`] thrown when an amount does not parse or is not
//!   strictly positive.
//! - [`EmptyDescription`] thrown when a description is empty after trimming.
//!
//! [`InvalidKind`]: EngineError::InvalidKind
//! [`InvalidAmount`]: EngineError::InvalidAmount
//! [`EmptyDescription`]: EngineError::EmptyDescription
use thiserror::Error;

/// Engine custom errors.
///
/// All of them are local validation failures: synchronous, never retried, and
/// never fatal. A failed construction leaves any [`Ledger`](crate::Ledger)
/// untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid movement kind: \"{0}\"")]
    InvalidKind(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Description must not be empty")]
    EmptyDescription,
}
