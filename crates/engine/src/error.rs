//! The module contains the errors the engine can throw.
//!
//! The engine is total over well-formed input; the only failure it reports
//! is a non-finite balance reaching the simplifier, which would otherwise
//! turn into nonsense transfers.

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Non-finite amount: {0}")]
    NonFiniteAmount(String),
}
