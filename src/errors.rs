// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BemWatchError {
    /// A unit violates the structural constraints of the BEM naming scheme
    /// (empty block, element without block, malformed modifier).
    ///
    /// Fatal for the whole computation: a partial watch set could miss
    /// invalidations, so no result is produced past the first bad unit.
    #[error("invalid unit {unit}: {reason}")]
    InvalidUnit { unit: String, reason: String },

    /// The injected existence probe failed (I/O error, permission error).
    ///
    /// Deliberately distinct from returning the unfiltered superset: callers
    /// must be able to tell "filtered" from "unable to filter".
    #[error("existence check failed")]
    ExistenceCheck(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BemWatchError>;
