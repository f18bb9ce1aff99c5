//! Failure taxonomy of the location search.
//!
//! These errors never leave the crate's public pipeline: the resolver logs
//! them and reports "no match" instead.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a search results page did not yield a location name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("results table has no row {0}")]
    MissingRow(usize),

    #[error("result row has no cell {0}")]
    MissingCell(usize),

    #[error("name cell contains no link")]
    MissingLink,

    #[error("name link has no text")]
    EmptyName,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("location search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("location search returned status {0}")]
    Status(StatusCode),

    #[error("unexpected search results markup: {0}")]
    Extract(#[from] ExtractError),
}
