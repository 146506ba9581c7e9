use std::fmt::Display;

use super::{Category, FetcherError};

/// The terminal outcome of one category fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A non-empty list of categories, in server order.
    Success(Vec<Category>),

    /// The server answered successfully with no categories.
    Empty,

    /// The fetch failed.
    Failure(FetcherError),
}

impl FetchOutcome {
    /// Returns whether the outcome carries categories.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// Retrieves the categories, empty unless the outcome is a success.
    pub fn categories(&self) -> &[Category] {
        match self {
            FetchOutcome::Success(categories) => categories,
            _ => &[],
        }
    }
}

impl Display for FetchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchOutcome::Success(categories) => {
                write!(f, "Success: {} categories", categories.len())
            }
            FetchOutcome::Empty => write!(f, "Empty"),
            FetchOutcome::Failure(error) => write!(f, "Failure: {error}"),
        }
    }
}
