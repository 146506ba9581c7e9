use crate::{RawResponse, StdResult};

/// A remote service exposing the category listing.
///
/// An error means no response was received at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CategoryService: Sync + Send {
    /// Requests the category collection.
    async fn get_categories(&self) -> StdResult<RawResponse>;
}
