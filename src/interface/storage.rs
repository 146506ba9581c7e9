use crate::{Category, StdResult};

/// A trait for storing categories on a local storage medium.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CategoryStorage: Sync + Send {
    /// Loads the stored categories.
    async fn load_categories(&self) -> StdResult<Vec<Category>>;

    /// Stores the categories, replacing any previous ones.
    async fn store_categories(&self, categories: &[Category]) -> StdResult<()>;
}
