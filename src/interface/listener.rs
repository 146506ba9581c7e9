use crate::Category;

/// A capability receiving the categories of a fetch.
///
/// Invoked at most once per fetch, from a runtime worker thread.
#[cfg_attr(test, mockall::automock)]
pub trait CategoriesListener: Sync + Send {
    /// Delivers the loaded categories, in server order.
    fn on_categories_loaded(&self, categories: Vec<Category>);
}
