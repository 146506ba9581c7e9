//! Fetches a hierarchical category list from a remote endpoint and delivers it
//! asynchronously to a listener.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
