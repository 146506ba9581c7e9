mod listener;
mod service;
mod storage;

pub use listener::*;
pub use service::*;
pub use storage::*;
