mod fetcher_category;
mod listener_printer;
mod service_http;

pub use fetcher_category::*;
pub use listener_printer::*;
pub use service_http::*;
