mod config;
mod entities;
mod error;
mod outcome;
mod response;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use outcome::*;
pub use response::*;
