mod config;
mod error;
mod registry;
mod repository;

pub use config::*;
pub use error::*;
pub use registry::*;
pub use repository::*;
