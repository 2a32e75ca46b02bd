pub mod error;
pub mod loader;
pub mod models;

pub use error::DatasetError;
pub use loader::*;
pub use models::*;
