pub mod aggregator;
pub mod formatter;
pub mod models;


pub use aggregator::*;
pub use formatter::*;
pub use models::*;
