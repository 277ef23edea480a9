pub mod enumeration;

pub mod error;
pub use error::*;

pub mod query;
pub use query::*;

pub mod store;

pub mod table;
pub use table::*;
