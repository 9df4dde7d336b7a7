mod error;
pub use error::Error;

mod policy;
pub use policy::DefaultValueMode;

pub mod schema;
pub use schema::Registry;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
