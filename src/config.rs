//! Persisted configuration and the store that loads/saves it.
//!
//! The configuration is a single record (the media folder) kept in a small
//! versioned TOML file next to the working directory.

mod load;
mod schema;

pub use load::*;
pub use schema::*;

#[cfg(test)]
mod tests;
