//! Audio engine: opening tracks and owning the live output handle.
//!
//! The [`Engine`] trait is the seam between the playback controller and the
//! audio backend; `RodioEngine` is the real implementation.

mod engine;
mod sink;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use engine::*;
pub use sink::*;
pub use types::*;

#[cfg(test)]
mod tests;
