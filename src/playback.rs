//! Playback controller and its state.
//!
//! [`PlaybackState`] is a plain value; [`Controller`] applies its transitions
//! and owns the single live engine handle.

mod controller;
mod state;
mod timer;

pub use controller::*;
pub use state::*;
pub use timer::*;
