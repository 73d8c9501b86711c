//! Application module: the state the terminal UI renders and mutates.
//!
//! `App` ties the configuration, catalog and playback controller together and
//! turns their errors into notices.

mod chooser;
mod model;
mod notice;
mod visualizer;

pub use chooser::*;
pub use model::*;
pub use notice::*;
pub use visualizer::*;
