//! Media catalog: the audio tracks and cover images of one folder.
//!
//! `scan` builds a [`Catalog`] from a directory listing and `resolve` picks
//! the cover image to show for a given track.

mod cover;
mod model;
mod scan;

pub use cover::*;
pub use model::*;
pub use scan::*;
