//! Spotlight Data Model
//!
//! Plain data shared by every Spotlight crate:
//! - **Geometry:** The lit circle (`x`, `y`, `radius`, `blur`) and per-tick step vectors
//! - **Color:** CSS-style RGBA colors used for the mask and its gradient
//! - **Events:** Pointer notifications in normalized page coordinates
//!
//! Coordinates are page pixels with the origin at the top-left of the
//! drawing surface.

pub mod color;
pub mod event;
pub mod geometry;

pub use color::*;
pub use event::*;
pub use geometry::*;
