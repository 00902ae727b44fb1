//! Spotlight Mask Renderer
//!
//! Paints the darkened overlay and cuts the soft-edged spot out of it.
//!
//! # Repaint Sequence
//!
//! ```text
//! clear ──► fill background (source-over)
//!                 │
//!                 ├── radius + blur == 0 ──► done (fully masked)
//!                 │
//!                 ▼
//!       radial gradient at (x, y), 0..radius+blur
//!                 │
//!                 ▼
//!       fill circle (destination-out) ──► restore source-over
//! ```
//!
//! Drawing goes through the [`Surface`] trait. [`PixelSurface`] is a
//! software raster and [`RecordingSurface`] captures the command stream.

pub mod gradient;
pub mod host;
pub mod mask;
pub mod pixel;
pub mod recording;
pub mod surface;

pub use gradient::*;
pub use host::*;
pub use mask::*;
pub use pixel::*;
pub use recording::*;
pub use surface::*;
