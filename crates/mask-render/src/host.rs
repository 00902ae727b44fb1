//! Surface lookup and creation.
//!
//! A spotlight draws on one full-page surface registered under its id.
//! Acquiring twice with the same id hands back the same surface.

use std::collections::HashMap;

use spotlight_common::error::{SpotResult, SpotlightError};

use crate::pixel::{PixelSurface, SharedPixelSurface};
use crate::surface::Surface;

/// How a newly created overlay surface is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSpec {
    /// Width in pixels (the full page width).
    pub width: u32,
    /// Height in pixels (the full page height).
    pub height: u32,
    /// Stacking order relative to page content.
    pub z_order: i32,
}

/// An environment that owns overlay surfaces.
pub trait SurfaceHost {
    type Surface: Surface;

    /// Full page dimensions in pixels.
    fn page_size(&self) -> (u32, u32);

    /// The surface registered under `id`, if any.
    fn find_surface(&self, id: &str) -> Option<Self::Surface>;

    /// Create and register a surface under `id`.
    fn create_surface(&mut self, id: &str, spec: SurfaceSpec) -> SpotResult<Self::Surface>;
}

/// Return the surface registered under `id`, creating it if needed.
pub fn acquire_surface<H: SurfaceHost>(
    host: &mut H,
    id: &str,
    z_order: i32,
) -> SpotResult<H::Surface> {
    if let Some(surface) = host.find_surface(id) {
        tracing::info!(id, "Reusing existing spotlight surface");
        return Ok(surface);
    }

    let (width, height) = host.page_size();
    let spec = SurfaceSpec {
        width,
        height,
        z_order,
    };
    let surface = host.create_surface(id, spec)?;
    tracing::info!(id, width, height, z_order, "Created spotlight surface");
    Ok(surface)
}

/// In-memory host backed by [`PixelSurface`]s.
#[derive(Debug, Default)]
pub struct PixelHost {
    page_width: u32,
    page_height: u32,
    surfaces: HashMap<String, SharedPixelSurface>,
}

impl PixelHost {
    pub fn new(page_width: u32, page_height: u32) -> Self {
        Self {
            page_width,
            page_height,
            surfaces: HashMap::new(),
        }
    }

    /// Number of registered surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}

impl SurfaceHost for PixelHost {
    type Surface = SharedPixelSurface;

    fn page_size(&self) -> (u32, u32) {
        (self.page_width, self.page_height)
    }

    fn find_surface(&self, id: &str) -> Option<SharedPixelSurface> {
        self.surfaces.get(id).cloned()
    }

    fn create_surface(&mut self, id: &str, spec: SurfaceSpec) -> SpotResult<SharedPixelSurface> {
        if spec.width == 0 || spec.height == 0 {
            return Err(SpotlightError::surface_unavailable(
                id,
                format!("page has no area ({}x{})", spec.width, spec.height),
            ));
        }

        let surface = SharedPixelSurface::new(
            PixelSurface::new(spec.width, spec.height).with_z_order(spec.z_order),
        );
        self.surfaces.insert(id.to_string(), surface.clone());
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_is_idempotent() {
        let mut host = PixelHost::new(64, 48);
        let first = acquire_surface(&mut host, "spotlight_canvas", 100).unwrap();
        let second = acquire_surface(&mut host, "spotlight_canvas", 5).unwrap();

        assert!(first.ptr_eq(&second));
        assert_eq!(host.surface_count(), 1);
        // The first z-order sticks.
        assert_eq!(second.borrow().z_order(), 100);
    }

    #[test]
    fn test_distinct_ids_get_distinct_surfaces() {
        let mut host = PixelHost::new(64, 48);
        let a = acquire_surface(&mut host, "a", 1).unwrap();
        let b = acquire_surface(&mut host, "b", 1).unwrap();

        assert!(!a.ptr_eq(&b));
        assert_eq!(a.size(), (64, 48));
    }

    #[test]
    fn test_empty_page_is_unavailable() {
        let mut host = PixelHost::new(0, 100);
        let err = acquire_surface(&mut host, "x", 1).unwrap_err();
        assert!(matches!(err, SpotlightError::SurfaceUnavailable { .. }));
    }
}
