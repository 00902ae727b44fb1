//! Software raster surface.
//!
//! Pixels hold straight (non-premultiplied) RGBA in `[0.0, 1.0]`. Shapes
//! are sampled at pixel centers, so a pixel is either covered or not; no
//! anti-aliasing.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use spotlight_model::{Point2D, Rgba};

use crate::gradient::RadialGradient;
use crate::surface::{BlendMode, Surface};

/// One raster pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl From<Rgba> for Pixel {
    fn from(color: Rgba) -> Self {
        Self {
            r: color.r as f64 / 255.0,
            g: color.g as f64 / 255.0,
            b: color.b as f64 / 255.0,
            a: color.a,
        }
    }
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Combine `src` onto `self` under `mode`.
    fn blend(&mut self, src: Pixel, mode: BlendMode) {
        match mode {
            BlendMode::SourceOver => {
                let out_a = src.a + self.a * (1.0 - src.a);
                if out_a <= 0.0 {
                    *self = Pixel::TRANSPARENT;
                    return;
                }
                let dst = *self;
                let mix = |s: f64, d: f64| (s * src.a + d * dst.a * (1.0 - src.a)) / out_a;
                *self = Pixel {
                    r: mix(src.r, dst.r),
                    g: mix(src.g, dst.g),
                    b: mix(src.b, dst.b),
                    a: out_a,
                };
            }
            BlendMode::DestinationOut => {
                self.a *= 1.0 - src.a;
            }
        }
    }
}

/// An in-memory RGBA surface.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    z_order: i32,
    blend: BlendMode,
    pixels: Vec<Pixel>,
}

impl PixelSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            z_order: 0,
            blend: BlendMode::SourceOver,
            pixels: vec![Pixel::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Same surface stacked at `z_order`.
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Mask coverage at `(x, y)`: 0 is fully lit, 1 fully masked.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<f64> {
        self.pixel(x, y).map(|p| p.a)
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Whether every pixel has exactly this alpha.
    pub fn is_uniform_alpha(&self, alpha: f64) -> bool {
        self.pixels.iter().all(|p| (p.a - alpha).abs() < 1e-9)
    }

    /// Clamp a span `[start, end)` in surface units to pixel indices.
    fn span(start: f64, end: f64, limit: u32) -> (u32, u32) {
        let lo = start.floor().max(0.0).min(limit as f64) as u32;
        let hi = end.ceil().max(0.0).min(limit as f64) as u32;
        (lo, hi)
    }

    fn blend_at(&mut self, x: u32, y: u32, src: Pixel) {
        let index = y as usize * self.width as usize + x as usize;
        let mode = self.blend;
        self.pixels[index].blend(src, mode);
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.pixels.fill(Pixel::TRANSPARENT);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        let (x0, x1) = Self::span(x, x + width, self.width);
        let (y0, y1) = Self::span(y, y + height, self.height);
        let src = Pixel::from(color);

        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_at(px, py, src);
            }
        }
    }

    fn fill_circle(&mut self, center: Point2D, radius: f64, paint: &RadialGradient) {
        if radius <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(center.x - radius, center.x + radius, self.width);
        let (y0, y1) = Self::span(center.y - radius, center.y + radius, self.height);
        let radius_sq = radius * radius;

        for py in y0..y1 {
            for px in x0..x1 {
                let sample = Point2D::new(px as f64 + 0.5, py as f64 + 0.5);
                if center.distance_squared_to(&sample) > radius_sq {
                    continue;
                }
                let src = Pixel::from(paint.color_at(sample));
                self.blend_at(px, py, src);
            }
        }
    }
}

/// A [`PixelSurface`] shared between its host and the spotlight drawing on it.
#[derive(Debug, Clone)]
pub struct SharedPixelSurface(Rc<RefCell<PixelSurface>>);

impl SharedPixelSurface {
    pub fn new(surface: PixelSurface) -> Self {
        Self(Rc::new(RefCell::new(surface)))
    }

    /// Borrow the underlying raster for inspection.
    pub fn borrow(&self) -> Ref<'_, PixelSurface> {
        self.0.borrow()
    }

    /// Whether two handles refer to the same surface.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Surface for SharedPixelSurface {
    fn size(&self) -> (u32, u32) {
        self.0.borrow().size()
    }

    fn clear(&mut self) {
        self.0.borrow_mut().clear();
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.0.borrow_mut().set_blend_mode(mode);
    }

    fn blend_mode(&self) -> BlendMode {
        self.0.borrow().blend_mode()
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.0.borrow_mut().fill_rect(x, y, width, height, color);
    }

    fn fill_circle(&mut self, center: Point2D, radius: f64, paint: &RadialGradient) {
        self.0.borrow_mut().fill_circle(center, radius, paint);
    }
}
