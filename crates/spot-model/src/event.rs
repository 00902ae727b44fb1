//! Pointer notifications delivered to a spotlight.
//!
//! Every event carries page coordinates. Environments that only report
//! viewport-relative ("client") coordinates go through [`RawPointerSample`],
//! which adds the scroll offset once so nothing downstream has to care.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

/// Which pointer notification occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// The pointer moved over the surface.
    Move,
    /// A click landed on the surface.
    Click,
}

/// A pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    /// Create a move notification.
    pub fn moved(page_x: f64, page_y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            page_x,
            page_y,
        }
    }

    /// Create a click notification.
    pub fn click(page_x: f64, page_y: f64) -> Self {
        Self {
            kind: PointerKind::Click,
            page_x,
            page_y,
        }
    }
}

/// A pointer sample as reported by the host environment, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPointerSample {
    pub kind: PointerKind,
    /// Page coordinates, when the environment provides them.
    #[serde(default)]
    pub page: Option<Point2D>,
    /// Viewport-relative coordinates.
    pub client: Point2D,
    /// Scroll offset of the document at sample time.
    #[serde(default = "origin")]
    pub scroll: Point2D,
}

impl RawPointerSample {
    /// Page coordinates: reported ones if present, otherwise client + scroll.
    pub fn page_coords(&self) -> Point2D {
        self.page.unwrap_or(Point2D::new(
            self.client.x + self.scroll.x,
            self.client.y + self.scroll.y,
        ))
    }

    /// Convert into a normalized [`PointerEvent`].
    pub fn normalize(&self) -> PointerEvent {
        let page = self.page_coords();
        PointerEvent {
            kind: self.kind,
            page_x: page.x,
            page_y: page.y,
        }
    }
}

impl From<RawPointerSample> for PointerEvent {
    fn from(sample: RawPointerSample) -> Self {
        sample.normalize()
    }
}

fn origin() -> Point2D {
    Point2D::new(0.0, 0.0)
}
