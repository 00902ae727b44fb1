//! The spotlight: one animated cutout on one overlay surface.
//!
//! [`Spotlight`] is synchronous. Animation requests tick once immediately
//! and report whether more ticks are needed; something else decides when
//! those happen. [`crate::runtime::SharedSpotlight`] runs them on tokio,
//! [`Spotlight::run_to_completion`] runs them back to back.
//!
//! Handler notifications are queued while an operation runs and delivered
//! when it returns. Once the handlers are detached with
//! [`Spotlight::take_handlers`], the queue is left for the owner to drain
//! with [`Spotlight::take_notifications`].

use std::time::Duration;

use spotlight_common::config::SpotlightConfig;
use spotlight_common::error::SpotResult;
use spotlight_model::{PointerEvent, PointerKind, Rgba, SpotGeometry, StepVector};
use spotlight_render::{acquire_surface, MaskRenderer, MaskStyle, Surface, SurfaceHost};

use crate::driver::{AnimationDriver, AnimationPhase, TickStatus};
use crate::handlers::{Notification, SpotlightHandlers};
use crate::hit_test::{hit_test, HitRegion};
use crate::input::EventSource;

/// Surface id used when a caller has no reason to pick one.
pub const DEFAULT_SURFACE_ID: &str = "spotlight_canvas";

/// An animated spotlight overlay.
#[derive(Debug)]
pub struct Spotlight<S: Surface> {
    config: SpotlightConfig,
    handlers: Option<SpotlightHandlers>,
    pending: Vec<Notification>,
    renderer: MaskRenderer,
    driver: AnimationDriver,
    surface: S,
}

impl<S: Surface> Spotlight<S> {
    /// Create a spotlight drawing on the host surface registered under `id`,
    /// creating that surface if it does not exist yet.
    pub fn new<H>(
        id: &str,
        config: SpotlightConfig,
        handlers: SpotlightHandlers,
        host: &mut H,
    ) -> SpotResult<Self>
    where
        H: SurfaceHost<Surface = S>,
    {
        config.validate()?;
        let surface = acquire_surface(host, id, config.surface_z_order)?;
        Self::with_surface(config, handlers, surface)
    }

    /// Create a spotlight drawing on an existing surface.
    ///
    /// Nothing is drawn until the first `show` or animation.
    pub fn with_surface(
        config: SpotlightConfig,
        handlers: SpotlightHandlers,
        surface: S,
    ) -> SpotResult<Self> {
        config.validate()?;
        let initial = SpotGeometry::new(0.0, 0.0, config.size, config.blur_radius);
        tracing::debug!(
            size = config.size,
            blur = config.blur_radius,
            steps = config.default_steps,
            interval_ms = config.tick_interval_ms,
            "Spotlight created"
        );

        Ok(Self {
            renderer: MaskRenderer::new(MaskStyle::from(&config)),
            driver: AnimationDriver::new(initial),
            config,
            handlers: Some(handlers),
            pending: Vec::new(),
            surface,
        })
    }

    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current lit-circle geometry.
    pub fn current(&self) -> &SpotGeometry {
        self.driver.current()
    }

    /// Destination of the latest animation request.
    pub fn target(&self) -> &SpotGeometry {
        self.driver.target()
    }

    pub fn step(&self) -> &StepVector {
        self.driver.step()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_active()
    }

    /// Frames drawn so far (repaints and hides).
    pub fn repaint_count(&self) -> u64 {
        self.renderer.repaint_count()
    }

    /// Delay the tick loop waits between ticks.
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Draw the spot at `(x, y)` immediately. `radius` defaults to the current one.
    pub fn show(&mut self, x: f64, y: f64, radius: Option<f64>) {
        let current = *self.driver.current();
        let mut geometry =
            current.with_position(finite_or("x", x, current.x), finite_or("y", y, current.y));
        if let Some(radius) = radius {
            geometry = geometry.with_radius(sanitize("radius", radius, current.radius));
        }
        self.driver.set_current(geometry);
        self.repaint();
    }

    /// Cover the page with the mask, no cutout.
    pub fn hide(&mut self) {
        self.renderer.hide(&mut self.surface);
    }

    /// Animate every field toward the given values over `steps` ticks
    /// (the configured default when `None` or zero).
    ///
    /// When no animation is running, fires the start handler and performs
    /// the first tick before returning. When one is running, it is
    /// redirected to the new target and keeps its pending start/end
    /// pairing: no extra start now, one end when the new target is reached.
    pub fn animate_to(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        blur: f64,
        steps: Option<u32>,
    ) -> TickStatus {
        let steps = match steps {
            Some(n) if n > 0 => n,
            _ => self.config.default_steps,
        };
        let current = *self.driver.current();
        let target = SpotGeometry {
            x: finite_or("x", x, current.x),
            y: finite_or("y", y, current.y),
            radius: sanitize("radius", radius, current.radius),
            blur: sanitize("blur", blur, current.blur),
        };

        match self.driver.animate_to(target, steps) {
            AnimationPhase::Started => {
                tracing::debug!(x, y, radius, blur, steps, "Animation started");
                self.pending.push(Notification::AnimationStart);
                self.tick()
            }
            AnimationPhase::Retargeted => {
                tracing::debug!(x, y, radius, blur, steps, "Animation retargeted");
                TickStatus::Continue
            }
        }
    }

    /// Animate the center to `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> TickStatus {
        let SpotGeometry { radius, blur, .. } = *self.driver.current();
        self.animate_to(x, y, radius, blur, None)
    }

    /// Animate the lit radius to `radius`.
    pub fn resize_to(&mut self, radius: f64) -> TickStatus {
        let SpotGeometry { x, y, blur, .. } = *self.driver.current();
        self.animate_to(x, y, radius, blur, None)
    }

    /// Animate the soft-edge width to `blur`.
    pub fn set_blur(&mut self, blur: f64) -> TickStatus {
        let SpotGeometry { x, y, radius, .. } = *self.driver.current();
        self.animate_to(x, y, radius, blur, None)
    }

    /// Change the mask color and repaint at the current geometry.
    pub fn set_background_color(&mut self, color: Rgba) {
        tracing::debug!(%color, "Background color changed");
        self.config.background_color = color;
        self.renderer.set_style(MaskStyle::from(&self.config));
        self.repaint();
    }

    /// Change the light opacity at the center and at the lit radius, then
    /// repaint. Values are clamped to `[0, 1]`.
    pub fn set_spot_opacity(&mut self, start: f64, end: f64) {
        self.config.light_start_opacity = clamp_opacity("start", start);
        self.config.light_end_opacity = clamp_opacity("end", end);
        tracing::debug!(
            start = self.config.light_start_opacity,
            end = self.config.light_end_opacity,
            "Spot opacity changed"
        );
        self.renderer.set_style(MaskStyle::from(&self.config));
        self.repaint();
    }

    /// Change the default step count and the tick interval.
    ///
    /// An animation already running keeps its steps but picks up the new
    /// interval on its next tick. The interval has millisecond resolution:
    /// any sub-millisecond remainder is dropped.
    pub fn set_animation_speed(&mut self, steps: u32, interval: Duration) {
        self.config.default_steps = steps.max(1);
        self.config.tick_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(
            steps = self.config.default_steps,
            interval_ms = self.config.tick_interval_ms,
            "Animation speed changed"
        );
    }

    /// Perform one animation tick and repaint.
    ///
    /// Fires the end handler on the tick that finds nothing left to move.
    /// Does nothing when no animation is running.
    pub fn tick(&mut self) -> TickStatus {
        if !self.driver.is_active() {
            return TickStatus::Finished;
        }

        let status = self.driver.tick();
        self.repaint();
        tracing::trace!(tick = self.driver.ticks(), ?status, "Animation tick");

        if status == TickStatus::Finished {
            tracing::debug!(ticks = self.driver.ticks(), "Animation finished");
            self.pending.push(Notification::AnimationEnd);
        }
        self.deliver();
        status
    }

    /// Tick without waiting until the running animation finishes.
    /// Returns the number of ticks performed.
    pub fn run_to_completion(&mut self) -> u32 {
        let mut ticks = 0;
        while self.driver.is_active() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Classify a page position against the current geometry.
    pub fn hit_test(&self, page_x: f64, page_y: f64) -> HitRegion {
        hit_test(self.driver.current(), page_x, page_y)
    }

    /// Route a pointer event to the matching handler.
    pub fn dispatch(&mut self, event: &PointerEvent) -> HitRegion {
        let region = self.hit_test(event.page_x, event.page_y);
        let notification = match (event.kind, region) {
            (PointerKind::Move, HitRegion::Spot) => Notification::PointerEnter(*event),
            (PointerKind::Move, HitRegion::Mask) => Notification::PointerLeave(*event),
            (PointerKind::Click, HitRegion::Spot) => Notification::SpotClick(*event),
            (PointerKind::Click, HitRegion::Mask) => Notification::MaskClick(*event),
        };
        self.pending.push(notification);
        self.deliver();
        region
    }

    /// Subscribe `source` to the event kinds this spotlight has handlers for.
    /// Does nothing once the handlers are detached.
    pub fn attach<E: EventSource + ?Sized>(&self, source: &mut E) {
        if let Some(handlers) = &self.handlers {
            handlers.attach(source);
        }
    }

    /// Detach the handlers. Later notifications queue up until taken with
    /// [`Spotlight::take_notifications`]. Returns empty handlers if already
    /// detached.
    pub fn take_handlers(&mut self) -> SpotlightHandlers {
        self.handlers.take().unwrap_or_default()
    }

    /// Notifications not yet delivered, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    fn deliver(&mut self) {
        if let Some(handlers) = self.handlers.as_mut() {
            for notification in self.pending.drain(..) {
                handlers.notify(&notification);
            }
        }
    }

    fn repaint(&mut self) {
        let geometry = *self.driver.current();
        self.renderer.repaint(&mut self.surface, &geometry);
    }
}

fn finite_or(field: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(field, value, "Non-finite spot value ignored");
        fallback
    }
}

fn sanitize(field: &str, value: f64, fallback: f64) -> f64 {
    let value = finite_or(field, value, fallback);
    if value < 0.0 {
        tracing::warn!(field, value, "Negative spot extent clamped to zero");
        0.0
    } else {
        value
    }
}

fn clamp_opacity(which: &str, value: f64) -> f64 {
    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    if clamped != value {
        tracing::warn!(which, value, "Spot opacity clamped to [0, 1]");
    }
    clamped
}
