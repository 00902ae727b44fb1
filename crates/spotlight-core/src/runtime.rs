//! Cooperative tick loop on a tokio local task set.
//!
//! A [`SharedSpotlight`] hands out clones of one spotlight. The first
//! animation request that needs more than one tick spawns a local task that
//! sleeps for the configured interval, ticks, and repeats until the
//! animation reports it is finished. The next sleep is only started after
//! the previous tick's repaint returned, so ticks never overlap. Requests
//! made while the task runs just retarget the driver; the task picks the
//! new target up on its next iteration.
//!
//! Handlers run after the spotlight borrow is released, so they may call
//! back into the same `SharedSpotlight`. A notification raised from inside
//! a handler is delivered once that handler returns.
//!
//! Everything here must run inside a [`tokio::task::LocalSet`].

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use spotlight_common::error::SpotResult;
use spotlight_model::{PointerEvent, Rgba, SpotGeometry};
use spotlight_render::Surface;
use tokio::sync::Notify;

use crate::driver::TickStatus;
use crate::handlers::SpotlightHandlers;
use crate::hit_test::HitRegion;
use crate::input::EventSource;
use crate::spotlight::Spotlight;

/// A spotlight whose animations run on the local tokio task set.
#[derive(Debug)]
pub struct SharedSpotlight<S: Surface> {
    inner: Rc<RefCell<Spotlight<S>>>,
    handlers: Rc<RefCell<SpotlightHandlers>>,
    delivering: Rc<Cell<bool>>,
    looping: Rc<Cell<bool>>,
    idle: Rc<Notify>,
}

impl<S: Surface> Clone for SharedSpotlight<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            handlers: Rc::clone(&self.handlers),
            delivering: Rc::clone(&self.delivering),
            looping: Rc::clone(&self.looping),
            idle: Rc::clone(&self.idle),
        }
    }
}

impl<S: Surface + 'static> SharedSpotlight<S> {
    /// Take over `spotlight` and its handlers.
    ///
    /// An animation already in flight resumes on the next animation request.
    pub fn new(mut spotlight: Spotlight<S>) -> Self {
        let handlers = spotlight.take_handlers();
        Self {
            inner: Rc::new(RefCell::new(spotlight)),
            handlers: Rc::new(RefCell::new(handlers)),
            delivering: Rc::new(Cell::new(false)),
            looping: Rc::new(Cell::new(false)),
            idle: Rc::new(Notify::new()),
        }
    }

    /// Borrow the spotlight for inspection.
    pub fn spotlight(&self) -> Ref<'_, Spotlight<S>> {
        self.inner.borrow()
    }

    pub fn current(&self) -> SpotGeometry {
        *self.inner.borrow().current()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().is_animating()
    }

    pub fn show(&self, x: f64, y: f64, radius: Option<f64>) {
        self.inner.borrow_mut().show(x, y, radius);
    }

    pub fn hide(&self) {
        self.inner.borrow_mut().hide();
    }

    /// See [`Spotlight::animate_to`]; further ticks run on the local task set.
    pub fn animate_to(&self, x: f64, y: f64, radius: f64, blur: f64, steps: Option<u32>) {
        let status = self
            .inner
            .borrow_mut()
            .animate_to(x, y, radius, blur, steps);
        self.schedule(status);
    }

    pub fn move_to(&self, x: f64, y: f64) {
        let status = self.inner.borrow_mut().move_to(x, y);
        self.schedule(status);
    }

    pub fn resize_to(&self, radius: f64) {
        let status = self.inner.borrow_mut().resize_to(radius);
        self.schedule(status);
    }

    pub fn set_blur(&self, blur: f64) {
        let status = self.inner.borrow_mut().set_blur(blur);
        self.schedule(status);
    }

    pub fn set_background_color(&self, color: Rgba) {
        self.inner.borrow_mut().set_background_color(color);
    }

    pub fn set_spot_opacity(&self, start: f64, end: f64) {
        self.inner.borrow_mut().set_spot_opacity(start, end);
    }

    pub fn set_animation_speed(&self, steps: u32, interval: Duration) {
        self.inner.borrow_mut().set_animation_speed(steps, interval);
    }

    pub fn dispatch(&self, event: &PointerEvent) -> HitRegion {
        let region = self.inner.borrow_mut().dispatch(event);
        self.deliver();
        region
    }

    /// Subscribe `source` to the event kinds the handlers care about.
    ///
    /// Must not be called from inside a handler.
    pub fn attach<E: EventSource + ?Sized>(&self, source: &mut E) {
        self.handlers.borrow().attach(source);
    }

    /// Dispatch every event `source` has ready. Returns how many were handled.
    pub fn drain_events<E: EventSource + ?Sized>(&self, source: &mut E) -> SpotResult<usize> {
        let mut handled = 0;
        while let Some(event) = source.poll()? {
            self.dispatch(&event);
            handled += 1;
        }
        if handled > 0 {
            tracing::trace!(source = source.name(), handled, "Pointer events dispatched");
        }
        Ok(handled)
    }

    /// Resolve once no animation is running.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            if !self.is_animating() {
                return;
            }
            notified.await;
        }
    }

    fn schedule(&self, status: TickStatus) {
        self.deliver();
        match status {
            TickStatus::Continue if !self.looping.get() => {
                self.looping.set(true);
                tokio::task::spawn_local(run_tick_loop(self.clone()));
            }
            TickStatus::Continue => {}
            TickStatus::Finished => self.idle.notify_waiters(),
        }
    }

    /// Hand queued notifications to the handlers with no spotlight borrow held.
    fn deliver(&self) {
        if self.delivering.replace(true) {
            // An outer call is already delivering and will pick these up.
            return;
        }
        loop {
            let batch = self.inner.borrow_mut().take_notifications();
            if batch.is_empty() {
                break;
            }
            let mut handlers = self.handlers.borrow_mut();
            for notification in &batch {
                handlers.notify(notification);
            }
        }
        self.delivering.set(false);
    }
}

/// Tick until the animation finishes, re-reading interval and state each time.
async fn run_tick_loop<S: Surface + 'static>(shared: SharedSpotlight<S>) {
    loop {
        let interval = shared.inner.borrow().tick_interval();
        tokio::time::sleep(interval).await;

        let status = shared.inner.borrow_mut().tick();
        if status == TickStatus::Finished {
            break;
        }
        shared.deliver();
    }
    // Cleared before the end notification so a chained request starts a new loop.
    shared.looping.set(false);
    shared.deliver();
    shared.idle.notify_waiters();
}
