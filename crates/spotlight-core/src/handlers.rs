//! Optional callbacks a spotlight notifies.

use std::fmt;

use spotlight_model::{PointerEvent, PointerKind};

use crate::input::EventSource;

/// Callback receiving the pointer event that triggered it.
pub type PointerHandler = Box<dyn FnMut(&PointerEvent)>;

/// Callback for animation lifecycle transitions.
pub type LifecycleHandler = Box<dyn FnMut()>;

/// Something a spotlight reports to its handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    PointerEnter(PointerEvent),
    PointerLeave(PointerEvent),
    SpotClick(PointerEvent),
    MaskClick(PointerEvent),
    AnimationStart,
    AnimationEnd,
}

/// The six optional hooks. Unset hooks are skipped.
///
/// Hooks never run while the spotlight is borrowed, so a hook may drive a
/// [`crate::runtime::SharedSpotlight`] it captured.
#[derive(Default)]
pub struct SpotlightHandlers {
    pointer_enter: Option<PointerHandler>,
    pointer_leave: Option<PointerHandler>,
    spot_click: Option<PointerHandler>,
    mask_click: Option<PointerHandler>,
    animation_start: Option<LifecycleHandler>,
    animation_end: Option<LifecycleHandler>,
}

impl SpotlightHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved while inside the lit circle.
    pub fn on_pointer_enter(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.pointer_enter = Some(Box::new(f));
        self
    }

    /// Pointer moved while outside the lit circle.
    pub fn on_pointer_leave(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.pointer_leave = Some(Box::new(f));
        self
    }

    /// Click inside the lit circle.
    pub fn on_spot_click(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.spot_click = Some(Box::new(f));
        self
    }

    /// Click on the darkened mask.
    pub fn on_mask_click(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.mask_click = Some(Box::new(f));
        self
    }

    pub fn on_animation_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.animation_start = Some(Box::new(f));
        self
    }

    pub fn on_animation_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.animation_end = Some(Box::new(f));
        self
    }

    /// Whether move notifications have anyone to go to.
    pub fn wants_moves(&self) -> bool {
        self.pointer_enter.is_some() || self.pointer_leave.is_some()
    }

    /// Whether click notifications have anyone to go to.
    pub fn wants_clicks(&self) -> bool {
        self.spot_click.is_some() || self.mask_click.is_some()
    }

    /// Subscribe `source` to the event kinds these handlers care about.
    pub fn attach<E: EventSource + ?Sized>(&self, source: &mut E) {
        if self.wants_moves() {
            source.subscribe(PointerKind::Move);
        }
        if self.wants_clicks() {
            source.subscribe(PointerKind::Click);
        }
        tracing::debug!(
            source = source.name(),
            moves = self.wants_moves(),
            clicks = self.wants_clicks(),
            "Event source attached"
        );
    }

    /// Run the hook matching `notification`, if one is set.
    pub fn notify(&mut self, notification: &Notification) {
        let (hook, event) = match notification {
            Notification::PointerEnter(e) => (&mut self.pointer_enter, e),
            Notification::PointerLeave(e) => (&mut self.pointer_leave, e),
            Notification::SpotClick(e) => (&mut self.spot_click, e),
            Notification::MaskClick(e) => (&mut self.mask_click, e),
            Notification::AnimationStart => return fire(&mut self.animation_start),
            Notification::AnimationEnd => return fire(&mut self.animation_end),
        };
        if let Some(f) = hook.as_mut() {
            f(event);
        }
    }
}

fn fire(hook: &mut Option<LifecycleHandler>) {
    if let Some(f) = hook.as_mut() {
        f();
    }
}

impl fmt::Debug for SpotlightHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotlightHandlers")
            .field("pointer_enter", &self.pointer_enter.is_some())
            .field("pointer_leave", &self.pointer_leave.is_some())
            .field("spot_click", &self.spot_click.is_some())
            .field("mask_click", &self.mask_click.is_some())
            .field("animation_start", &self.animation_start.is_some())
            .field("animation_end", &self.animation_end.is_some())
            .finish()
    }
}
