//! Pointer event sources.
//!
//! A source delivers [`PointerEvent`]s in page coordinates. A spotlight
//! subscribes only to the kinds it has handlers for, and a source never
//! delivers kinds nobody subscribed to.

use std::collections::{HashSet, VecDeque};

use spotlight_common::error::{SpotResult, SpotlightError};
use spotlight_model::{PointerEvent, PointerKind, RawPointerSample};

/// Trait for pointer input backends.
pub trait EventSource {
    /// Start delivering events of `kind`.
    fn subscribe(&mut self, kind: PointerKind);

    /// Poll for the next event. Returns `None` if no event is available.
    fn poll(&mut self) -> SpotResult<Option<PointerEvent>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Replays a queue of pointer events, e.g. recorded input or test input.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    queue: VecDeque<PointerEvent>,
    subscribed: HashSet<PointerKind>,
    disconnected: bool,
}

impl ScriptedEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source preloaded with `events`.
    pub fn from_events(events: impl IntoIterator<Item = PointerEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue a normalized event.
    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    /// Queue a raw sample, normalizing it to page coordinates.
    pub fn push_raw(&mut self, sample: RawPointerSample) {
        self.queue.push_back(sample.normalize());
    }

    pub fn is_subscribed(&self, kind: PointerKind) -> bool {
        self.subscribed.contains(&kind)
    }

    /// Events still queued, delivered or not.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Simulate the underlying input going away; later polls fail.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
    }
}

impl EventSource for ScriptedEventSource {
    fn subscribe(&mut self, kind: PointerKind) {
        self.subscribed.insert(kind);
    }

    fn poll(&mut self) -> SpotResult<Option<PointerEvent>> {
        if self.disconnected {
            return Err(SpotlightError::input_source("scripted source disconnected"));
        }
        while let Some(event) = self.queue.pop_front() {
            if self.subscribed.contains(&event.kind) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
