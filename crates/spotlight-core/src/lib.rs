//! Spotlight Core
//!
//! A darkened page overlay with a soft circular cutout that can be moved,
//! resized and re-blurred with smooth multi-step animation:
//! - **Animation Driver:** Steps `x`, `y`, `radius`, and `blur` toward a target
//! - **Hit Testing:** Classifies pointer events as inside or outside the lit circle
//! - **Dispatch:** Routes pointer and lifecycle notifications to optional handlers
//! - **Runtime:** Runs the self-rescheduling tick loop on a tokio `LocalSet`
//!
//! Rendering is delegated to `spotlight-render`; pointer input arrives
//! through the [`EventSource`] trait.

pub mod driver;
pub mod handlers;
pub mod hit_test;
pub mod input;
pub mod runtime;
pub mod spotlight;

pub use driver::{AnimationDriver, AnimationPhase, TickStatus};
pub use handlers::{Notification, SpotlightHandlers};
pub use hit_test::{hit_test, HitRegion};
pub use input::{EventSource, ScriptedEventSource};
pub use runtime::SharedSpotlight;
pub use spotlight::{Spotlight, DEFAULT_SURFACE_ID};
