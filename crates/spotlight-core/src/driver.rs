//! Tick-based animation of the lit circle.
//!
//! An animation request fixes a target and a per-field step
//! (`|target - current| / steps`). Each tick moves every field one step
//! toward its target and snaps it once it is within a step, so all four
//! fields land exactly on target after `steps` ticks, give or take one for
//! floating-point rounding.

use spotlight_model::{SpotGeometry, StepVector};

/// Whether the tick loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// At least one field moved; schedule another tick.
    Continue,
    /// Nothing moved; the animation is over.
    Finished,
}

/// How an animation request was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// No animation was running; a new one began.
    Started,
    /// An animation was already running and now heads for the new target.
    Retargeted,
}

/// Owns current/target/step state for one spotlight.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    current: SpotGeometry,
    target: SpotGeometry,
    step: StepVector,
    active: bool,
    ticks: u32,
}

impl AnimationDriver {
    /// A driver at rest at `initial`.
    pub fn new(initial: SpotGeometry) -> Self {
        Self {
            current: initial,
            target: initial,
            step: StepVector::default(),
            active: false,
            ticks: 0,
        }
    }

    pub fn current(&self) -> &SpotGeometry {
        &self.current
    }

    pub fn target(&self) -> &SpotGeometry {
        &self.target
    }

    pub fn step(&self) -> &StepVector {
        &self.step
    }

    /// Whether an animation is in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticks performed since the current (or last) animation started.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Overwrite the current geometry without animating.
    ///
    /// The target and steps of an in-flight animation are left alone.
    /// Non-finite fields keep their current value.
    pub fn set_current(&mut self, geometry: SpotGeometry) {
        self.current = geometry.finite_or(&self.current).clamped();
    }

    /// Head for `target`, arriving in `steps` ticks.
    ///
    /// Non-finite target fields stay where they are.
    pub fn animate_to(&mut self, target: SpotGeometry, steps: u32) -> AnimationPhase {
        self.target = target.finite_or(&self.current).clamped();
        self.step = StepVector::between(&self.current, &self.target, steps);

        if self.active {
            AnimationPhase::Retargeted
        } else {
            self.active = true;
            self.ticks = 0;
            AnimationPhase::Started
        }
    }

    /// Advance every field one step toward the target.
    ///
    /// Returns [`TickStatus::Finished`] when no field moved, after which the
    /// driver is at rest with `current == target`. Ticking a driver at rest
    /// does nothing.
    pub fn tick(&mut self) -> TickStatus {
        if !self.active {
            return TickStatus::Finished;
        }
        self.ticks += 1;

        let mut changed = false;
        changed |= advance(&mut self.current.x, self.target.x, self.step.dx);
        changed |= advance(&mut self.current.y, self.target.y, self.step.dy);
        changed |= advance(&mut self.current.radius, self.target.radius, self.step.dr);
        changed |= advance(&mut self.current.blur, self.target.blur, self.step.dblur);

        if changed {
            TickStatus::Continue
        } else {
            self.active = false;
            TickStatus::Finished
        }
    }
}

/// Move one field a step toward its target. Returns whether it was off target.
fn advance(current: &mut f64, target: f64, step: f64) -> bool {
    if *current == target {
        return false;
    }

    let before = *current;
    if *current > target {
        *current -= step;
    } else {
        *current += step;
    }

    // Snap when within one step. A zero step (the field was moved by `show`
    // after the steps were computed) or a step too small to change the value
    // would otherwise never arrive.
    let within = *current > target - step && *current < target + step;
    if within || step <= 0.0 || *current == before {
        *current = target;
    }
    true
}
