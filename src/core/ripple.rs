// Click ripple animator.
//
// Ramps a single amplitude up to the ceiling and back down to rest, one step
// per elapsed tick, writing every step into the targeted surface's shader
// parameters. The animation is plain data advanced by the frame loop; there
// are no timers to cancel. A texture swap is scheduled alongside each ramp and
// fires after a fixed delay regardless of where the ramp is.

use super::scene::ClickableSurface;
use crate::constants::{
    RIPPLE_CEILING, RIPPLE_DOWN_STEP, RIPPLE_EPSILON, RIPPLE_FLOOR, RIPPLE_TICK_MS,
    RIPPLE_UP_STEP, TEXTURE_SWAP_DELAY_MS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RipplePhase {
    #[default]
    Idle,
    RampingUp,
    RampingDown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub amplitude: f32,
    pub phase: RipplePhase,
}

impl AnimationState {
    #[inline]
    pub fn busy(&self) -> bool {
        self.phase != RipplePhase::Idle
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingSwap {
    surface: usize,
    remaining_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct RippleAnimator {
    state: AnimationState,
    target: Option<usize>,
    tick_accum_ms: f64,
    swap: Option<PendingSwap>,
}

impl RippleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.state.busy()
    }

    /// Surface the current (or last) ramp writes into.
    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    #[inline]
    pub fn swap_pending(&self) -> bool {
        self.swap.is_some()
    }

    /// Start a ripple on `surfaces[index]`.
    ///
    /// Flips the surface's selected texture variant, begins the up-ramp and
    /// schedules the texture swap. Returns `false` without touching anything
    /// while a ramp is in flight or when `index` is out of range.
    pub fn trigger(&mut self, index: usize, surfaces: &mut [ClickableSurface]) -> bool {
        if self.is_busy() {
            return false;
        }
        let Some(surface) = surfaces.get_mut(index) else {
            return false;
        };
        surface.toggle_variant();
        self.state.phase = RipplePhase::RampingUp;
        self.target = Some(index);
        self.tick_accum_ms = 0.0;
        self.swap = Some(PendingSwap {
            surface: index,
            remaining_ms: TEXTURE_SWAP_DELAY_MS,
        });
        true
    }

    /// Advance the animation clock by `dt_ms`, running every tick that fell
    /// due in that span and firing the texture swap once its delay has passed.
    pub fn advance(&mut self, dt_ms: f64, surfaces: &mut [ClickableSurface]) {
        let dt_ms = dt_ms.max(0.0);

        if let Some(swap) = self.swap.as_mut() {
            swap.remaining_ms -= dt_ms;
            if swap.remaining_ms <= 0.0 {
                if let Some(surface) = surfaces.get_mut(swap.surface) {
                    surface.commit_variant();
                }
                self.swap = None;
            }
        }

        if !self.is_busy() {
            return;
        }
        self.tick_accum_ms += dt_ms;
        while self.tick_accum_ms >= RIPPLE_TICK_MS && self.is_busy() {
            self.tick_accum_ms -= RIPPLE_TICK_MS;
            self.step(surfaces);
        }
        if !self.is_busy() {
            self.tick_accum_ms = 0.0;
        }
    }

    fn step(&mut self, surfaces: &mut [ClickableSurface]) {
        match self.state.phase {
            RipplePhase::Idle => return,
            RipplePhase::RampingUp => {
                let next = self.state.amplitude + RIPPLE_UP_STEP;
                if next >= RIPPLE_CEILING - RIPPLE_EPSILON {
                    self.state.amplitude = RIPPLE_CEILING;
                    self.state.phase = RipplePhase::RampingDown;
                } else {
                    self.state.amplitude = next;
                }
            }
            RipplePhase::RampingDown => {
                let next = self.state.amplitude - RIPPLE_DOWN_STEP;
                if next <= RIPPLE_FLOOR + RIPPLE_EPSILON {
                    self.state.amplitude = 0.0;
                    self.state.phase = RipplePhase::Idle;
                    log::debug!("[ripple] settled on surface {:?}", self.target);
                } else {
                    self.state.amplitude = next;
                }
            }
        }
        if let Some(surface) = self.target.and_then(|i| surfaces.get_mut(i)) {
            surface.params.amplitude = self.state.amplitude;
        }
    }
}
