//! Open/close transition state machine for overlays.
//!
//! An overlay fades in after being un-hidden and is hidden only after its
//! fade-out finishes, so both directions involve a delayed step. Each phase
//! change bumps a generation counter; the delayed step carries the generation
//! it was scheduled under and is dropped if a newer request came in first.
//!
//! ```text
//!   Closed ──open──▶ Opening ──timer──▶ Open
//!     ▲                 │ close           │ close
//!     └──timer── Closing ◀────────────────┘
//! ```

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    /// Whether the overlay is (or is becoming) visible.
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Visual change for the shell to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Take the overlay out of `display: none`.
    Reveal,
    /// Drop the transparent/scaled-down classes so the fade-in runs.
    AnimateIn,
    /// Apply the transparent/scaled-down classes so the fade-out runs.
    AnimateOut,
    /// Put the overlay back into `display: none`.
    Conceal,
}

/// A delayed step the shell must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub token: u64,
    pub delay_ms: u32,
}

/// Result of an open/close request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    /// Apply now, in order.
    pub effects: Vec<Effect>,
    /// Replaces any timer scheduled earlier when present.
    pub pending: Option<Pending>,
}

#[derive(Debug, Clone, Default)]
pub struct Transition {
    phase: Phase,
    generation: u64,
    open_delay_ms: u32,
    close_delay_ms: u32,
}

impl Transition {
    #[must_use]
    pub fn new(open_delay_ms: u32, close_delay_ms: u32) -> Self {
        Self { phase: Phase::Closed, generation: 0, open_delay_ms, close_delay_ms }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Request the overlay open. A no-op while already opening or open.
    pub fn open(&mut self) -> Step {
        if self.phase.is_visible() {
            return Step::default();
        }
        self.phase = Phase::Opening;
        self.generation += 1;
        Step {
            effects: vec![Effect::Reveal],
            pending: Some(Pending { token: self.generation, delay_ms: self.open_delay_ms }),
        }
    }

    /// Request the overlay close. A no-op while already closing or closed.
    pub fn close(&mut self) -> Step {
        if !self.phase.is_visible() {
            return Step::default();
        }
        self.phase = Phase::Closing;
        self.generation += 1;
        Step {
            effects: vec![Effect::AnimateOut],
            pending: Some(Pending { token: self.generation, delay_ms: self.close_delay_ms }),
        }
    }

    /// A scheduled timer fired. Returns the effect to apply, or `None` if the
    /// timer was superseded.
    pub fn settle(&mut self, token: u64) -> Option<Effect> {
        if token != self.generation {
            return None;
        }
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Open;
                Some(Effect::AnimateIn)
            }
            Phase::Closing => {
                self.phase = Phase::Closed;
                Some(Effect::Conceal)
            }
            Phase::Open | Phase::Closed => None,
        }
    }
}
