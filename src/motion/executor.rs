//! Motion execution - step-by-step walk through a profile.

use crate::config::units::Microseconds;

use super::profile::{EasedProfile, MotionPhase};

/// Runtime state during motion execution.
#[derive(Debug, Clone)]
pub struct MotionExecutor {
    /// The computed profile being executed.
    profile: EasedProfile,

    /// Index of the next step to emit (0 to total_steps).
    current_step: u32,

    /// Current phase of motion.
    phase: MotionPhase,
}

impl MotionExecutor {
    /// Create a new executor for a motion profile.
    pub fn new(profile: EasedProfile) -> Self {
        let phase = profile.phase_at(0);
        Self {
            profile,
            current_step: 0,
            phase,
        }
    }

    /// Check if motion is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == MotionPhase::Complete
    }

    /// Number of steps already emitted.
    #[inline]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Get the current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Step period for the next pulse.
    #[inline]
    pub fn current_delay(&self) -> Microseconds {
        self.profile.delay_at(self.current_step)
    }

    /// Resonance pause owed after the next pulse.
    #[inline]
    pub fn current_pause(&self) -> Microseconds {
        self.profile.pause_after(self.current_step)
    }

    /// Advance past the step just emitted.
    ///
    /// Returns `true` if another step follows, `false` once complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        self.current_step += 1;
        self.phase = self.profile.phase_at(self.current_step);

        !self.is_complete()
    }
}
