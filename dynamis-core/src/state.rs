//! Panel bring-up state machine
//!
//! The SSD1331 protocol is write-only: the controller never acknowledges
//! anything, so readiness is purely a function of which bring-up steps
//! have been driven. Modeling that as an explicit state machine gives
//! re-initialization and failure recovery well-defined entry points.

/// Panel controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    /// Power applied, reset never pulsed
    Uninitialized,
    /// Reset line being pulsed (high-low-high with fixed holds)
    ResetPulsing,
    /// Initialization command sequence in flight
    Initializing,
    /// Cleared and drawable
    Ready,
}

/// Events that advance the bring-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelEvent {
    /// Reset pulse started (also the forced re-initialization entry point)
    BeginReset,
    /// Reset pulse holds completed
    ResetDone,
    /// Initialization command sequence fully sent
    InitDone,
}

impl PanelState {
    /// Drawing primitives may only be emitted in `Ready`
    pub fn can_draw(&self) -> bool {
        matches!(self, PanelState::Ready)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: PanelEvent) -> Self {
        use PanelEvent::*;
        use PanelState::*;

        match (self, event) {
            // Reset may be (re-)entered from anywhere: it is the only exit
            // from Uninitialized, the recovery path after a failed
            // initialization, and the forced re-init path from Ready.
            (_, BeginReset) => ResetPulsing,

            (ResetPulsing, ResetDone) => Initializing,

            // Write-only protocol: completion of the sequence is the only
            // evidence of readiness.
            (Initializing, InitDone) => Ready,

            // Default: stay in current state
            _ => self,
        }
    }
}
