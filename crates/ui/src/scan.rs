//! Scan simulator state machine.
//!
//! `ScanSimulator` is pure: it does not schedule anything and does not read a
//! clock. The shell owns the completion timer and calls [`ScanSimulator::complete`]
//! when it fires. That keeps every transition testable in isolation.
//!
//! ```text
//! Idle ──start (connected)──▶ Scanning ──complete──▶ Result(m)
//!  ▲                                                   │
//!  └──────────────────────── reset ◀───────────────────┘
//! ```

use catalog::MaterialCategory;
use rand::seq::SliceRandom;
use rand::Rng;

/// Current phase of the scanner view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanState {
    /// Waiting for the user to start a scan.
    #[default]
    Idle,
    /// A scan is in flight; its result is pending.
    Scanning,
    /// The last scan identified this material.
    Result(MaterialCategory),
}

impl ScanState {
    /// `true` while a scan is in flight.
    #[must_use]
    pub fn is_scanning(self) -> bool {
        matches!(self, ScanState::Scanning)
    }

    /// The identified material, if a result is showing.
    #[must_use]
    pub fn result(self) -> Option<MaterialCategory> {
        match self {
            ScanState::Result(m) => Some(m),
            _ => None,
        }
    }
}

/// Errors returned by [`ScanSimulator::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// The scanner device is not connected.
    ConnectionRequired,
    /// The shell has been shut down. Only [`App`](crate::shell::App) reports
    /// this; the simulator itself never stops.
    Stopped,
}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ConnectionRequired => write!(f, "scanner device is not connected"),
            Self::Stopped => write!(f, "shell has been shut down"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScanError {}

/// What a successful [`ScanSimulator::start`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartOutcome {
    /// Moved to `Scanning`; the caller must schedule completion.
    Started,
    /// A scan was already in flight; nothing changed.
    AlreadyScanning,
}

/// Draw one of the six detectable categories, uniformly.
pub fn pick_material<R: Rng + ?Sized>(rng: &mut R) -> MaterialCategory {
    MaterialCategory::DETECTABLE
        .choose(rng)
        .copied()
        .unwrap_or(MaterialCategory::Unknown)
}

/// The idle → scanning → result state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSimulator {
    state: ScanState,
}

impl ScanSimulator {
    /// Create a simulator in the `Idle` state.
    pub const fn new() -> Self {
        ScanSimulator {
            state: ScanState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Begin a scan.
    ///
    /// Refused with [`ScanError::ConnectionRequired`] when `connected` is
    /// false, without touching the state. Starting while a scan is in flight
    /// is a no-op. Starting from `Result` discards the previous result.
    pub fn start(&mut self, connected: bool) -> Result<StartOutcome, ScanError> {
        if !connected {
            return Err(ScanError::ConnectionRequired);
        }
        if self.state.is_scanning() {
            return Ok(StartOutcome::AlreadyScanning);
        }
        self.state = ScanState::Scanning;
        Ok(StartOutcome::Started)
    }

    /// Finish the in-flight scan with a random detectable material.
    ///
    /// Returns `None` (and changes nothing) if no scan is in flight.
    pub fn complete<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MaterialCategory> {
        if !self.state.is_scanning() {
            return None;
        }
        let material = pick_material(rng);
        self.state = ScanState::Result(material);
        Some(material)
    }

    /// Return to `Idle` from any state. Returns the state it left.
    pub fn reset(&mut self) -> ScanState {
        core::mem::replace(&mut self.state, ScanState::Idle)
    }
}
