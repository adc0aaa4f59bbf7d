//! Scanner link state tracker.
//!
//! The link goes from disconnected to connected once per session. There is no
//! disconnect path: a dropped link is only noticed on the next start.

/// Tracks whether the scanner device is connected and, if so, its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkState {
    connected: bool,
    device_name: Option<&'static str>,
}

impl LinkState {
    /// Create a new, disconnected state.
    pub const fn new() -> Self {
        LinkState {
            connected: false,
            device_name: None,
        }
    }

    /// Record a successful connection to `device_name`.
    ///
    /// Returns `true` on the first call only; later calls leave the state
    /// untouched and return `false`.
    pub fn on_connected(&mut self, device_name: &'static str) -> bool {
        if self.connected {
            return false;
        }
        self.connected = true;
        self.device_name = Some(device_name);
        true
    }

    /// Returns `true` once the scanner is connected.
    #[must_use]
    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Name of the connected scanner, or `None` while disconnected.
    #[must_use]
    pub fn device_name(&self) -> Option<&'static str> {
        self.device_name
    }
}

impl Default for LinkState {
    fn default() -> Self {
        Self::new()
    }
}
