//! Application configuration and constants
//!
//! Branding and timing values used across the app. Reference these rather
//! than hardcoding values.

/// The application name shown in the header
pub const APP_NAME: &str = "Waste Scanner";

/// Tagline under the application name
pub const APP_TAGLINE: &str = "Garbage collector ver 1.0";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name reported for the scanner once the link is up
pub const DEVICE_NAME: &str = "Arduino HC-05";

/// Delay between start-up and the scanner link coming up
pub const CONNECT_DELAY_MS: u64 = 1_500;

/// How long a simulated scan takes
pub const SCAN_DURATION_MS: u64 = 3_000;

/// How long a toast banner stays on screen
pub const TOAST_DURATION_MS: u64 = 4_000;

/// Undelivered toasts kept before the oldest is dropped
pub const TOAST_CAPACITY: usize = 8;

/// Pending deferred tasks the shell can hold (connect + scan, with headroom)
pub const TIMER_CAPACITY: usize = 4;

/// Completed scans kept in the session history
pub const HISTORY_CAPACITY: usize = 16;

/// Runtime-tunable shell settings.
///
/// `Default` yields the constants above. With the `serde` feature the struct
/// can be loaded from a config file; missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShellConfig {
    /// Delay before the scanner link comes up.
    pub connect_delay_ms: u64,
    /// Duration of a simulated scan.
    pub scan_duration_ms: u64,
    /// How long toast banners stay visible.
    pub toast_duration_ms: u64,
    /// Connect to the scanner automatically on start.
    pub auto_connect: bool,
    /// Weekly recycling tips preference.
    pub recycling_tips: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            connect_delay_ms: CONNECT_DELAY_MS,
            scan_duration_ms: SCAN_DURATION_MS,
            toast_duration_ms: TOAST_DURATION_MS,
            auto_connect: true,
            recycling_tips: false,
        }
    }
}
