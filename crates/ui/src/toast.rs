//! Transient notifications ("toasts").
//!
//! The shell posts toasts into a bounded outbox. The host drains the outbox to
//! deliver each toast exactly once (log line, popup, buzzer), while the most
//! recent toast stays available as an on-screen banner until it expires.

use heapless::Deque;

/// Severity of a toast; selects its colour and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToastLevel {
    /// Something the user asked for worked.
    Success,
    /// Something the user asked for was refused.
    Error,
    /// Neutral information.
    Info,
}

impl ToastLevel {
    /// Lowercase tag for text front-ends.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Info => "info",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toast {
    /// Severity.
    pub level: ToastLevel,
    /// First line, always shown.
    pub title: &'static str,
    /// Optional second line.
    pub description: Option<&'static str>,
}

/// Posted when the scanner link comes up.
pub const DEVICE_CONNECTED: Toast = Toast {
    level: ToastLevel::Success,
    title: "Dispositivo Arduino rilevato e connesso!",
    description: Some("Pronto per l'analisi dei materiali."),
};

/// Posted when a scan is requested without a scanner link.
pub const CONNECTION_REQUIRED: Toast = Toast {
    level: ToastLevel::Error,
    title: "Errore di connessione",
    description: Some("Accendi il dispositivo Arduino o controlla il Bluetooth."),
};

/// Posted when a scan produces a result.
pub const SCAN_COMPLETE: Toast = Toast {
    level: ToastLevel::Info,
    title: "Analisi completata con successo!",
    description: None,
};

/// A toast together with the time it was posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Posted {
    /// The notification.
    pub toast: Toast,
    /// Shell time at which it was posted.
    pub posted_at_ms: u64,
}

/// Bounded toast outbox plus the current banner.
///
/// When the outbox is full the oldest undelivered toast is dropped.
#[derive(Debug)]
pub struct ToastQueue<const N: usize> {
    outbox: Deque<Posted, N>,
    banner: Option<Posted>,
    duration_ms: u64,
}

impl<const N: usize> ToastQueue<N> {
    /// Create an empty queue whose banners stay up for `duration_ms`.
    pub const fn new(duration_ms: u64) -> Self {
        ToastQueue {
            outbox: Deque::new(),
            banner: None,
            duration_ms,
        }
    }

    /// Post `toast` at `now_ms`.
    pub fn push(&mut self, toast: Toast, now_ms: u64) {
        let posted = Posted {
            toast,
            posted_at_ms: now_ms,
        };
        if self.outbox.is_full() {
            self.outbox.pop_front();
        }
        // Cannot fail: a slot was freed above if needed.
        self.outbox.push_back(posted).ok();
        self.banner = Some(posted);
    }

    /// Take every undelivered toast, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Posted> + '_ {
        core::iter::from_fn(move || self.outbox.pop_front())
    }

    /// Number of undelivered toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outbox.len()
    }

    /// `true` when nothing is waiting to be delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outbox.is_empty()
    }

    /// The banner visible at `now_ms`, if it has not expired yet.
    #[must_use]
    pub fn banner(&self, now_ms: u64) -> Option<Toast> {
        self.banner
            .filter(|p| now_ms < p.posted_at_ms.saturating_add(self.duration_ms))
            .map(|p| p.toast)
    }

    /// Dismiss the banner early. Undelivered toasts stay in the outbox.
    pub fn dismiss(&mut self) {
        self.banner = None;
    }
}
