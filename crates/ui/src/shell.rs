//! The app shell: owns every piece of UI state and the deferred tasks.
//!
//! `App` is driven entirely by the host: it passes the current time into
//! [`App::start`], [`App::advance`] and [`App::handle`], and reads back state,
//! toasts and the [`View`](crate::view::View). Nothing here blocks, spawns or
//! reads a clock, so the same shell runs under a tokio loop on the desktop,
//! under Embassy on a device, or under a hand-stepped clock in tests.
//!
//! Every deferred event lives in one [`TimerQueue`]. [`App::shutdown`] clears
//! it, so tearing the shell down never leaves a callback behind.

use bluetooth::LinkState;
use catalog::MaterialCategory;
use rand::Rng;

use crate::config::{self, ShellConfig, HISTORY_CAPACITY, TIMER_CAPACITY, TOAST_CAPACITY};
use crate::content::History;
use crate::navigation::TabBar;
use crate::scan::{ScanError, ScanSimulator, ScanState, StartOutcome};
use crate::settings::{SettingKey, Settings};
use crate::tab::Tab;
use crate::timer::{TimerHandle, TimerQueue};
use crate::toast::{self, Posted, Toast, ToastQueue};

/// User intents the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Switch the bottom nav bar to a tab.
    SelectTab(Tab),
    /// Move the nav-bar selection right, wrapping.
    NextTab,
    /// Move the nav-bar selection left, wrapping.
    PreviousTab,
    /// Press "ANALIZZA ORA".
    StartScan,
    /// Press "Riprova" or "Fatto" on the result card.
    Reset,
    /// Close the toast banner early.
    DismissBanner,
    /// Flip a settings toggle.
    ToggleSetting(SettingKey),
}

/// Events the shell defers through its timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Deferred {
    /// The start-up delay elapsed; bring the scanner link up.
    DeviceConnected,
    /// The scan duration elapsed; produce a result.
    ScanComplete,
}

/// Application state plus its deferred tasks.
pub struct App<R> {
    config: ShellConfig,
    tabs: TabBar,
    scan: ScanSimulator,
    link: LinkState,
    settings: Settings,
    history: History<HISTORY_CAPACITY>,
    toasts: ToastQueue<TOAST_CAPACITY>,
    timers: TimerQueue<Deferred, TIMER_CAPACITY>,
    connect_task: Option<TimerHandle>,
    scan_task: Option<TimerHandle>,
    rng: R,
    started: bool,
    stopped: bool,
}

impl<R: Rng> App<R> {
    /// Build an idle shell. Call [`App::start`] to arm the start-up tasks.
    pub fn new(config: ShellConfig, rng: R) -> Self {
        App {
            config,
            tabs: TabBar::new(),
            scan: ScanSimulator::new(),
            link: LinkState::new(),
            settings: Settings::new(config.auto_connect, config.recycling_tips),
            history: History::new(),
            toasts: ToastQueue::new(config.toast_duration_ms),
            timers: TimerQueue::new(),
            connect_task: None,
            scan_task: None,
            rng,
            started: false,
            stopped: false,
        }
    }

    /// Start the session at `now_ms`.
    ///
    /// With auto-connect on, schedules the scanner link to come up after the
    /// configured delay. Calling `start` twice, or after
    /// [`App::shutdown`], is a no-op.
    pub fn start(&mut self, now_ms: u64) {
        if self.started || self.stopped {
            return;
        }
        self.started = true;
        tracing::info!(
            auto_connect = self.settings.get(SettingKey::AutoConnect),
            "shell started"
        );
        if !self.settings.get(SettingKey::AutoConnect) {
            return;
        }
        match self
            .timers
            .schedule(now_ms, self.config.connect_delay_ms, Deferred::DeviceConnected)
        {
            Ok(handle) => self.connect_task = Some(handle),
            Err(e) => tracing::error!(error = %e, "could not schedule scanner connect"),
        }
    }

    /// Fire every task due at or before `now_ms`. Returns how many fired.
    ///
    /// Toasts and history rows are stamped with each task's due time, not
    /// with `now_ms`, so a coarse host tick does not skew them. After
    /// [`App::shutdown`] this fires nothing.
    pub fn advance(&mut self, now_ms: u64) -> usize {
        if self.stopped {
            return 0;
        }
        let mut fired = 0usize;
        while let Some((due_ms, event)) = self.timers.pop_due_at(now_ms) {
            fired = fired.saturating_add(1);
            self.fire(event, due_ms);
        }
        fired
    }

    fn fire(&mut self, event: Deferred, now_ms: u64) {
        match event {
            Deferred::DeviceConnected => {
                self.connect_task = None;
                if self.link.on_connected(config::DEVICE_NAME) {
                    tracing::info!(device = config::DEVICE_NAME, "scanner connected");
                    self.toasts.push(toast::DEVICE_CONNECTED, now_ms);
                }
            }
            Deferred::ScanComplete => {
                self.scan_task = None;
                match self.scan.complete(&mut self.rng) {
                    Some(material) => {
                        tracing::info!(material = material.key(), "scan complete");
                        self.history.record(material, now_ms);
                        self.toasts.push(toast::SCAN_COMPLETE, now_ms);
                    }
                    None => tracing::debug!("scan completion with no scan in flight"),
                }
            }
        }
    }

    /// Apply a user command at `now_ms`.
    ///
    /// Only [`Command::StartScan`] can fail; the failure has already been
    /// surfaced as a toast when this returns.
    pub fn handle(&mut self, command: Command, now_ms: u64) -> Result<(), ScanError> {
        match command {
            Command::SelectTab(tab) => self.select_tab(tab),
            Command::NextTab => {
                let tab = self.tabs.next();
                tracing::debug!(tab = tab.key(), "tab selected");
            }
            Command::PreviousTab => {
                let tab = self.tabs.previous();
                tracing::debug!(tab = tab.key(), "tab selected");
            }
            Command::StartScan => {
                self.start_scan(now_ms)?;
            }
            Command::Reset => self.reset_scan(),
            Command::DismissBanner => self.toasts.dismiss(),
            Command::ToggleSetting(key) => {
                self.toggle_setting(key);
            }
        }
        Ok(())
    }

    /// Start a scan at `now_ms` and schedule its completion.
    ///
    /// Refused with [`ScanError::ConnectionRequired`] (plus an error toast)
    /// while disconnected, and with [`ScanError::Stopped`] after
    /// [`App::shutdown`]. A start while scanning returns
    /// [`StartOutcome::AlreadyScanning`] and schedules nothing.
    pub fn start_scan(&mut self, now_ms: u64) -> Result<StartOutcome, ScanError> {
        if self.stopped {
            tracing::debug!("scan requested after shutdown");
            return Err(ScanError::Stopped);
        }
        let outcome = match self.scan.start(self.link.connected()) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "scan refused");
                self.toasts.push(toast::CONNECTION_REQUIRED, now_ms);
                return Err(e);
            }
        };
        if outcome == StartOutcome::AlreadyScanning {
            tracing::debug!("scan already in flight");
            return Ok(outcome);
        }
        match self
            .timers
            .schedule(now_ms, self.config.scan_duration_ms, Deferred::ScanComplete)
        {
            Ok(handle) => {
                tracing::info!(duration_ms = self.config.scan_duration_ms, "scan started");
                self.scan_task = Some(handle);
            }
            Err(e) => {
                // Without a completion task the scan would spin forever.
                tracing::error!(error = %e, "could not schedule scan completion");
                self.scan.reset();
            }
        }
        Ok(outcome)
    }

    /// Return the scanner view to idle, cancelling an in-flight scan.
    pub fn reset_scan(&mut self) {
        if let Some(handle) = self.scan_task.take() {
            self.timers.cancel(handle);
            tracing::debug!("in-flight scan cancelled");
        }
        self.scan.reset();
    }

    /// Switch tabs.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tabs.select(tab) {
            tracing::debug!(tab = tab.key(), "tab selected");
        }
    }

    /// Flip a setting. Returns its new value.
    pub fn toggle_setting(&mut self, key: SettingKey) -> bool {
        let value = self.settings.toggle(key);
        tracing::debug!(setting = key.title(), value, "setting toggled");
        value
    }

    /// Tear the session down: cancel every pending task and abandon a scan
    /// in flight.
    ///
    /// Returns how many tasks were cancelled. The shell stays stopped:
    /// `start` and `advance` do nothing and `start_scan` is refused with
    /// [`ScanError::Stopped`].
    pub fn shutdown(&mut self) -> usize {
        self.stopped = true;
        self.connect_task = None;
        self.scan_task = None;
        if self.scan.state().is_scanning() {
            self.scan.reset();
        }
        let dropped = self.timers.cancel_all();
        tracing::info!(cancelled = dropped, "shell shut down");
        dropped
    }

    /// Take every toast not yet delivered, oldest first.
    pub fn drain_toasts(&mut self) -> impl Iterator<Item = Posted> + '_ {
        self.toasts.drain()
    }

    /// Toast banner visible at `now_ms`.
    #[must_use]
    pub fn banner(&self, now_ms: u64) -> Option<Toast> {
        self.toasts.banner(now_ms)
    }

    /// Current scan phase.
    #[must_use]
    pub fn scan_state(&self) -> ScanState {
        self.scan.state()
    }

    /// Last identified material, if the result card is showing.
    #[must_use]
    pub fn result(&self) -> Option<MaterialCategory> {
        self.scan.state().result()
    }

    /// Whether the scanner link is up.
    #[must_use]
    pub fn connected(&self) -> bool {
        self.link.connected()
    }

    /// Scanner link state.
    #[must_use]
    pub fn link(&self) -> &LinkState {
        &self.link
    }

    /// Selected tab.
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    /// Current preferences.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// History list.
    #[must_use]
    pub fn history(&self) -> &History<HISTORY_CAPACITY> {
        &self.history
    }

    /// Configuration the shell was built with.
    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Number of deferred tasks still pending.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.timers.pending()
    }

    /// When the next deferred task is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Whether the connect task is still waiting.
    #[must_use]
    pub fn connect_pending(&self) -> bool {
        self.connect_task.is_some_and(|h| self.timers.is_pending(h))
    }

    /// Whether a scan completion is still waiting.
    #[must_use]
    pub fn scan_pending(&self) -> bool {
        self.scan_task.is_some_and(|h| self.timers.is_pending(h))
    }
}

#[cfg(test)]
mod tests {
    use super::{App, Command};
    use crate::config::ShellConfig;
    use crate::scan::{ScanError, ScanState, StartOutcome};
    use crate::settings::SettingKey;
    use crate::tab::Tab;
    use crate::toast::{self, ToastLevel};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn app() -> App<ChaCha8Rng> {
        App::new(ShellConfig::default(), ChaCha8Rng::seed_from_u64(1))
    }

    fn connected_app() -> App<ChaCha8Rng> {
        let mut app = app();
        app.start(0);
        app.advance(1_500);
        app.drain_toasts().for_each(drop);
        app
    }

    #[test]
    fn test_connects_once_after_delay() {
        let mut app = app();
        app.start(0);
        assert!(app.connect_pending());
        assert_eq!(app.advance(1_499), 0);
        assert!(!app.connected());
        assert_eq!(app.advance(1_500), 1);
        assert!(app.connected());
        assert_eq!(app.link().device_name(), Some("Arduino HC-05"));
        let toasts: Vec<_> = app.drain_toasts().map(|p| p.toast).collect();
        assert_eq!(toasts, vec![toast::DEVICE_CONNECTED]);
        assert_eq!(app.advance(10_000), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut app = app();
        app.start(0);
        app.start(0);
        assert_eq!(app.pending_tasks(), 1);
    }

    #[test]
    fn test_no_auto_connect_stays_disconnected() {
        let cfg = ShellConfig {
            auto_connect: false,
            ..ShellConfig::default()
        };
        let mut app = App::new(cfg, ChaCha8Rng::seed_from_u64(1));
        app.start(0);
        assert_eq!(app.pending_tasks(), 0);
        app.advance(60_000);
        assert!(!app.connected());
    }

    #[test]
    fn test_scan_while_disconnected_is_refused() {
        let mut app = app();
        app.start(0);
        assert_eq!(app.start_scan(100), Err(ScanError::ConnectionRequired));
        assert_eq!(app.scan_state(), ScanState::Idle);
        assert!(!app.scan_pending());
        let toasts: Vec<_> = app.drain_toasts().map(|p| p.toast).collect();
        assert_eq!(toasts, vec![toast::CONNECTION_REQUIRED]);
    }

    #[test]
    fn test_scan_completes_after_duration() {
        let mut app = connected_app();
        assert_eq!(app.start_scan(2_000), Ok(StartOutcome::Started));
        assert_eq!(app.scan_state(), ScanState::Scanning);
        app.advance(4_999);
        assert_eq!(app.scan_state(), ScanState::Scanning);
        app.advance(5_000);
        let result = app.result();
        assert!(result.is_some_and(|m| m.is_detectable()));
        let infos: Vec<_> = app
            .drain_toasts()
            .filter(|p| p.toast.level == ToastLevel::Info)
            .collect();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].posted_at_ms, 5_000);
    }

    #[test]
    fn test_second_start_before_delay_is_noop() {
        let mut app = connected_app();
        app.start_scan(2_000).ok();
        assert_eq!(app.start_scan(2_500), Ok(StartOutcome::AlreadyScanning));
        assert_eq!(app.pending_tasks(), 1);
        // Completion is still measured from the first start.
        app.advance(5_000);
        assert!(app.result().is_some());
    }

    #[test]
    fn test_completed_scan_is_recorded_in_history() {
        let mut app = connected_app();
        app.start_scan(2_000).ok();
        app.advance(5_000);
        let first = app.history().iter().next().map(|e| e.category);
        assert_eq!(first, app.result());
        assert_eq!(app.history().live().len(), 1);
    }

    #[test]
    fn test_reset_from_result_is_idle() {
        let mut app = connected_app();
        app.start_scan(2_000).ok();
        app.advance(5_000);
        app.handle(Command::Reset, 6_000).ok();
        assert_eq!(app.scan_state(), ScanState::Idle);
    }

    #[test]
    fn test_reset_during_scan_cancels_completion() {
        let mut app = connected_app();
        app.start_scan(2_000).ok();
        app.reset_scan();
        assert!(!app.scan_pending());
        assert_eq!(app.advance(10_000), 0);
        assert_eq!(app.scan_state(), ScanState::Idle);
        assert!(app.history().live().is_empty());
    }

    #[test]
    fn test_shutdown_clears_pending_tasks() {
        let mut app = app();
        app.start(0);
        assert_eq!(app.shutdown(), 1);
        assert_eq!(app.advance(10_000), 0);
        assert!(!app.connected());
    }

    #[test]
    fn test_shutdown_mid_scan_drops_completion() {
        let mut app = connected_app();
        app.start_scan(2_000).ok();
        assert_eq!(app.shutdown(), 1);
        assert_eq!(app.next_deadline(), None);
        app.advance(10_000);
        assert_eq!(app.result(), None);
    }

    #[test]
    fn test_shutdown_mid_scan_returns_to_idle() {
        let mut app = connected_app();
        app.start_scan(2_000).ok();
        app.shutdown();
        assert_eq!(app.scan_state(), ScanState::Idle);
    }

    #[test]
    fn test_dismiss_banner_command() {
        let mut app = connected_app();
        assert!(app.banner(1_600).is_some());
        app.handle(Command::DismissBanner, 1_600).ok();
        assert_eq!(app.banner(1_600), None);
    }

    #[test]
    fn test_handle_select_tab_and_toggle() {
        let mut app = app();
        assert_eq!(app.handle(Command::SelectTab(Tab::Settings), 0), Ok(()));
        assert_eq!(app.active_tab(), Tab::Settings);
        app.handle(Command::ToggleSetting(SettingKey::RecyclingTips), 0).ok();
        assert!(app.settings().get(SettingKey::RecyclingTips));
    }

    #[test]
    fn test_handle_cycles_tabs() {
        let mut app = app();
        app.handle(Command::NextTab, 0).ok();
        assert_eq!(app.active_tab(), Tab::History);
        app.handle(Command::PreviousTab, 0).ok();
        app.handle(Command::PreviousTab, 0).ok();
        assert_eq!(app.active_tab(), Tab::Settings);
    }

    #[test]
    fn test_handle_start_scan_propagates_error() {
        let mut app = app();
        assert_eq!(
            app.handle(Command::StartScan, 0),
            Err(ScanError::ConnectionRequired)
        );
    }

    #[test]
    fn test_same_seed_same_results() {
        let run = || {
            let mut app = connected_app();
            let mut seen = Vec::new();
            let mut t = 2_000;
            for _ in 0..10 {
                app.start_scan(t).ok();
                t += 3_000;
                app.advance(t);
                seen.push(app.result());
                app.reset_scan();
            }
            seen
        };
        assert_eq!(run(), run());
    }
}
