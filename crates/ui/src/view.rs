//! View model: everything a front-end needs to draw one frame.
//!
//! Built by [`App::view`](crate::shell::App::view). The e-paper renderer and
//! the terminal simulator both consume this instead of poking at shell state,
//! so the two can't disagree about labels or which panel is showing.

use catalog::{MaterialCategory, MaterialInfo};
use rand::Rng;

use crate::config::{self, HISTORY_CAPACITY};
use crate::content::{self, EcoTip, HelpCard, History};
use crate::settings::{SettingKey, Settings};
use crate::shell::App;
use crate::tab::Tab;
use crate::toast::Toast;

/// Connection pill in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Scanner not reachable.
    Disconnected,
    /// Scanner connected and idle.
    Connected,
    /// Scanner connected and a scan is in flight.
    Analysing,
}

impl LinkStatus {
    /// Pill text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LinkStatus::Disconnected => "Disconnesso",
            LinkStatus::Connected => "Connesso",
            LinkStatus::Analysing => "Analisi in corso...",
        }
    }

    /// Whether the pill shows the connected styling.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        !matches!(self, LinkStatus::Disconnected)
    }
}

/// Top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// App name.
    pub title: &'static str,
    /// Line under the name.
    pub tagline: &'static str,
    /// Connection pill.
    pub status: LinkStatus,
}

/// Scanner tab while idle or scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPanel {
    /// A scan is in flight.
    pub scanning: bool,
    /// Text inside the scanner ring.
    pub ring_label: &'static str,
    /// Heading under the ring.
    pub heading: &'static str,
    /// Instruction under the heading.
    pub hint: &'static str,
    /// Main button caption.
    pub button_label: &'static str,
    /// Whether the main button accepts presses.
    pub button_enabled: bool,
}

impl ScanPanel {
    const HINT: &'static str = "Posiziona il rifiuto davanti ai sensori del tuo dispositivo Arduino.";

    /// Panel for the idle or scanning phase.
    #[must_use]
    pub const fn new(scanning: bool) -> Self {
        if scanning {
            ScanPanel {
                scanning,
                ring_label: "Analisi...",
                heading: "Scansione in corso...",
                hint: Self::HINT,
                button_label: "ATTENDI...",
                button_enabled: false,
            }
        } else {
            ScanPanel {
                scanning,
                ring_label: "In Attesa",
                heading: "Pronto per l'analisi",
                hint: Self::HINT,
                button_label: "ANALIZZA ORA",
                button_enabled: true,
            }
        }
    }
}

/// Scanner tab showing a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPanel {
    /// Identified category.
    pub category: MaterialCategory,
    /// Its catalog entry.
    pub info: &'static MaterialInfo,
    /// Badge on the card.
    pub badge: &'static str,
    /// Caption above the bin label.
    pub bin_caption: &'static str,
    /// Caption above the instructions.
    pub instructions_caption: &'static str,
    /// Left button (resets).
    pub retry_label: &'static str,
    /// Right button (resets).
    pub done_label: &'static str,
    /// Footnote under the buttons.
    pub disclaimer: &'static str,
}

impl ResultPanel {
    /// Panel for `category`.
    #[must_use]
    pub const fn new(category: MaterialCategory) -> Self {
        ResultPanel {
            category,
            info: catalog::lookup(category),
            badge: "Analisi Completata",
            bin_caption: "Dove buttarlo",
            instructions_caption: "Istruzioni",
            retry_label: "Riprova",
            done_label: "Fatto",
            disclaimer: "Ricorda che le regole possono variare in base al tuo comune di residenza.",
        }
    }
}

/// History tab.
#[derive(Debug, Clone, Copy)]
pub struct HistoryPanel<'a> {
    /// List heading.
    pub heading: &'static str,
    /// Badge next to the heading.
    pub badge: &'static str,
    /// Rows.
    pub history: &'a History<HISTORY_CAPACITY>,
    /// Tips heading.
    pub tips_heading: &'static str,
    /// Tip cards.
    pub tips: &'static [EcoTip],
}

/// One toggle row on the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingRow {
    /// Which setting.
    pub key: SettingKey,
    /// Row title.
    pub title: &'static str,
    /// Row subtitle.
    pub description: &'static str,
    /// Current value.
    pub enabled: bool,
}

/// Settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPanel {
    /// Tab heading.
    pub heading: &'static str,
    /// Toggle rows.
    pub rows: [SettingRow; 2],
    /// Troubleshooting card.
    pub help: HelpCard,
}

impl SettingsPanel {
    /// Panel reflecting `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let row = |key: SettingKey| SettingRow {
            key,
            title: key.title(),
            description: key.description(),
            enabled: settings.get(key),
        };
        SettingsPanel {
            heading: content::SETTINGS_HEADING,
            rows: SettingKey::ALL.map(row),
            help: content::HARDWARE_HELP,
        }
    }
}

/// Main area between header and nav bar.
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    /// Scanner tab, idle or scanning.
    Scan(ScanPanel),
    /// Scanner tab, result card.
    Result(ResultPanel),
    /// History tab.
    History(HistoryPanel<'a>),
    /// Settings tab.
    Settings(SettingsPanel),
}

/// Bottom nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBar {
    /// Highlighted tab.
    pub active: Tab,
}

impl NavBar {
    /// Every tab with whether it is highlighted.
    pub fn items(&self) -> impl Iterator<Item = (Tab, bool)> + '_ {
        Tab::ALL.into_iter().map(move |t| (t, t == self.active))
    }
}

/// One frame's worth of UI.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Top bar.
    pub header: Header,
    /// Main area.
    pub body: Body<'a>,
    /// Bottom bar.
    pub nav: NavBar,
    /// Toast banner, if one is visible.
    pub banner: Option<Toast>,
}

impl<R: Rng> App<R> {
    /// Build the view model for the frame at `now_ms`.
    #[must_use]
    pub fn view(&self, now_ms: u64) -> View<'_> {
        let scan_state = self.scan_state();
        let status = match (self.connected(), scan_state.is_scanning()) {
            (false, _) => LinkStatus::Disconnected,
            (true, false) => LinkStatus::Connected,
            (true, true) => LinkStatus::Analysing,
        };
        let body = match self.active_tab() {
            Tab::Scan => match scan_state.result() {
                Some(category) => Body::Result(ResultPanel::new(category)),
                None => Body::Scan(ScanPanel::new(scan_state.is_scanning())),
            },
            Tab::History => Body::History(HistoryPanel {
                heading: content::HISTORY_HEADING,
                badge: content::HISTORY_BADGE,
                history: self.history(),
                tips_heading: content::TIPS_HEADING,
                tips: &content::ECO_TIPS,
            }),
            Tab::Settings => Body::Settings(SettingsPanel::new(self.settings())),
        };
        View {
            header: Header {
                title: config::APP_NAME,
                tagline: config::APP_TAGLINE,
                status,
            },
            body,
            nav: NavBar {
                active: self.active_tab(),
            },
            banner: self.banner(now_ms),
        }
    }
}
