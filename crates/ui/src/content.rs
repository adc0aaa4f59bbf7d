//! Static content for the history and settings tabs, and the session history.

use catalog::MaterialCategory;
use heapless::Vec;

/// When a history entry was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Timestamp {
    /// Fixed day/time labels (demo entries).
    Label {
        /// Day, e.g. "Oggi".
        day: &'static str,
        /// Time of day, e.g. "10:30".
        time: &'static str,
    },
    /// Shell uptime when the scan completed.
    Uptime(u64),
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Timestamp::Label { day, time } => write!(f, "{day} alle {time}"),
            Timestamp::Uptime(ms) => {
                let secs = ms / 1000;
                write!(f, "Sessione +{}:{:02}", secs / 60, secs % 60)
            }
        }
    }
}

/// One row of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HistoryEntry {
    /// What was identified.
    pub category: MaterialCategory,
    /// Row title. Demo rows use short names ("Carta"); live rows use the
    /// catalog name.
    pub label: &'static str,
    /// When.
    pub when: Timestamp,
}

/// Demo entries shown below this session's scans.
pub const SEEDED_HISTORY: [HistoryEntry; 4] = [
    HistoryEntry {
        category: MaterialCategory::Plastic,
        label: "Plastica",
        when: Timestamp::Label { day: "Oggi", time: "10:30" },
    },
    HistoryEntry {
        category: MaterialCategory::Paper,
        label: "Carta",
        when: Timestamp::Label { day: "Oggi", time: "08:45" },
    },
    HistoryEntry {
        category: MaterialCategory::Glass,
        label: "Vetro",
        when: Timestamp::Label { day: "Ieri", time: "19:20" },
    },
    HistoryEntry {
        category: MaterialCategory::Metal,
        label: "Metallo",
        when: Timestamp::Label { day: "2 Feb", time: "14:10" },
    },
];

/// History list: this session's scans (newest first) followed by the demo
/// entries. Only the live part is bounded; once full the oldest live entry
/// falls off.
#[derive(Debug, Clone, Default)]
pub struct History<const N: usize> {
    live: Vec<HistoryEntry, N>,
}

impl<const N: usize> History<N> {
    /// Empty session history.
    pub const fn new() -> Self {
        History { live: Vec::new() }
    }

    /// Record a completed scan at `now_ms`.
    pub fn record(&mut self, category: MaterialCategory, now_ms: u64) {
        if N == 0 {
            return;
        }
        if self.live.is_full() {
            self.live.pop();
        }
        // Cannot fail: there is at least one free slot.
        self.live
            .insert(
                0,
                HistoryEntry {
                    category,
                    label: catalog::lookup(category).name,
                    when: Timestamp::Uptime(now_ms),
                },
            )
            .ok();
    }

    /// Scans completed this session, newest first.
    #[must_use]
    pub fn live(&self) -> &[HistoryEntry] {
        &self.live
    }

    /// Every row in display order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.live.iter().chain(SEEDED_HISTORY.iter())
    }

    /// Total number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len().saturating_add(SEEDED_HISTORY.len())
    }

    /// Never true: the demo entries are always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A card in the "Consigli Eco" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EcoTip {
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub body: &'static str,
    /// Card fill as `0xRRGGBB`.
    pub fill: u32,
}

/// Eco tips shown under the history list.
pub const ECO_TIPS: [EcoTip; 2] = [
    EcoTip {
        title: "Meno plastica, più futuro",
        body: "Sostituisci le bottiglie in PET con una borraccia. In un anno puoi risparmiare fino a 10kg di plastica!",
        fill: 0x16A34A,
    },
    EcoTip {
        title: "Scontrini e Carta",
        body: "Sapevi che gli scontrini non vanno nella carta? Sono fatti di carta termica non riciclabile.",
        fill: 0x3B82F6,
    },
];

/// Heading of the history list.
pub const HISTORY_HEADING: &str = "Le tue analisi";
/// Badge next to the history heading.
pub const HISTORY_BADGE: &str = "Report Mensile";
/// Heading of the eco tips section.
pub const TIPS_HEADING: &str = "Consigli Eco";
/// Heading of the settings tab.
pub const SETTINGS_HEADING: &str = "Impostazioni";

/// The hardware help card on the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCard {
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub body: &'static str,
}

/// Troubleshooting hint for the scanner hardware.
pub const HARDWARE_HELP: HelpCard = HelpCard {
    title: "Guida Hardware",
    body: "Non riesci a connettere l'Arduino? Assicurati che il modulo HC-05 sia alimentato correttamente a 5V.",
};

#[cfg(test)]
mod tests {
    use super::{History, Timestamp, SEEDED_HISTORY};
    use catalog::MaterialCategory;

    #[test]
    fn test_empty_history_shows_seeded_entries() {
        let h: History<4> = History::new();
        assert_eq!(h.len(), 4);
        let rows: Vec<_> = h.iter().copied().collect();
        assert_eq!(rows, SEEDED_HISTORY.to_vec());
    }

    #[test]
    fn test_record_prepends_newest_first() {
        let mut h: History<4> = History::new();
        h.record(MaterialCategory::Glass, 1_000);
        h.record(MaterialCategory::Metal, 2_000);
        let live = h.live();
        assert_eq!(live[0].category, MaterialCategory::Metal);
        assert_eq!(live[1].category, MaterialCategory::Glass);
        assert_eq!(h.iter().next().map(|e| e.category), Some(MaterialCategory::Metal));
    }

    #[test]
    fn test_live_history_is_bounded() {
        let mut h: History<2> = History::new();
        h.record(MaterialCategory::Glass, 1);
        h.record(MaterialCategory::Metal, 2);
        h.record(MaterialCategory::Paper, 3);
        let cats: Vec<_> = h.live().iter().map(|e| e.category).collect();
        assert_eq!(cats, vec![MaterialCategory::Paper, MaterialCategory::Metal]);
        assert_eq!(h.len(), 6);
    }

    #[test]
    fn test_zero_capacity_history_ignores_records() {
        let mut h: History<0> = History::new();
        h.record(MaterialCategory::Glass, 1);
        assert!(h.live().is_empty());
    }

    #[test]
    fn test_seeded_rows_use_short_names() {
        let labels: Vec<_> = SEEDED_HISTORY.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Plastica", "Carta", "Vetro", "Metallo"]);
    }

    #[test]
    fn test_live_rows_use_catalog_name() {
        let mut h: History<2> = History::new();
        h.record(MaterialCategory::Paper, 1);
        assert_eq!(h.live()[0].label, "Carta e Cartone");
    }

    #[test]
    fn test_timestamp_labels() {
        let fixed = Timestamp::Label { day: "Oggi", time: "10:30" };
        assert_eq!(fixed.to_string(), "Oggi alle 10:30");
        assert_eq!(Timestamp::Uptime(125_000).to_string(), "Sessione +2:05");
    }
}
