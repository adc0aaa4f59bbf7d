//! Tab identifier enum: every top-level view the bottom nav bar can select.

/// A top-level tab of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tab {
    /// Scanner view: start a scan, see the result.
    #[default]
    Scan,
    /// Past analyses and eco tips.
    History,
    /// App settings and the hardware help card.
    Settings,
}

impl Tab {
    /// Tabs in nav-bar order, left to right.
    pub const ALL: [Tab; 3] = [Tab::Scan, Tab::History, Tab::Settings];

    /// Caption under the nav-bar icon.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tab::Scan => "Scanner",
            Tab::History => "Storia",
            Tab::Settings => "Impostazioni",
        }
    }

    /// Short lowercase name used by text front-ends.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Tab::Scan => "scan",
            Tab::History => "history",
            Tab::Settings => "settings",
        }
    }

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tab::Scan => 0,
            Tab::History => 1,
            Tab::Settings => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn test_default_tab_is_scan() {
        assert_eq!(Tab::default(), Tab::Scan);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tab::Scan.label(), "Scanner");
        assert_eq!(Tab::History.label(), "Storia");
        assert_eq!(Tab::Settings.label(), "Impostazioni");
    }

    #[test]
    fn test_tab_is_copy() {
        let a = Tab::History;
        let b = a;
        assert_eq!(a, b);
    }
}
