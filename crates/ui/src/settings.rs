//! User preferences shown on the settings tab.

/// A toggle on the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKey {
    /// Connect to the scanner automatically on start.
    AutoConnect,
    /// Weekly recycling tips.
    RecyclingTips,
}

impl SettingKey {
    /// Toggles in display order.
    pub const ALL: [SettingKey; 2] = [SettingKey::AutoConnect, SettingKey::RecyclingTips];

    /// Row title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SettingKey::AutoConnect => "Bluetooth Auto-connect",
            SettingKey::RecyclingTips => "Notifiche Riciclo",
        }
    }

    /// Row subtitle.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            SettingKey::AutoConnect => "Connetti automaticamente all'avvio",
            SettingKey::RecyclingTips => "Suggerimenti settimanali",
        }
    }
}

/// Current preference values.
///
/// `auto_connect` is read once at start-up; changing it later only affects
/// the next session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    auto_connect: bool,
    recycling_tips: bool,
}

impl Settings {
    /// Build from explicit values.
    pub const fn new(auto_connect: bool, recycling_tips: bool) -> Self {
        Settings {
            auto_connect,
            recycling_tips,
        }
    }

    /// Value of `key`.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::AutoConnect => self.auto_connect,
            SettingKey::RecyclingTips => self.recycling_tips,
        }
    }

    /// Flip `key`. Returns the new value.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let slot = match key {
            SettingKey::AutoConnect => &mut self.auto_connect,
            SettingKey::RecyclingTips => &mut self.recycling_tips,
        };
        *slot = !*slot;
        *slot
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::{SettingKey, Settings};

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.get(SettingKey::AutoConnect));
        assert!(!s.get(SettingKey::RecyclingTips));
    }

    #[test]
    fn test_toggle_flips_only_that_key() {
        let mut s = Settings::default();
        assert!(s.toggle(SettingKey::RecyclingTips));
        assert!(s.get(SettingKey::RecyclingTips));
        assert!(s.get(SettingKey::AutoConnect));
        assert!(!s.toggle(SettingKey::RecyclingTips));
    }

    #[test]
    fn test_rows_have_text() {
        for key in SettingKey::ALL {
            assert!(!key.title().is_empty());
            assert!(!key.description().is_empty());
        }
    }
}
