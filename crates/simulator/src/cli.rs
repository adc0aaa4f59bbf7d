//! Command-line flags and config-file loading.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use ui::ShellConfig;

/// Waste scanner simulator: drive the scanner UI from the terminal.
#[derive(Debug, Parser)]
#[command(name = "waste-scanner")]
#[command(about = "Waste scanner desktop simulator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file with shell settings; flags override its values.
    #[arg(long, env = "WASTE_SCANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Delay before the scanner link comes up.
    #[arg(long, env = "WASTE_SCANNER_CONNECT_DELAY_MS")]
    pub connect_delay_ms: Option<u64>,

    /// How long a scan takes.
    #[arg(long, env = "WASTE_SCANNER_SCAN_DURATION_MS")]
    pub scan_duration_ms: Option<u64>,

    /// How long toast banners stay visible.
    #[arg(long)]
    pub toast_duration_ms: Option<u64>,

    /// Seed for scan outcomes. Random when omitted.
    #[arg(long, env = "WASTE_SCANNER_SEED")]
    pub seed: Option<u64>,

    /// Start without connecting to the scanner.
    #[arg(long)]
    pub no_auto_connect: bool,

    /// How often the shell clock is advanced.
    #[arg(long, default_value_t = 50)]
    pub tick_ms: u64,
}

impl Cli {
    /// Shell settings: defaults, then the config file, then flags.
    pub fn shell_config(&self) -> Result<ShellConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ShellConfig::default(),
        };
        if let Some(ms) = self.connect_delay_ms {
            config.connect_delay_ms = ms;
        }
        if let Some(ms) = self.scan_duration_ms {
            config.scan_duration_ms = ms;
        }
        if let Some(ms) = self.toast_duration_ms {
            config.toast_duration_ms = ms;
        }
        if self.no_auto_connect {
            config.auto_connect = false;
        }
        Ok(config)
    }

    /// Seed from the flag, or from the wall clock.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        })
    }
}

/// Read a [`ShellConfig`] from a JSON file. Missing fields keep defaults.
pub fn load_config(path: &Path) -> Result<ShellConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
