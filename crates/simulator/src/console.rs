//! Plain-text rendering of the view model and toasts.

use std::io::{self, Write};

use colored::Colorize;
use ui::toast::{Posted, Toast, ToastLevel};
use ui::view::{Body, HistoryPanel, ResultPanel, ScanPanel, SettingsPanel, View};

const RULE: &str = "------------------------------------------------------------";

fn level_tag(level: ToastLevel) -> colored::ColoredString {
    let tag = format!("[{}]", level.tag());
    match level {
        ToastLevel::Success => tag.green().bold(),
        ToastLevel::Error => tag.red().bold(),
        ToastLevel::Info => tag.blue().bold(),
    }
}

/// One line per delivered toast, prefixed with its shell timestamp.
pub fn write_toast<W: Write>(out: &mut W, posted: &Posted) -> io::Result<()> {
    let Toast {
        level,
        title,
        description,
    } = posted.toast;
    write!(out, "{:>8} ms {} {}", posted.posted_at_ms, level_tag(level), title)?;
    if let Some(description) = description {
        write!(out, " {}", description.dimmed())?;
    }
    writeln!(out)
}

/// The whole screen as text.
pub fn write_view<W: Write>(out: &mut W, view: &View<'_>) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    let status = view.header.status.label();
    let status = if view.header.status.is_connected() {
        status.green()
    } else {
        status.red()
    };
    writeln!(
        out,
        "{}  {}  [{}]",
        view.header.title.bold(),
        view.header.tagline.dimmed(),
        status
    )?;
    if let Some(toast) = view.banner {
        writeln!(out, "{} {}", level_tag(toast.level), toast.title)?;
    }
    writeln!(out, "{RULE}")?;
    match &view.body {
        Body::Scan(panel) => write_scan(out, panel)?,
        Body::Result(panel) => write_result(out, panel)?,
        Body::History(panel) => write_history(out, panel)?,
        Body::Settings(panel) => write_settings(out, panel)?,
    }
    writeln!(out, "{RULE}")?;
    let nav: Vec<String> = view
        .nav
        .items()
        .map(|(tab, active)| {
            if active {
                format!("[{}]", tab.label()).bold().to_string()
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect();
    writeln!(out, "{}", nav.join("  "))
}

fn write_scan<W: Write>(out: &mut W, panel: &ScanPanel) -> io::Result<()> {
    writeln!(out, "({})", panel.ring_label)?;
    writeln!(out, "{}", panel.heading.bold())?;
    writeln!(out, "{}", panel.hint.dimmed())?;
    let button = format!("< {} >", panel.button_label);
    if panel.button_enabled {
        writeln!(out, "{}", button.reversed())
    } else {
        writeln!(out, "{}", button.dimmed())
    }
}

fn write_result<W: Write>(out: &mut W, panel: &ResultPanel) -> io::Result<()> {
    let info = panel.info;
    writeln!(out, "{} {}  ({})", info.icon, info.name.bold(), panel.badge)?;
    writeln!(out, "{}: {}", panel.bin_caption, info.bin.bold())?;
    writeln!(out, "{}: {}", panel.instructions_caption, info.instructions)?;
    writeln!(out, "< {} >  < {} >", panel.retry_label, panel.done_label)?;
    writeln!(out, "{}", panel.disclaimer.dimmed())
}

fn write_history<W: Write>(out: &mut W, panel: &HistoryPanel<'_>) -> io::Result<()> {
    writeln!(out, "{}  ({})", panel.heading.bold(), panel.badge)?;
    for entry in panel.history.iter() {
        let info = catalog::lookup(entry.category);
        writeln!(out, "  {} {:<22} {}", info.icon, entry.label, entry.when.to_string().dimmed())?;
    }
    writeln!(out, "{}", panel.tips_heading.bold())?;
    for tip in panel.tips {
        writeln!(out, "  * {}: {}", tip.title, tip.body)?;
    }
    Ok(())
}

fn write_settings<W: Write>(out: &mut W, panel: &SettingsPanel) -> io::Result<()> {
    writeln!(out, "{}", panel.heading.bold())?;
    for row in &panel.rows {
        let state = if row.enabled { "ON ".green() } else { "OFF".red() };
        writeln!(out, "  [{}] {} - {}", state, row.title, row.description.dimmed())?;
    }
    writeln!(out, "{}: {}", panel.help.title.bold(), panel.help.body)
}
