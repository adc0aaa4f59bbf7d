//! Interactive session: feeds tokio time and stdin lines into the shell.
//!
//! The shell itself never reads a clock. The session measures milliseconds
//! since it started on the tokio clock, so tests on a paused runtime drive the
//! connect and scan delays deterministically.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use ui::App;

use crate::canvas::{Canvas, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::command::{Input, HELP};
use crate::console;

/// Whether the session keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the loop.
    Quit,
}

/// The shell plus its terminal.
pub struct Session<R, W> {
    app: App<R>,
    out: W,
    epoch: Instant,
}

impl<R: Rng, W: Write> Session<R, W> {
    /// Wrap `app`, printing to `out`. Time zero is now.
    pub fn new(app: App<R>, out: W) -> Self {
        Self {
            app,
            out,
            epoch: Instant::now(),
        }
    }

    /// Milliseconds since the session started.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// The shell.
    #[must_use]
    pub fn app(&self) -> &App<R> {
        &self.app
    }

    /// The terminal.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Start the shell and print the first screen.
    pub fn start(&mut self) -> Result<()> {
        let config = self.app.config();
        tracing::info!(
            connect_delay_ms = config.connect_delay_ms,
            scan_duration_ms = config.scan_duration_ms,
            toast_duration_ms = config.toast_duration_ms,
            auto_connect = config.auto_connect,
            "session starting"
        );
        let now = self.now_ms();
        self.app.start(now);
        self.show()
    }

    /// Fire due tasks, print new toasts, and redraw if anything fired.
    pub fn tick(&mut self) -> Result<()> {
        let now = self.now_ms();
        let fired = self.app.advance(now);
        self.flush_toasts()?;
        if fired > 0 {
            self.show()?;
        }
        Ok(())
    }

    /// Act on one input line.
    pub fn apply_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<Input>() {
            Ok(input) => self.apply(input),
            Err(e) => {
                tracing::debug!(error = %e, "bad command");
                writeln!(self.out, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Act on a parsed input.
    pub fn apply(&mut self, input: Input) -> Result<Flow> {
        let now = self.now_ms();
        // Bring the shell up to date before the command sees its state.
        self.app.advance(now);
        match input {
            Input::Shell(command) => {
                // A scan refused for lack of a connection has already posted its toast.
                if let Err(e) = self.app.handle(command, now) {
                    tracing::debug!(error = %e, "command refused");
                }
                self.flush_toasts()?;
                self.show()?;
            }
            Input::Show => self.show()?,
            Input::Snapshot(path) => self.snapshot(&path)?,
            Input::Help => writeln!(self.out, "{HELP}")?,
            Input::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Render the e-paper frame to `path`.
    pub fn snapshot(&mut self, path: &Path) -> Result<()> {
        let mut canvas = Canvas::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        let view = self.app.view(self.now_ms());
        let mut components = 0usize;
        // Infallible target.
        render::render_view_to(&mut canvas, &view, |_, _, _, _| {
            components = components.saturating_add(1);
        })
        .ok();
        canvas.save_png(path)?;
        tracing::info!(path = %path.display(), components, "snapshot written");
        writeln!(self.out, "snapshot written to {}", path.display())?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let view = self.app.view(self.now_ms());
        console::write_view(&mut self.out, &view).context("writing screen")
    }

    fn flush_toasts(&mut self) -> Result<()> {
        let posted: Vec<_> = self.app.drain_toasts().collect();
        for p in &posted {
            console::write_toast(&mut self.out, p).context("writing toast")?;
        }
        Ok(())
    }

    /// Cancel every pending shell task. Returns how many were cancelled.
    pub fn shutdown(&mut self) -> usize {
        self.app.shutdown()
    }
}

/// Run until `quit` or until the line source closes, ticking every `tick`.
///
/// Always shuts the shell down before returning, so no deferred task
/// outlives the session. Returns how many tasks that cancelled.
pub async fn run<R, W>(
    session: &mut Session<R, W>,
    mut lines: mpsc::Receiver<String>,
    tick: Duration,
) -> Result<usize>
where
    R: Rng,
    W: Write,
{
    session.start()?;
    let mut ticker = time::interval(tick.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let outcome = loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    tracing::debug!("input closed");
                    break Ok(());
                };
                match session.apply_line(&line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break Ok(()),
                    Err(e) => break Err(e),
                }
            }
            _ = ticker.tick() => {
                if let Err(e) = session.tick() {
                    break Err(e);
                }
            }
        }
    };

    let cancelled = session.shutdown();
    outcome.map(|()| cancelled)
}

/// Single-threaded runtime with the timer driver.
///
/// `tokio::io::stdin` reads on the blocking pool, so no I/O driver is needed.
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("building tokio runtime")
}

/// Forward stdin lines into `tx` until EOF or the receiver goes away.
pub async fn read_stdin(tx: mpsc::Sender<String>) -> Result<()> {
    use tokio::io::{AsyncBufReadExt, BufReader};

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if tx.send(line).await.is_err() {
            break;
        }
    }
    Ok(())
}
