//! `waste-scanner` - terminal front-end for the waste scanner shell.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulator::{Cli, Session};
use tokio::sync::mpsc;
use ui::App;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.shell_config()?;
    let seed = cli.seed();
    tracing::info!(
        seed,
        "starting {} {}",
        ui::config::APP_NAME,
        ui::config::APP_VERSION
    );

    let runtime = simulator::runtime()?;

    let result = runtime.block_on(async {
        let (tx, rx) = mpsc::channel(16);
        let reader = tokio::spawn(simulator::session::read_stdin(tx));

        let app = App::new(config, ChaCha8Rng::seed_from_u64(seed));
        let mut session = Session::new(app, std::io::stdout());
        let cancelled = simulator::run(&mut session, rx, Duration::from_millis(cli.tick_ms)).await?;
        tracing::info!(cancelled, "session ended");

        reader.abort();
        Ok::<(), anyhow::Error>(())
    });
    // A pending stdin read sits on a blocking thread; don't wait for it.
    runtime.shutdown_background();
    result
}
