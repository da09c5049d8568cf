use std::{error::Error, time::Duration};

use audiogeeks_portal::driver::{self, AppEvent};
use audiogeeks_portal::{global_prefs, App};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so the screen summaries stay readable on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run());
    // The stdin reader can sit in a blocking read that never returns; do not wait for it.
    runtime.shutdown_background();
    result
}

async fn run() -> Result<(), Box<dyn Error>> {
    // Initialize global preferences
    global_prefs::init_global_prefs();
    let prefs = global_prefs::global_prefs();
    let tick_ms = prefs.tick_ms.max(1);

    let mut app = App::new(prefs)?;
    info!("portal ready");

    // Create event loop channels
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn stdin reader
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        let mut lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new());
        while let Some(line) = lines.next().await {
            match line {
                Ok(line) => {
                    if event_tx_clone.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    warn!("stdin: {}", e);
                    break;
                }
            }
        }
        let _ = event_tx_clone.send(AppEvent::InputClosed);
    });

    // Spawn tick source
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
        loop {
            interval.tick().await;
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    driver::run(&mut app, &mut event_rx, &mut std::io::stdout()).await?;
    info!("bye");
    Ok(())
}
