// src/driver.rs
// Event loop behind the console binary. Input lines and clock ticks arrive on
// one channel; the screen summary is written after every change.

use std::io::Write;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::App;
use crate::console;
use crate::handlers;
use crate::state::AppResult;

/// Application events
pub enum AppEvent {
    Input(String),
    InputClosed,
    Tick,
}

/// Run until `quit`, end of input, or every sender is gone.
pub async fn run<W: Write>(app: &mut App, events: &mut UnboundedReceiver<AppEvent>, out: &mut W) -> AppResult<()> {
    let tick_ms = app.prefs.tick_ms.max(1);
    writeln!(out, "{}", console::render(app))?;

    while !app.ui.should_quit {
        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Input(line) => {
                handlers::handle_line(&line, app);
                writeln!(out, "{}", console::render(app))?;
            }
            AppEvent::InputClosed => app.ui.quit(),
            AppEvent::Tick => {
                let was_loading = app.is_loading();
                let had_toast = app.notifications.current.is_some();
                app.on_tick(tick_ms);
                // Reprint only when a timer changed what is on screen.
                if (was_loading && !app.is_loading()) || (had_toast && app.notifications.current.is_none()) {
                    writeln!(out, "{}", console::render(app))?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
