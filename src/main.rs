//! Pulse timer - countdown display
//!
//! Full-screen terminal countdown with a progress ring and start, stop and
//! reset controls.

use std::io;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use pulse_timer::app::{App, AppConfig};
use pulse_timer::event::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    // Set up error handling and logging
    install_hooks()?;
    init_tracing();

    setup_terminal()?;

    let result = run(AppConfig::new()).await;

    // Restore the terminal even when the loop failed, then report
    let restored = restore_terminal();
    first_error(result, restored)
}

/// The loop's error wins over a failed restore.
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    result?;
    restored
}

async fn run(config: AppConfig) -> Result<()> {
    let mut events = EventHandler::new(config.tick_rate());
    let mut app = App::new(config, &events);
    app.run_with_crossterm(&mut events).await
}

fn install_hooks() -> Result<()> {
    color_eyre::install()?;

    // Leave the alternate screen before a panic report is printed
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        panic_hook(info);
    }));

    Ok(())
}

fn init_tracing() {
    // The alternate screen owns stdout, so logs go to stderr and stay off
    // unless RUST_LOG asks for them
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn setup_terminal() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture
    )?;
    crossterm::terminal::disable_raw_mode()?;

    Ok(())
}
