use std::io;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use parley::app::App;
use parley::ui;

/// Tick interval for animations (typing indicator dots).
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Set up file-backed logging when `PARLEY_LOG` names a path.
///
/// Stderr belongs to the TUI, so logs only go to a file the user asked for.
/// Filtering follows `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    let Ok(path) = std::env::var("PARLEY_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("warning: could not create log file {path}");
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore the terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async stream of keyboard events
    let mut event_stream = EventStream::new();

    // Take the session receiver from the app (we need ownership for select!)
    let mut session_rx = app
        .take_event_receiver()
        .ok_or_else(|| eyre!("session event receiver already taken"))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        let tick = tokio::time::sleep(TICK_INTERVAL);

        tokio::select! {
            // Animation tick (typing indicator)
            _ = tick => {
                app.tick();
            }

            // Keyboard and resize events
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                        if app.should_quit {
                            return Ok(());
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                }
            }

            // Session events (scheduled replies, overlay dismissal)
            session_event = session_rx.recv() => {
                if let Some(event) = session_event {
                    app.handle_session_event(event);
                }
            }
        }
    }
}
