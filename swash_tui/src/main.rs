//! swash_tui - Interactive table for trying out the Swash rules engine

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use swash_tui::app::{App, Tab};
use swash_tui::ui;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // The terminal belongs to the UI, so logs only go to a file
    setup_logging()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Char('5'), _) => app.set_tab(4),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Enter, _) => app.on_enter(),
                    (KeyCode::PageUp, _) => app.scroll_log_up(),
                    (KeyCode::PageDown, _) => app.scroll_log_down(),
                    (KeyCode::Char('p'), _) => app.switch_player(),
                    (KeyCode::Char('u'), _) => app.on_lift(),
                    (KeyCode::Char('t'), _) => app.tick(1.0),
                    (KeyCode::Char('R'), _) => app.reset_round(),
                    (KeyCode::Char('g'), _) => app.gather_resource(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    (code, _) => on_tab_key(app, code),
                }
            }
        }

        // Debounced zones settle as time passes
        app.tick(0.1);
    }
    Ok(())
}

fn on_tab_key(app: &mut App, code: KeyCode) {
    match (app.current_tab, code) {
        (Tab::Captain, KeyCode::Char('s')) => app.snap_ability(true),
        (Tab::Captain, KeyCode::Char('S')) => app.snap_ability(false),
        (Tab::Captain, KeyCode::Char('f')) => app.flip_ability(),
        (Tab::Captain, KeyCode::Char('x')) => app.remove_ability(),
        (Tab::Captain, KeyCode::Char('e')) => app.toggle_exhaust(),
        (Tab::Captain, KeyCode::Char('d')) => app.crew_to_captain_defense(),
        (Tab::Captain | Tab::Ship, KeyCode::Char('r')) => app.return_crew(),
        (Tab::Ship, KeyCode::Char('d')) => app.crew_to_own_ship(),
        (Tab::Market, KeyCode::Char('a')) => app.place_damage_cube(),
        (Tab::Market, KeyCode::Char('x')) => app.remove_damage_cube(),
        (Tab::Market, KeyCode::Char('b')) => app.board_selected_ship(),
        (Tab::Market, KeyCode::Char('n')) => app.redraw_market(),
        (Tab::Trade, KeyCode::Char('o')) => app.cycle_trade_output(),
        _ => {}
    }
}

/// Log to `$SWASH_LOG_DIR/swash.log`, or the temp directory when unset.
/// Filter with `RUST_LOG`; INFO and above by default.
fn setup_logging() -> Result<()> {
    let log_dir = std::env::var_os("SWASH_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("swash"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "swash.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    // Keep the writer alive for the whole session
    std::mem::forget(guard);

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}
