use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rewind::{app::App, config::Config, event::EventLoop, logging, ui::UI};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    // Load config before touching the terminal so errors print normally
    let config = Config::load()?;
    logging::init_tracing(&config)?;
    tracing::info!(?config, "starting session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(&config.engine);
    let mut event_loop =
        EventLoop::new().with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    let ui = UI::new();

    let res = run_loop(&mut terminal, app, &mut event_loop, &ui);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    tracing::info!(
        chars = app.session().buffer().len(),
        undo = app.session().history().undo_len(),
        "session ended"
    );
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    event_loop: &mut EventLoop,
    ui: &UI,
) -> Result<App> {
    loop {
        terminal.draw(|frame| ui.render(frame, &app))?;

        if let Some(event) = event_loop.next()? {
            app = app.handle_event(event)?;

            if app.should_quit() {
                return Ok(app);
            }
        }
    }
}
