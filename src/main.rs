use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, Mutex};

use cognivo::api;
use cognivo::app::{App, AppScreen};
use cognivo::config::{get_config, initialize_config};
use cognivo::errors::CognivoResult;
use cognivo::key_handlers::handle_key;
use cognivo::logging::init_logging;
use cognivo::ui;

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> CognivoResult<()> {
    initialize_config()?;
    let config = get_config();
    let _logger = init_logging(&config.log_level)?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(config.max_log_entries)));
    let result = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: Arc<Mutex<App>>,
) -> CognivoResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Input reader task; the tick keeps the spinner moving while a request
    // is in flight.
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }
            if last_tick.elapsed() >= Duration::from_millis(250) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let mut guard = app.lock().await;
            if guard.screen == AppScreen::Quit {
                break;
            }
            terminal.draw(|f| ui::draw(f, &mut guard))?;
        }

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => {
                let submission = {
                    let mut guard = app.lock().await;
                    handle_key(&mut guard, key)
                };
                if let Some(submission) = submission {
                    let clone = app.clone();
                    let webhook_url = get_config().webhook_url;
                    tokio::spawn(async move {
                        api::run_submission(clone, webhook_url, submission).await;
                    });
                }
            }
            Some(Event::Input(CEvent::Mouse(mouse))) => {
                let mut guard = app.lock().await;
                guard.handle_mouse(mouse);
            }
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => {
                let mut guard = app.lock().await;
                guard.tick();
            }
            None => break,
        }
    }

    Ok(())
}
