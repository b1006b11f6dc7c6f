use mock_interview::api::ApiClient;
use mock_interview::app::App;
use mock_interview::cli::{parse_args, run_cli_command};
use mock_interview::config::AppConfig;
use mock_interview::input::{self, CommandRegistry};
use mock_interview::terminal::{setup_panic_hook, TerminalManager};
use mock_interview::{logging, ui};

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// Frame tick for spinners and redraw polling.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    if let Some(result) = run_cli_command(parse_args(std::env::args())) {
        return result;
    }

    color_eyre::install()?;

    let config = AppConfig::from_env();
    match logging::init(&config) {
        Ok(Some(_)) => {}
        Ok(None) => config.warnings.iter().for_each(|w| eprintln!("Warning: {}", w)),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            config.warnings.iter().for_each(|w| eprintln!("Warning: {}", w));
        }
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let api = ApiClient::new(&config.api);
        let mut app = App::new(config, api);
        app.start_background();

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;

        if let Err(ref e) = result {
            tracing::error!("Application error: {:?}", e);
        }
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => {
                        input::handle_event(app, &registry, event);
                    }
                    Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                    // Input closed; nothing more can drive the UI
                    None => app.quit(),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
