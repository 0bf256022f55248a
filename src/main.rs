use justicia::adapters::gemini::GeminiBackend;
use justicia::app::{App, AppMessage};
use justicia::cli::{parse_args, run_cli_command};
use justicia::config::AppConfig;
use justicia::logging::init_logging;
use justicia::terminal::{setup_panic_hook, TerminalManager};
use justicia::ui::{self, ScrollLimits};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Redraw/tick cadence of the event loop.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let options = run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;

    // Resolved before raw mode so the message lands on a normal terminal.
    let config = match AppConfig::from_env(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("justicia: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log_file) {
        eprintln!(
            "justicia: no se pudo abrir el log {}: {}",
            config.log_file.display(),
            e
        );
    }
    info!(model = %config.model, "starting");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let backend = GeminiBackend::new(&config)?;
        let mut app = App::new(Arc::new(backend));

        setup_panic_hook();
        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();

        if let Err(ref e) = result {
            warn!(error = %e, "event loop ended with an error");
        }
        info!("exiting");
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Loading keeps redrawing so the spinner moves.
        if app.needs_redraw || app.is_loading() {
            let mut limits = ScrollLimits::default();
            terminal.draw(|f| {
                limits = ui::render(f, app);
            })?;
            app.apply_scroll_limits(limits);
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
