use crate::config::Config;
use crate::error::AppError;
use crate::extract::SampleExtractor;
use crate::scheduler::ProcessingScheduler;
use crate::shutdown::ShutdownHandle;
use crate::state::{AnalysisEditorProvider, Snapshot};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run one interactive session and return the final state.
///
/// The provider lives for exactly this call; the terminal is restored before
/// returning, including on error.
pub fn run(config: &Config, notes: Option<String>) -> Result<Snapshot, AppError> {
    let shutdown = ShutdownHandle::new();
    shutdown.register_signals()?;

    let scheduler_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("processing")
        .enable_time()
        .build()?;

    let provider = AnalysisEditorProvider::new();
    let tick_rate = config.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone())?;

    let mut app = App::new(
        provider.context(),
        Box::new(SampleExtractor::new(config.processing.snippet_limit)),
    );
    app.set_scheduler(ProcessingScheduler::new(
        scheduler_runtime.handle().clone(),
        events.sender(),
        &config.processing,
    ));
    if let Some(notes) = notes {
        app.insert_notes(&notes);
    }

    let result = event_loop(&mut terminal, &mut app, &events, &shutdown, tick_rate);
    shutdown.signal();
    drop(guard);
    result?;

    Ok(provider.editor().snapshot())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
    shutdown: &ShutdownHandle,
    tick_rate: Duration,
) -> Result<(), AppError> {
    loop {
        app.sync()?;
        let snapshot = app.snapshot()?;
        terminal.draw(|frame| draw(frame, &*app, &snapshot))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key)?,
            Ok(AppEvent::Paste(text)) => handle_paste(app, &text)?,
            Ok(AppEvent::Processing(event)) => app.on_processing(event)?,
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(())
}
