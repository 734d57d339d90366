use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::scheduler::ProcessingEvent;
use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Delivered by the processing scheduler after a submission.
    Processing(ProcessingEvent),
}

impl From<ProcessingEvent> for AppEvent {
    fn from(event: ProcessingEvent) -> Self {
        AppEvent::Processing(event)
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        break;
                    }

                    // Short poll timeout so the shutdown flag is checked often
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => {
                            let sent = match event::read() {
                                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                                Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                                Ok(Event::Resize(cols, rows)) => {
                                    event_tx.send(AppEvent::Resize(cols, rows))
                                }
                                Ok(_) => Ok(()),
                                Err(err) => {
                                    tracing::error!(error = %err, "Terminal read failed");
                                    break;
                                }
                            };
                            if sent.is_err() {
                                break;
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
