//! Deferred "processing complete" delivery.
//!
//! A submission always fires: there is no cancellation hook. Each scheduled
//! task sleeps on the tokio runtime and then hands events to the UI loop,
//! which performs the state changes on its own thread.

use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::ProcessingConfig;

/// Events delivered after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingEvent {
    /// Processing finished; the editor is about to open.
    Complete { submission: u64 },
    /// Time to switch to the editor.
    OpenEditor { submission: u64 },
}

impl ProcessingEvent {
    pub fn submission(&self) -> u64 {
        match self {
            ProcessingEvent::Complete { submission }
            | ProcessingEvent::OpenEditor { submission } => *submission,
        }
    }
}

/// Spawns one single-shot task per submission.
pub struct ProcessingScheduler<E> {
    runtime: Handle,
    events: mpsc::Sender<E>,
    complete_delay: Duration,
    open_delay: Duration,
}

impl<E> ProcessingScheduler<E>
where
    E: From<ProcessingEvent> + Send + 'static,
{
    pub fn new(runtime: Handle, events: mpsc::Sender<E>, config: &ProcessingConfig) -> Self {
        Self {
            runtime,
            events,
            complete_delay: config.complete_delay(),
            open_delay: config.open_delay(),
        }
    }

    pub fn schedule(&self, submission: u64) {
        let events = self.events.clone();
        let complete_delay = self.complete_delay;
        let open_delay = self.open_delay;

        tracing::debug!(
            submission,
            complete_ms = complete_delay.as_millis() as u64,
            open_ms = open_delay.as_millis() as u64,
            "Scheduled processing"
        );

        self.runtime.spawn(async move {
            tokio::time::sleep(complete_delay).await;
            if events
                .send(ProcessingEvent::Complete { submission }.into())
                .is_err()
            {
                tracing::trace!(submission, "Processing event dropped (receiver gone)");
                return;
            }

            tokio::time::sleep(open_delay).await;
            if events
                .send(ProcessingEvent::OpenEditor { submission }.into())
                .is_err()
            {
                tracing::trace!(submission, "Processing event dropped (receiver gone)");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> ProcessingConfig {
        ProcessingConfig {
            complete_delay_ms: 5,
            open_delay_ms: 5,
            ..ProcessingConfig::default()
        }
    }

    #[test]
    fn delivers_complete_then_open() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let (tx, rx) = mpsc::channel::<ProcessingEvent>();
        let scheduler = ProcessingScheduler::new(runtime.handle().clone(), tx, &fast_config());

        scheduler.schedule(7);

        let timeout = Duration::from_secs(5);
        assert_eq!(
            rx.recv_timeout(timeout).unwrap(),
            ProcessingEvent::Complete { submission: 7 }
        );
        assert_eq!(
            rx.recv_timeout(timeout).unwrap(),
            ProcessingEvent::OpenEditor { submission: 7 }
        );
    }
}
