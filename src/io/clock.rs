use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local};

/// A repeating display clock running on its own thread.
///
/// The thread only sends timestamps; the TUI event loop drains them with
/// [`Clock::poll`]. Dropping the clock (or calling [`Clock::stop`]) closes
/// the stop channel and joins the thread, so the timer never outlives its
/// owner.
pub struct Clock {
    rx: mpsc::Receiver<DateTime<Local>>,
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Start ticking every `period`
    pub fn start(period: Duration) -> std::io::Result<Self> {
        let (tick_tx, rx) = mpsc::channel();
        Clock::spawn(period, tick_tx, rx)
    }

    /// Spawn the ticking thread sending into `tick_tx`; `rx` is what `poll` drains
    fn spawn(
        period: Duration,
        tick_tx: mpsc::Sender<DateTime<Local>>,
        rx: mpsc::Receiver<DateTime<Local>>,
    ) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("dayplan-clock".into())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tick_tx.send(Local::now()).is_err() {
                                break;
                            }
                        }
                        // Explicit stop or the owner went away
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::debug!("clock thread stopped");
            })?;

        tracing::debug!(period_ms = period.as_millis() as u64, "clock started");
        Ok(Clock {
            rx,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Non-blocking poll. Returns the latest queued tick, if any.
    pub fn poll(&self) -> Option<DateTime<Local>> {
        let mut latest = None;
        while let Ok(now) = self.rx.try_recv() {
            latest = Some(now);
        }
        latest
    }

    /// Whether the ticking thread is still alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the thread and wait for it to exit
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Closing the channel wakes the thread immediately
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.shutdown();
    }
}
