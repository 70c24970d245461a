use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// An event our app may receive
#[derive(Debug)]
pub enum Event {
    /// Key press.
    Key(KeyEvent),

    /// Terminal resize.
    Resize(u16, u16),
}

/// Collects events from the terminal listener thread, and hands them out one at a time.
#[derive(Debug)]
pub struct EventBus {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            running: Arc::new(AtomicBool::new(true)),
            handle: None,
        }
    }

    /// Receive the next event.
    ///
    /// This function will always block the current thread if
    /// there is no data available and it's possible for more data to be sent.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }

    /// Spawn a thread to publish terminal events to this bus
    pub fn spawn_terminal_listener(&mut self) -> Result<()> {
        let sender = self.sender.clone();
        let running = self.running.clone();
        self.handle = Some(
            thread::Builder::new()
                .name("terminal_events".to_string())
                .spawn(move || Self::terminal_events(running, sender))?,
        );

        Ok(())
    }

    /// Polls for terminal events and sends them to the given sender.
    fn terminal_events(running: Arc<AtomicBool>, sender: Sender<Event>) {
        while running.load(Ordering::Relaxed) {
            match event::poll(Duration::from_millis(250)) {
                Ok(false) => continue,
                Ok(true) => (),
                Err(e) => {
                    debug!("error polling for events: {}", e);
                    break;
                }
            }

            let event = match event::read() {
                // Windows reports releases too
                Ok(CrosstermEvent::Key(e)) if e.kind == KeyEventKind::Press => Event::Key(e),
                Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                Ok(_) => continue,
                Err(e) => {
                    debug!("error reading event: {}", e);
                    break;
                }
            };
            if sender.send(event).is_err() {
                break;
            }
        }
    }
}

impl Drop for EventBus {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            debug!("joining thread {:?}", h.thread().name());
            let _ = h.join();
        }
    }
}
