use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::error;

use crate::remote::RemoteMove;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    RemoteMove(RemoteMove),
}

/// Handle to the terminal reader thread.
pub struct InputThread {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl InputThread {
    /// Stops polling and waits for the thread. Call before the terminal is
    /// restored.
    pub fn stop(self) {
        self.stop.store(true, Ordering::SeqCst);
        if self.handle.join().is_err() {
            error!("input thread panicked");
        }
    }
}

/// Reads the terminal on a plain thread and forwards events to the async
/// side. The thread ends once stopped or once the receiver is gone.
pub fn spawn_input_thread(tx: UnboundedSender<AppEvent>, tick_rate: Duration) -> InputThread {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    let handle = thread::spawn(move || {
        let mut last_tick = Instant::now();
        while !flag.load(Ordering::SeqCst) && !tx.is_closed() {
            let timeout = tick_rate
                .saturating_sub(last_tick.elapsed())
                .min(Duration::from_millis(50));
            match event::poll(timeout) {
                Ok(true) => {
                    let forwarded = match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(err) => {
                            error!(error = %err, "terminal read failed");
                            break;
                        }
                    };
                    if let Some(event) = forwarded {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    error!(error = %err, "terminal poll failed");
                    break;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
    InputThread { stop, handle }
}
