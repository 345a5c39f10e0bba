use std::{
    io::{stderr, Write},
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

const TICK: Duration = Duration::from_millis(500);
const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Spinner drawn on stderr while a puzzle is being solved.
#[derive(Debug)]
pub struct Indicator {
    done: Sender<()>,
    handle: JoinHandle<()>,
}

impl Indicator {
    pub fn start() -> Self {
        let (done, ticks) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let mut err = stderr();
            // Save the cursor position, then hide the cursor.
            let _ = write!(err, "\t⏳ Solving: \x1B7\x1B[?25l");
            let _ = err.flush();
            let mut frame_ind = 0;
            loop {
                match ticks.recv_timeout(TICK) {
                    Err(RecvTimeoutError::Timeout) => {
                        let _ = write!(err, "\x1B8\x1B7{}", FRAMES[frame_ind]);
                        let _ = err.flush();
                        frame_ind = (frame_ind + 1) % FRAMES.len();
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self { done, handle }
    }

    /// Stops the spinner, clears its line and shows the cursor again.
    pub fn stop(self) {
        let _ = self.done.send(());
        if self.handle.join().is_err() {
            log::warn!("Progress indicator thread panicked.");
        }

        let mut err = stderr();
        let _ = write!(err, "\x1B[2K\r\x1B[?25h");
        let _ = err.flush();
    }
}
