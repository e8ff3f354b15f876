//! Spinner shown while waiting on the rate service

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

const SPINNER_UPDATE_INTERVAL_MS: u64 = 100;
const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct ProgressSpinner {
    message: String,
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ProgressSpinner {
    pub fn new(message: String) -> Self {
        Self {
            message,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start a spinner only when `enabled`; otherwise return an idle one.
    pub fn start_if(enabled: bool, message: &str) -> Self {
        let mut spinner = Self::new(message.to_string());
        if enabled {
            spinner.start();
        }
        spinner
    }

    pub fn start(&mut self) {
        self.running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.running);
        let message = self.message.clone();
        let clear_width = message.chars().count() + 2;

        let handle = thread::spawn(move || {
            let mut index = 0;

            while running.load(Ordering::Relaxed) {
                print!("\r{} {}", SPINNER_CHARS[index], message);
                let _ = io::stdout().flush();

                index = (index + 1) % SPINNER_CHARS.len();
                thread::sleep(Duration::from_millis(SPINNER_UPDATE_INTERVAL_MS));
            }

            print!("\r{:<width$}\r", "", width = clear_width);
            let _ = io::stdout().flush();
        });

        self.handle = Some(handle);
    }

    /// Stop and erase the spinner line.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_never_runs() {
        let mut spinner = ProgressSpinner::start_if(false, "Fetching rates...");
        assert!(!spinner.running.load(Ordering::Relaxed));
        assert!(spinner.handle.is_none());
        spinner.stop();
        assert!(!spinner.running.load(Ordering::Relaxed));
    }

    #[test]
    fn test_spinner_start_stop() {
        let mut spinner = ProgressSpinner::start_if(true, "Fetching rates...");
        assert!(spinner.running.load(Ordering::Relaxed));
        assert!(spinner.handle.is_some());
        spinner.stop();
        assert!(!spinner.running.load(Ordering::Relaxed));
        assert!(spinner.handle.is_none());
    }
}
