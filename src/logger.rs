use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Progress messages on stderr, stamped with the time since start. Silent unless enabled.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }

    /// Defers building the message until it is known to be printed.
    pub fn log_with<D: Display>(&self, f: impl FnOnce() -> D) {
        if self.enabled {
            self.log(f());
        }
    }
}
