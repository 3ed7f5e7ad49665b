//! Debouncer - Collapses bursts of changes into one delayed action

/// One-shot timer driven by `tick`.
///
/// The first `request` starts the countdown; further requests while it is
/// pending are absorbed into the same firing. Announcements are suppressed
/// only if every absorbed request asked for silence.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer {
    delay: f64,
    remaining: Option<f64>,
    silent: bool,
}

impl Debouncer {
    pub fn new(delay_secs: f64) -> Self {
        Debouncer {
            delay: delay_secs.max(0.0),
            remaining: None,
            silent: true,
        }
    }

    pub fn request(&mut self, silent: bool) {
        if self.remaining.is_none() {
            self.remaining = Some(self.delay);
            self.silent = silent;
        } else {
            self.silent &= silent;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the timer. Returns `Some(silent)` exactly once when it fires.
    pub fn tick(&mut self, delta_time: f64) -> Option<bool> {
        let remaining = self.remaining.as_mut()?;
        *remaining -= delta_time;
        if *remaining <= 0.0 {
            return self.fire();
        }
        None
    }

    /// Fire now if pending, skipping the rest of the delay
    pub fn fire(&mut self) -> Option<bool> {
        self.remaining.take().map(|_| self.silent)
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut debouncer = Debouncer::new(0.5);
        debouncer.request(false);
        assert_eq!(debouncer.tick(0.3), None);
        assert_eq!(debouncer.tick(0.3), Some(false));
        assert_eq!(debouncer.tick(1.0), None);
    }

    #[test]
    fn test_burst_coalesces() {
        let mut debouncer = Debouncer::new(0.5);
        debouncer.request(true);
        debouncer.tick(0.25);
        debouncer.request(true);
        debouncer.request(false);
        assert_eq!(debouncer.tick(0.25), Some(false));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let mut debouncer = Debouncer::new(0.0);
        debouncer.request(true);
        assert_eq!(debouncer.tick(0.0), Some(true));
    }

    #[test]
    fn test_cancel_and_fire() {
        let mut debouncer = Debouncer::new(1.0);
        assert_eq!(debouncer.fire(), None);
        debouncer.request(false);
        debouncer.cancel();
        assert_eq!(debouncer.tick(2.0), None);

        debouncer.request(false);
        assert_eq!(debouncer.fire(), Some(false));
    }
}
