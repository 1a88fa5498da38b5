//! Time-window debouncer for a single push button.

use crate::config::DEBOUNCE_DELAY_MS;

/// Debounce state for one input line.
///
/// The raw level has to stay unchanged for strictly longer than the debounce window before
/// it becomes the stable level. Only a settled released -> pressed transition is reported;
/// a settled release updates the state silently.
///
/// ```text
///            raw held > window, raw = true
///   released ------------------------------> pressed   (edge reported)
///            <------------------------------
///            raw held > window, raw = false            (no report)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Last confirmed level (false = released, true = pressed)
    stable_state: bool,
    /// Raw level seen on the previous sample
    last_raw_reading: bool,
    /// Time (ms) at which the raw level last changed
    last_change_ms: u64,
    debounce_delay_ms: u64,
}

impl Debouncer {
    /// Creates a released debouncer with the given window.
    pub const fn new(debounce_delay_ms: u64) -> Self {
        Self {
            stable_state: false,
            last_raw_reading: false,
            last_change_ms: 0,
            debounce_delay_ms,
        }
    }

    /// Feeds one raw sample taken at `now_ms`.
    ///
    /// Returns `true` only on the call that validates a released -> pressed transition.
    /// `now_ms` must not decrease between calls; if it does, the elapsed time saturates to 0.
    pub fn process_sample(&mut self, raw_reading: bool, now_ms: u64) -> bool {
        if raw_reading != self.last_raw_reading {
            self.last_change_ms = now_ms;
        }

        let mut edge_validated = false;
        if now_ms.saturating_sub(self.last_change_ms) > self.debounce_delay_ms
            && raw_reading != self.stable_state
        {
            self.stable_state = raw_reading;
            edge_validated = self.stable_state;
        }

        self.last_raw_reading = raw_reading;
        edge_validated
    }

    pub fn stable_state(&self) -> bool {
        self.stable_state
    }

    pub fn last_raw_reading(&self) -> bool {
        self.last_raw_reading
    }

    pub fn last_change_ms(&self) -> u64 {
        self.last_change_ms
    }

    pub fn debounce_delay_ms(&self) -> u64 {
        self.debounce_delay_ms
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 300;

    /// Feeds `(time, level)` samples and returns the times at which an edge validated.
    fn edges(debouncer: &mut Debouncer, samples: &[(u64, bool)]) -> Vec<u64> {
        samples
            .iter()
            .filter(|&&(t, level)| debouncer.process_sample(level, t))
            .map(|&(t, _)| t)
            .collect()
    }

    #[test]
    fn starts_released() {
        let d = Debouncer::default();
        assert!(!d.stable_state());
        assert!(!d.last_raw_reading());
        assert_eq!(d.last_change_ms(), 0);
        assert_eq!(d.debounce_delay_ms(), DEBOUNCE_DELAY_MS);
    }

    #[test]
    fn no_edge_right_after_init() {
        for level in [false, true] {
            let mut d = Debouncer::new(WINDOW);
            assert!(!d.process_sample(level, 0));
            for t in [1, 150, WINDOW] {
                assert!(!d.process_sample(level, t));
            }
            assert!(!d.stable_state());
        }
    }

    #[test]
    fn bounces_inside_window_are_suppressed() {
        let mut d = Debouncer::new(WINDOW);
        let samples = [
            (1000, false),
            (1010, true),
            (1020, false),
            (1030, true),
            (1100, false),
            (1200, true),
            (1290, false),
        ];
        for &(t, level) in &samples {
            assert!(!d.process_sample(level, t));
            assert!(!d.stable_state());
        }
    }

    #[test]
    fn press_validates_once_after_window() {
        let mut d = Debouncer::new(WINDOW);
        assert!(!d.process_sample(false, 0));
        assert!(!d.process_sample(true, 1000));
        assert!(!d.process_sample(true, 1000 + WINDOW));
        assert!(!d.stable_state());

        assert!(d.process_sample(true, 1000 + WINDOW + 1));
        assert!(d.stable_state());
    }

    #[test]
    fn late_poll_still_validates() {
        let mut d = Debouncer::new(WINDOW);
        d.process_sample(true, 1000);
        assert!(d.process_sample(true, 5000));
        assert!(d.stable_state());
    }

    #[test]
    fn held_press_does_not_retrigger() {
        let mut d = Debouncer::new(WINDOW);
        d.process_sample(true, 1000);
        assert!(d.process_sample(true, 1301));

        for t in (1302..20_000).step_by(97) {
            assert!(!d.process_sample(true, t));
        }
        assert!(d.stable_state());
    }

    #[test]
    fn second_press_after_release_validates_again() {
        let mut d = Debouncer::new(WINDOW);
        let got = edges(
            &mut d,
            &[
                (1000, true),
                (1301, true),
                (2000, false),
                (2301, false),
                (3000, true),
                (3100, true),
                (3301, true),
                (3400, true),
            ],
        );
        assert_eq!(got, vec![1301, 3301]);
    }

    #[test]
    fn release_updates_state_without_edge() {
        let mut d = Debouncer::new(WINDOW);
        d.process_sample(true, 1000);
        assert!(d.process_sample(true, 1301));

        assert!(!d.process_sample(false, 2000));
        assert!(d.stable_state());
        assert!(!d.process_sample(false, 2300));
        assert!(d.stable_state());
        assert!(!d.process_sample(false, 2301));
        assert!(!d.stable_state());
    }

    #[test]
    fn short_release_keeps_button_pressed() {
        let mut d = Debouncer::new(WINDOW);
        d.process_sample(true, 1000);
        assert!(d.process_sample(true, 1301));

        // Contact chatter while held.
        let got = edges(&mut d, &[(1400, false), (1450, true), (1800, true), (2000, true)]);
        assert!(got.is_empty());
        assert!(d.stable_state());
    }

    #[test]
    fn scenario_from_bouncy_press() {
        let mut d = Debouncer::new(WINDOW);
        assert!(!d.process_sample(false, 0));
        assert!(!d.process_sample(true, 50));
        assert!(!d.process_sample(false, 80));
        assert!(!d.process_sample(true, 400));
        assert_eq!(d.last_change_ms(), 400);

        for t in (410..=700).step_by(10) {
            assert!(!d.process_sample(true, t), "edge too early at {t}");
        }
        assert!(d.process_sample(true, 701));
        for t in 702..=750 {
            assert!(!d.process_sample(true, t));
        }
        assert!(d.stable_state());
    }

    #[test]
    fn raw_reading_tracks_every_sample() {
        let mut d = Debouncer::new(WINDOW);
        d.process_sample(true, 10);
        assert!(d.last_raw_reading());
        assert_eq!(d.last_change_ms(), 10);
        d.process_sample(true, 20);
        assert_eq!(d.last_change_ms(), 10);
        d.process_sample(false, 30);
        assert!(!d.last_raw_reading());
        assert_eq!(d.last_change_ms(), 30);
    }

    #[test]
    fn backwards_clock_reads_as_no_elapsed_time() {
        let mut d = Debouncer::new(WINDOW);
        d.process_sample(true, 1000);
        assert!(!d.process_sample(true, 10));
        assert!(!d.stable_state());
    }
}
