//! Fixed, non-jittered retry schedule.

use std::iter;
use std::time::Duration;

/// Number of delivery attempts in the default schedule.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// First slot of the default schedule; each later slot doubles it.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Per-attempt delay slots for the delivery loop.
///
/// Slot `n` (1-based) is the wait that follows a failed attempt `n`. The final
/// slot is never waited on: once the last attempt fails the sequence is
/// exhausted. The number of slots is the number of attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffSchedule {
    slots: Vec<Duration>,
}

impl BackoffSchedule {
    pub fn new(slots: Vec<Duration>) -> Self {
        Self { slots }
    }

    /// The default schedule: `1s, 2s, 4s, 8s, 16s`.
    pub fn exponential() -> Self {
        iter::successors(Some(DEFAULT_BASE_DELAY), |d| d.checked_mul(2))
            .take(DEFAULT_MAX_ATTEMPTS)
            .collect()
    }

    pub fn max_attempts(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Nominal delay slot for `attempt`, or `None` outside `1..=max_attempts`.
    pub fn slot(&self, attempt: u32) -> Option<Duration> {
        let index = attempt.checked_sub(1)? as usize;
        self.slots.get(index).copied()
    }

    /// How long to wait after attempt `attempt` fails before the next one.
    ///
    /// Returns `None` for the final attempt (and anything out of range), which
    /// ends the sequence without a trailing wait.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts() {
            return None;
        }
        self.slot(attempt)
    }
}

impl Default for BackoffSchedule {
    fn default() -> Self {
        Self::exponential()
    }
}

impl FromIterator<Duration> for BackoffSchedule {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(values: &[u64]) -> Vec<Duration> {
        values.iter().map(|s| Duration::from_secs(*s)).collect()
    }

    #[test]
    fn test_default_slots() {
        let schedule = BackoffSchedule::default();
        let slots: Vec<_> = (1..=5).filter_map(|n| schedule.slot(n)).collect();

        assert_eq!(slots, secs(&[1, 2, 4, 8, 16]));
        assert_eq!(schedule.max_attempts(), 5);
    }

    #[test]
    fn test_delay_after_each_attempt() {
        let schedule = BackoffSchedule::default();

        assert_eq!(schedule.delay_after(1), Some(Duration::from_secs(1)));
        assert_eq!(schedule.delay_after(2), Some(Duration::from_secs(2)));
        assert_eq!(schedule.delay_after(3), Some(Duration::from_secs(4)));
        assert_eq!(schedule.delay_after(4), Some(Duration::from_secs(8)));
    }

    #[test]
    fn test_no_delay_after_final_attempt() {
        let schedule = BackoffSchedule::default();

        assert_eq!(schedule.slot(5), Some(Duration::from_secs(16)));
        assert_eq!(schedule.delay_after(5), None);
        assert_eq!(schedule.delay_after(6), None);
    }

    #[test]
    fn test_out_of_range_attempts() {
        let schedule = BackoffSchedule::default();

        assert_eq!(schedule.slot(0), None);
        assert_eq!(schedule.delay_after(0), None);
        assert_eq!(schedule.slot(6), None);
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = BackoffSchedule::new(secs(&[3, 3]));

        assert_eq!(schedule.max_attempts(), 2);
        assert_eq!(schedule.delay_after(1), Some(Duration::from_secs(3)));
        assert_eq!(schedule.delay_after(2), None);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = BackoffSchedule::new(Vec::new());

        assert_eq!(schedule.max_attempts(), 0);
        assert_eq!(schedule.delay_after(1), None);
    }
}
