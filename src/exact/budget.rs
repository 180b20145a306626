//! Wall-clock and cancellation limits for long searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Limits on how long an exhaustive search may run.
///
/// A search stops once the deadline has passed or the cancellation flag is
/// set, and returns the best route found so far.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use u_delivery::exact::SearchBudget;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let budget = SearchBudget::unlimited().with_cancel_flag(Arc::clone(&flag));
/// assert!(!budget.is_exhausted());
/// flag.store(true, Ordering::Relaxed);
/// assert!(budget.is_exhausted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchBudget {
    /// No limit at all.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Stops `limit` from now.
    pub fn with_time_limit(limit: Duration) -> Self {
        Self::unlimited().with_deadline(Instant::now() + limit)
    }

    /// Stops at `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stops once `flag` is set to `true` by another thread.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if the search should stop now.
    pub fn is_exhausted(&self) -> bool {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited() {
        let b = SearchBudget::unlimited();
        assert!(b.deadline().is_none());
        assert!(!b.is_exhausted());
    }

    #[test]
    fn test_past_deadline() {
        let b = SearchBudget::unlimited().with_deadline(Instant::now());
        assert!(b.is_exhausted());
    }

    #[test]
    fn test_future_deadline() {
        let b = SearchBudget::with_time_limit(Duration::from_secs(3600));
        assert!(!b.is_exhausted());
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let b = SearchBudget::unlimited().with_cancel_flag(Arc::clone(&flag));
        assert!(!b.is_exhausted());
        flag.store(true, Ordering::Relaxed);
        assert!(b.is_exhausted());
    }
}
