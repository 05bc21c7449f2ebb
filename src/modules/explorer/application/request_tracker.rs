use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Handle for one fetch-bearing operation
///
/// Counts as in flight until dropped, including when the owning future is
/// abandoned before it completes.
#[derive(Debug)]
pub struct RequestTicket {
    pub sequence: u64,
    pub token: CancellationToken,
    live: Arc<AtomicUsize>,
}

impl Drop for RequestTicket {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Orders overlapping fetches so that the most recently issued request wins
///
/// Every request takes the next sequence number and cancels the one before it.
/// A finished request may only touch engine state if its number is still the
/// latest issued.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
    live: Arc<AtomicUsize>,
    current: Option<CancellationToken>,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.live.fetch_add(1, Ordering::SeqCst);

        let token = CancellationToken::new();
        if let Some(previous) = self.current.replace(token.clone()) {
            previous.cancel();
        }

        RequestTicket {
            sequence: self.latest,
            token,
            live: self.live.clone(),
        }
    }

    /// True if `ticket` may apply its result
    pub fn finish(&mut self, ticket: &RequestTicket) -> bool {
        let is_latest = ticket.sequence == self.latest && !ticket.token.is_cancelled();
        if is_latest {
            self.current = None;
        }
        is_latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// Tickets issued and not yet dropped
    pub fn in_flight(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
        assert_eq!(tracker.in_flight(), 2);
    }

    #[test]
    fn test_newer_request_cancels_older() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(first.token.is_cancelled());
        assert!(!second.token.is_cancelled());

        assert!(tracker.finish(&second));
        assert!(!tracker.finish(&first));
    }

    #[test]
    fn test_sequential_requests_are_each_latest() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        assert!(tracker.finish(&first));

        let second = tracker.begin();
        assert!(!first.token.is_cancelled());
        assert!(tracker.finish(&second));
        assert_eq!(tracker.latest(), 2);
    }

    #[test]
    fn test_dropped_ticket_leaves_flight() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!(tracker.in_flight(), 2);

        // abandoned without finish
        drop(first);
        assert_eq!(tracker.in_flight(), 1);

        assert!(tracker.finish(&second));
        drop(second);
        assert_eq!(tracker.in_flight(), 0);
    }
}
