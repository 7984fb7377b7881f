// src/session/sequencer.rs
// Monotonic ticket counter for in-flight recognition requests. A response
// is applied only if no newer request was issued while it was on the wire,
// so a slow early upload can never clobber a fast later one.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
}

impl RequestSequencer {
    /// Take a ticket for a request about to be sent.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while no newer ticket has been issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic() {
        let seq = RequestSequencer::default();
        assert_eq!(seq.begin(), 1);
        assert_eq!(seq.begin(), 2);
        assert_eq!(seq.begin(), 3);
    }

    #[test]
    fn only_the_newest_ticket_is_current() {
        let seq = RequestSequencer::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
