use std::cell::Cell;

/// Tracks which in-flight load of a screen is still wanted.
///
/// Every load takes a [`Ticket`]; starting a newer load or tearing
/// down the screen makes older tickets stale and their results are
/// meant to be dropped.
#[derive(Debug, Default)]
pub struct Generation {
    current: Cell<u64>,
    closed: Cell<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    pub fn begin(&self) -> Ticket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Ticket(next)
    }

    /// Marks every ticket as stale, including future ones.
    pub fn invalidate(&self) {
        self.closed.set(true);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.closed.get() && self.current.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_load_supersedes_older_one() {
        let generation = Generation::default();
        let first = generation.begin();
        assert!(generation.is_current(first));
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn nothing_is_current_after_teardown() {
        let generation = Generation::default();
        let ticket = generation.begin();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
        let late = generation.begin();
        assert!(!generation.is_current(late));
        assert!(generation.is_closed());
    }
}
