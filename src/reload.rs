//! Reload Generations
//!
//! Every mutating action bumps the requested generation. A fetch captures
//! the generation it was started for, and only the newest one may settle.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadState {
    requested: u64,
    settled: u64,
}

impl Default for ReloadState {
    /// Stale from the start so the grid loads on mount
    fn default() -> Self {
        Self { requested: 1, settled: 0 }
    }
}

impl ReloadState {
    /// Mark the collection stale; returns the new generation
    pub fn request(&mut self) -> u64 {
        self.requested += 1;
        self.requested
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn is_stale(&self) -> bool {
        self.settled < self.requested
    }

    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.requested)
    }

    /// Settle a finished fetch, success or failure alike.
    /// Returns false when a newer reload was requested in the meantime;
    /// the caller must then discard the response.
    pub fn settle(&mut self, ticket: FetchTicket) -> bool {
        if ticket.0 != self.requested {
            return false;
        }
        self.settled = ticket.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_stale() {
        let mut reload = ReloadState::default();
        assert!(reload.is_stale());
        let ticket = reload.begin();
        assert!(reload.settle(ticket));
        assert!(!reload.is_stale());
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let mut reload = ReloadState::default();
        let first = reload.begin();
        reload.request();
        let second = reload.begin();

        // second response arrives first, then the late first one
        assert!(reload.settle(second));
        assert!(!reload.settle(first));
        assert!(!reload.is_stale());
        assert_eq!(reload.requested(), second.generation());
    }

    #[test]
    fn older_ticket_cannot_clear_newer_request() {
        let mut reload = ReloadState::default();
        let first = reload.begin();
        reload.request();
        assert!(!reload.settle(first));
        assert!(reload.is_stale());
    }

    #[test]
    fn request_bumps_generation() {
        let mut reload = ReloadState::default();
        let ticket = reload.begin();
        reload.settle(ticket);
        assert_eq!(reload.request(), 2);
        assert!(reload.is_stale());
    }
}
