//! Debounced backing-field sync.
//!
//! The platform owns the actual timer. Every input event takes a new ticket
//! and (re)arms the timer with it; when a timer fires it asks whether its
//! ticket is still the latest. Superseded and cancelled tickets never fire.

/// Identifies one scheduled sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyncTicket(u64);

#[derive(Debug, Default)]
pub struct SyncDebouncer {
    issued: u64,
    pending: Option<SyncTicket>,
}

impl SyncDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding any outstanding one.
    pub fn schedule(&mut self) -> SyncTicket {
        self.issued += 1;
        let ticket = SyncTicket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Consume `ticket` if it is the latest outstanding one.
    pub fn fire(&mut self, ticket: SyncTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the outstanding ticket, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
