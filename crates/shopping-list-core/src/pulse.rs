//! Total Pulse
//!
//! The short scale-up on the total after it changes. Like the notification
//! banner, only the latest pulse's timer may end it.

/// Issued by `start`; a stale ticket cannot end a newer pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct Pulse {
    active: bool,
    generation: u64,
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) -> PulseTicket {
        self.active = true;
        self.generation += 1;
        PulseTicket(self.generation)
    }

    /// End the pulse if `ticket` belongs to the latest `start`
    pub fn end(&mut self, ticket: PulseTicket) -> bool {
        if ticket.0 != self.generation || !self.active {
            return false;
        }
        self.active = false;
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
