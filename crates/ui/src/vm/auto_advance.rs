use quiz_core::model::PracticeMode;

/// Handle for one scheduled auto-advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTicket(u64);

/// Cancelable token for the delayed "next question" after an answer.
///
/// Every schedule or cancel bumps a generation counter, so a timer that
/// wakes up with an older ticket is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoAdvance {
    generation: u64,
    pending: Option<u64>,
}

impl AutoAdvance {
    /// Returns a ticket to hand to the timer, or `None` in review mode.
    pub fn schedule(&mut self, mode: PracticeMode) -> Option<AdvanceTicket> {
        self.generation += 1;
        if mode.is_review() {
            self.pending = None;
            return None;
        }
        self.pending = Some(self.generation);
        Some(AdvanceTicket(self.generation))
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the pending ticket if `ticket` is still the live one.
    pub fn fire(&mut self, ticket: AdvanceTicket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_mode_never_schedules() {
        let mut auto = AutoAdvance::default();
        assert!(auto.schedule(PracticeMode::Wrong).is_none());
        assert!(!auto.is_pending());
    }

    #[test]
    fn ticket_fires_once() {
        let mut auto = AutoAdvance::default();
        let ticket = auto.schedule(PracticeMode::All).unwrap();
        assert!(auto.fire(ticket));
        assert!(!auto.fire(ticket));
    }

    #[test]
    fn cancel_invalidates_outstanding_ticket() {
        let mut auto = AutoAdvance::default();
        let ticket = auto.schedule(PracticeMode::All).unwrap();
        auto.cancel();
        assert!(!auto.fire(ticket));
    }

    #[test]
    fn newer_schedule_supersedes_older() {
        let mut auto = AutoAdvance::default();
        let first = auto.schedule(PracticeMode::All).unwrap();
        let second = auto.schedule(PracticeMode::All).unwrap();
        assert!(!auto.fire(first));
        assert!(auto.fire(second));
    }
}
