use std::time::Duration;

pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

pub const SUCCESS_MESSAGE: &str = "Proyecto creado con éxito";

/// Identifies one showing of the toast. Only the most recent ticket can hide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket(u64);

/// Success notification flag.
///
/// Every `show` starts a new generation, so a timer armed for an earlier
/// creation can no longer hide the toast early.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    visible: bool,
    generation: u64,
}

impl Toast {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> DismissTicket {
        self.generation += 1;
        self.visible = true;
        DismissTicket(self.generation)
    }

    /// Hides the toast if `ticket` belongs to the latest `show`.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "stale toast timer ignored"
            );
            return false;
        }
        self.visible = false;
        true
    }
}

/// Resolves with `ticket` once the toast has been up for [`DISMISS_AFTER`].
pub async fn expire(ticket: DismissTicket) -> DismissTicket {
    tokio::time::sleep(DISMISS_AFTER).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_hides() {
        let mut toast = Toast::default();
        assert!(!toast.is_visible());
        let ticket = toast.show();
        assert!(toast.is_visible());
        assert!(toast.dismiss(ticket));
        assert!(!toast.is_visible());
        assert!(!toast.dismiss(ticket));
    }

    #[test]
    fn earlier_ticket_is_stale_after_reshow() {
        let mut toast = Toast::default();
        let first = toast.show();
        let second = toast.show();
        assert!(!toast.dismiss(first));
        assert!(toast.is_visible());
        assert!(toast.dismiss(second));
    }

    #[tokio::test(start_paused = true)]
    async fn expire_waits_three_seconds() {
        let mut toast = Toast::default();
        let ticket = toast.show();

        let early = tokio::time::timeout(Duration::from_millis(2999), expire(ticket)).await;
        assert!(early.is_err());
        assert!(toast.is_visible());

        let start = tokio::time::Instant::now();
        let fired = expire(ticket).await;
        assert_eq!(start.elapsed(), DISMISS_AFTER);
        assert!(toast.dismiss(fired));
    }
}
