use std::time::Duration;

/// How long a notification stays visible before it expires
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Identifies one shown notification. Only the matching ticket can expire it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum NoticeState {
    #[default]
    Idle,
    Showing { text: String, ticket: NoticeTicket },
}

/// Single-slot transient message.
///
/// `notify` replaces whatever is showing and hands back a fresh ticket; the
/// caller schedules `expire(ticket)` after [`NOTIFICATION_TTL`]. An expiry for
/// a superseded ticket does nothing, so a late timer can never clear a newer
/// message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationChannel {
    state: NoticeState,
    issued: u64,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text`, replacing any current message.
    pub fn notify(&mut self, text: impl Into<String>) -> NoticeTicket {
        self.issued += 1;
        let ticket = NoticeTicket(self.issued);
        self.state = NoticeState::Showing {
            text: text.into(),
            ticket,
        };
        ticket
    }

    /// Clear the message if `ticket` is still the one showing.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        match &self.state {
            NoticeState::Showing { ticket: current, .. } if *current == ticket => {
                self.state = NoticeState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            NoticeState::Idle => None,
            NoticeState::Showing { text, .. } => Some(text),
        }
    }

    pub fn current_ticket(&self) -> Option<NoticeTicket> {
        match &self.state {
            NoticeState::Idle => None,
            NoticeState::Showing { ticket, .. } => Some(*ticket),
        }
    }
}
