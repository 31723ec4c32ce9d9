use std::time::{Duration, Instant};

/// How long a transient signal stays visible before [`FormSession::tick`]
/// clears it.
///
/// [`FormSession::tick`]: crate::FormSession::tick
pub const SIGNAL_TTL: Duration = Duration::from_millis(3000);

/// Raised when the player tries to advance an incomplete screen.
pub const MSG_INCOMPLETE: &str = "QUEST REQUIREMENT: Complete all objectives to proceed.";

/// Raised when a non-active gamer tries to pass the screening gate.
pub const MSG_ACCESS_DENIED: &str = "ACCESS DENIED: Only active gamers can proceed.";

/// A short-lived notification for the front-end to overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// XP was just granted.
    XpToast { amount: u32 },
    /// A validation or gating message.
    Error { message: &'static str },
}

/// A signal together with its expiry.
///
/// `deadline: None` means the signal is sticky: it stays until the next
/// `advance` outcome replaces or clears it. Storing the deadline here
/// means re-raising a signal replaces the old deadline, so a stale timer
/// can never clear a newer signal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveSignal {
    pub signal: Signal,
    pub deadline: Option<Instant>,
}
