//! Single-slot transient notifications.
//!
//! [`Notifier`] holds at most one visible notification. Showing a new one
//! replaces the old one immediately; there is no queue. Each `show` returns a
//! [`DismissTicket`] that the caller redeems after
//! [`NOTIFICATION_DISMISS`](crate::config::NOTIFICATION_DISMISS). A ticket
//! only hides the notification it was issued for, so an older timer firing
//! late never cuts a newer notification short.
//!
//! ```
//! use realty_core::notify::{Notifier, Severity};
//!
//! let mut notifier = Notifier::default();
//! let first = notifier.show("Saved", Severity::Success);
//! let second = notifier.show("Failed", Severity::Error);
//!
//! notifier.dismiss(first); // stale ticket, no effect
//! assert_eq!(notifier.current().unwrap().message, "Failed");
//!
//! notifier.dismiss(second);
//! assert!(notifier.current().is_none());
//! ```
//!
//! [`flash`] runs the whole show, wait, dismiss sequence against any
//! [`NotifierSlot`].

use std::cell::RefCell;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// CSS modifier / log label.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// A message a panel wants shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// The notification currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    ticket: DismissTicket,
}

impl Notification {
    pub fn ticket(&self) -> DismissTicket {
        self.ticket
    }
}

/// Identifies one `show` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifier {
    current: Option<Notification>,
    shown: u64,
}

impl Notifier {
    /// Replaces whatever is visible with `message`.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> DismissTicket {
        self.shown += 1;
        let ticket = DismissTicket(self.shown);
        self.current = Some(Notification {
            message: message.into(),
            severity,
            ticket,
        });
        ticket
    }

    pub fn show_notice(&mut self, notice: Notice) -> DismissTicket {
        self.show(notice.message, notice.severity)
    }

    /// Hides the notification issued with `ticket`, if it is still visible.
    ///
    /// Returns whether anything was hidden.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        match &self.current {
            Some(current) if current.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Somewhere a shared [`Notifier`] lives.
pub trait NotifierSlot {
    fn update<T>(&mut self, f: impl FnOnce(&mut Notifier) -> T) -> T;
}

impl NotifierSlot for &RefCell<Notifier> {
    fn update<T>(&mut self, f: impl FnOnce(&mut Notifier) -> T) -> T {
        f(&mut self.borrow_mut())
    }
}

/// Shows `notice`, waits for `delay`, then dismisses it unless a newer
/// notification has replaced it in the meantime.
pub async fn flash<N, D>(mut slot: N, notice: Notice, delay: D)
where
    N: NotifierSlot,
    D: Future<Output = ()>,
{
    let ticket = slot.update(|n| n.show_notice(notice));
    delay.await;
    slot.update(|n| n.dismiss(ticket));
}
