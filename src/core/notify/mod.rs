//! Outbound email for quote requests
//!
//! The dispatcher talks to an [`EmailSender`]; [`ResendClient`] is the
//! production implementation.

mod dispatcher;
mod render;
mod resend;
mod sender;

pub use dispatcher::{ConfirmationStatus, DispatchOutcome, NotificationDispatcher, QuoteNotification};
pub use render::{format_timestamp, render_confirmation, render_internal};
pub use resend::ResendClient;
pub use sender::{Delivery, EmailError, EmailSender, OutboundEmail};

#[cfg(test)]
pub use sender::MockEmailSender;
