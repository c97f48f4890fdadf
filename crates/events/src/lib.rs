//! Scholar outbound delivery.
//!
//! - [`delivery::email`] -- SMTP email via `lettre`.
//! - [`NotificationMailer`] -- best-effort email side channel for
//!   notification fan-out. Failures are logged, never propagated.

pub mod delivery;
pub mod mailer;

pub use delivery::email::{EmailConfig, EmailDelivery, EmailError, OutboundEmail};
pub use mailer::{DispatchReport, NotificationMailer};
