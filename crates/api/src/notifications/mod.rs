//! Notification delivery.
//!
//! [`fanout::send_notification`] resolves recipients, materialises one row
//! per recipient and hands email delivery to the mailer in the background.

pub mod fanout;

pub use fanout::send_notification;
