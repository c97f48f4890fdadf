//! Best-effort email side channel for notification fan-out.
//!
//! The mailer never returns an error. With SMTP configured each email is
//! sent and failures are logged; without it each email is only logged.

use crate::delivery::email::{EmailConfig, EmailDelivery, OutboundEmail};

/// Outcome counts of one dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
    /// Emails that were only logged because SMTP is not configured.
    pub logged: usize,
}

pub struct NotificationMailer {
    delivery: Option<EmailDelivery>,
}

impl NotificationMailer {
    /// Build from `SMTP_*` environment variables.
    ///
    /// An unusable SMTP configuration degrades to log-only with a warning.
    pub fn from_env() -> Self {
        let Some(config) = EmailConfig::from_env() else {
            tracing::info!("SMTP_HOST not set, notification emails will be logged only");
            return Self::log_only();
        };
        match EmailDelivery::new(&config) {
            Ok(delivery) => {
                tracing::info!(host = %config.smtp_host, port = config.smtp_port, "SMTP email delivery enabled");
                Self {
                    delivery: Some(delivery),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid SMTP configuration, notification emails will be logged only");
                Self::log_only()
            }
        }
    }

    /// A mailer that only logs what it would have sent.
    pub fn log_only() -> Self {
        Self { delivery: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.delivery.is_some()
    }

    /// Attempt every email in turn. One failure does not stop the rest.
    pub async fn dispatch(&self, emails: Vec<OutboundEmail>) -> DispatchReport {
        let mut report = DispatchReport::default();

        for email in emails {
            match &self.delivery {
                Some(delivery) => match delivery.deliver(&email).await {
                    Ok(()) => report.sent += 1,
                    Err(e) => {
                        tracing::warn!(to = %email.to, error = %e, "Notification email failed");
                        report.failed += 1;
                    }
                },
                None => {
                    tracing::info!(
                        to = %email.to,
                        subject = %email.subject,
                        body = %email.body,
                        "Notification email (log only)"
                    );
                    report.logged += 1;
                }
            }
        }

        report
    }
}
