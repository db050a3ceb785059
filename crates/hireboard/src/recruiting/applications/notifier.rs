use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::domain::PositionApplication;
use crate::config::MailerConfig;
use crate::recruiting::positions::Position;

pub const APPLICATION_RECEIVED_SUBJECT: &str = "New Position Application Received";

/// Composed outbound message handed to the transport collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub to: Vec<String>,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Outbound mail transport (SMTP adapter, provider API, ...).
pub trait MailTransport: Send + Sync {
    fn deliver(&self, message: MailMessage) -> Result<(), MailError>;
}

/// Mail dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}

/// Composes the receipt notice sent to a position's contact addresses.
#[derive(Debug, Clone)]
pub struct ApplicationNotifier {
    mailer: MailerConfig,
}

impl ApplicationNotifier {
    pub fn new(mailer: MailerConfig) -> Self {
        Self { mailer }
    }

    pub fn application_received(
        &self,
        position: &Position,
        application: &PositionApplication,
    ) -> MailMessage {
        let position_url = format!(
            "{}/admin/positions/{}",
            self.mailer.base_url, position.slug
        );
        let team_url = format!("{}/admin/teams/{}", self.mailer.base_url, position.team.slug);

        let mut body = String::new();
        writeln!(body, "<p>Hi,</p>").expect("write greeting");
        writeln!(
            body,
            "<p>{} ({}) just applied for <a href=\"{}\">{}</a>, a position run by <a href=\"{}\">{}</a>.</p>",
            escape_html(&application.applicant_name),
            escape_html(&application.applicant_email),
            escape_html(&position_url),
            escape_html(&position.title),
            escape_html(&team_url),
            escape_html(&position.team.name),
        )
        .expect("write summary");
        writeln!(
            body,
            "<p>The full application is available from the position's admin page.</p>"
        )
        .expect("write footer");

        MailMessage {
            to: position.contact_emails.clone(),
            from: self.mailer.from.clone(),
            subject: APPLICATION_RECEIVED_SUBJECT.to_string(),
            body,
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
