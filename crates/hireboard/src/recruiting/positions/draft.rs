use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::domain::{Position, Team};
use crate::recruiting::validate::ValidationErrors;

/// Administrator-submitted form of a position. The slug and the rendered
/// description fields are derived at save time, never accepted as input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub time_commitment: Option<String>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub paid_description: Option<String>,
    #[serde(default)]
    pub general_description: String,
    #[serde(default)]
    pub position_description: String,
    #[serde(default)]
    pub applicant_description: String,
    #[serde(default)]
    pub contact_emails: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl PositionDraft {
    /// Field-level validation. The contact-email gate uses the *current*
    /// published predicate: a draft scheduled to publish later saves without
    /// contacts, one already inside its window does not.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("title", &self.title);
        errors.require("short_description", &self.short_description);
        errors.require("duration", &self.duration);
        if self
            .time_commitment
            .as_deref()
            .map_or(true, |code| code.trim().is_empty())
        {
            errors.add("time_commitment", "can't be blank");
        }
        if self.team.is_none() {
            errors.add("team", "can't be blank");
        }
        errors.require("general_description", &self.general_description);
        errors.require("position_description", &self.position_description);
        errors.require("applicant_description", &self.applicant_description);

        if self.paid
            && self
                .paid_description
                .as_deref()
                .map_or(true, |text| text.trim().is_empty())
        {
            errors.add("paid_description", "can't be blank");
        }

        if let (Some(published_at), Some(expires_at)) = (self.published_at, self.expires_at) {
            if expires_at <= published_at {
                errors.add("expires_at", "must be after the publish date");
            }
        }

        let published_now = self.published_at.is_some_and(|at| at <= now);
        let has_contact = self
            .contact_emails
            .iter()
            .any(|email| !email.trim().is_empty());
        if published_now && !has_contact {
            errors.add("contact_emails", "can't be blank");
        }

        errors.finish()
    }

    /// Build the position once validation has passed and a slug has been
    /// assigned. Rendered fields start empty; the markdown pass fills them.
    pub(crate) fn into_position(self, slug: String) -> Position {
        Position {
            title: self.title,
            slug,
            team: self.team.expect("validated team"),
            short_description: self.short_description,
            duration: self.duration,
            time_commitment: self.time_commitment,
            paid: self.paid,
            paid_description: self.paid_description,
            general_description: self.general_description,
            position_description: self.position_description,
            applicant_description: self.applicant_description,
            rendered_paid_description: None,
            rendered_general_description: String::new(),
            rendered_position_description: String::new(),
            rendered_applicant_description: String::new(),
            contact_emails: self.contact_emails,
            published_at: self.published_at,
            expires_at: self.expires_at,
            questions: Vec::new(),
        }
    }
}
