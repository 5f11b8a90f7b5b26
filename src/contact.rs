use std::{fmt::Display, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the "sent" notice stays up.
pub const SENT_NOTICE_MS: u64 = 3000;
/// How long the failure notice stays up.
pub const FAILED_NOTICE_MS: u64 = 5000;
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or email directly.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySending,
}

/// What the visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::Missing(*field));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl ContactStatus {
    /// How long this status is shown before returning to idle.
    pub fn notice_ms(&self) -> Option<u64> {
        match self {
            Self::Sent => Some(SENT_NOTICE_MS),
            Self::Failed(_) => Some(FAILED_NOTICE_MS),
            Self::Idle | Self::Sending => None,
        }
    }
}

/// Contact form display state: `idle → sending → sent | failed → idle`.
///
/// Each notice gets a new generation number so a timer started for an older
/// notice cannot clear a newer one.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: ContactStatus,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The submit control is disabled while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        self.status != ContactStatus::Sending
    }

    /// Moves to `Sending` and hands back the fields to send. Invalid fields
    /// produce a failure notice and leave the fields as they are.
    pub fn begin_submit(&mut self) -> Result<ContactFields, ContactError> {
        if !self.can_submit() {
            return Err(ContactError::AlreadySending);
        }
        if let Err(e) = self.fields.validate() {
            self.set_notice(ContactStatus::Failed(e.to_string()));
            return Err(e);
        }
        self.status = ContactStatus::Sending;
        Ok(self.fields.clone())
    }

    /// Records the relay outcome. Returns the generation of the new notice.
    pub fn finish<E: Display>(&mut self, result: Result<(), E>) -> u64 {
        if self.status != ContactStatus::Sending {
            log::warn!("contact result arrived while not sending, ignoring");
            return self.generation;
        }
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.set_notice(ContactStatus::Sent);
            }
            Err(e) => {
                log::error!("contact relay failed: {e}");
                self.set_notice(ContactStatus::Failed(FAILURE_MESSAGE.to_string()));
            }
        }
        self.generation
    }

    /// Clears the notice started at `generation`, if it is still the current one.
    pub fn expire_notice(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status.notice_ms().is_none() {
            return false;
        }
        self.status = ContactStatus::Idle;
        true
    }

    fn set_notice(&mut self, status: ContactStatus) {
        self.generation += 1;
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        *form.fields_mut() = ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            message: "Hello there".to_string(),
        };
        form
    }

    #[test]
    fn test_success_clears_fields_and_returns_to_idle() {
        let mut form = filled();
        assert_eq!(form.status(), &ContactStatus::Idle);

        let sent = form.begin_submit().unwrap();
        assert_eq!(sent.name, "Ada");
        assert_eq!(form.status(), &ContactStatus::Sending);
        assert!(!form.can_submit());

        let generation = form.finish(Ok::<(), String>(()));
        assert_eq!(form.status(), &ContactStatus::Sent);
        assert_eq!(form.status().notice_ms(), Some(SENT_NOTICE_MS));
        assert_eq!(form.fields(), &ContactFields::default());

        assert!(form.expire_notice(generation));
        assert_eq!(form.status(), &ContactStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submit().unwrap();

        let generation = form.finish(Err("connection reset"));
        assert_eq!(
            form.status(),
            &ContactStatus::Failed(FAILURE_MESSAGE.to_string())
        );
        assert_eq!(form.status().notice_ms(), Some(FAILED_NOTICE_MS));
        assert_eq!(form.fields(), &before);
        assert!(form.can_submit());

        assert!(form.expire_notice(generation));
        assert_eq!(form.status(), &ContactStatus::Idle);
        assert_eq!(form.fields(), &before);
    }

    #[test]
    fn test_duplicate_submit_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySending));
        assert_eq!(form.status(), &ContactStatus::Sending);
    }

    #[test]
    fn test_missing_field() {
        let mut form = filled();
        form.fields_mut().phone = "   ".to_string();
        assert_eq!(form.begin_submit(), Err(ContactError::Missing("phone")));
        assert_eq!(
            form.status(),
            &ContactStatus::Failed("phone is required".to_string())
        );
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_invalid_email() {
        let mut fields = filled().fields().clone();
        for bad in ["ada", "ada@", "ada@example", "a da@example.com"] {
            fields.email = bad.to_string();
            assert_eq!(fields.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        fields.email = " ada@example.co.uk ".to_string();
        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_notice() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let first = form.finish(Err("timeout"));

        form.begin_submit().unwrap();
        let second = form.finish(Err("timeout"));
        assert_ne!(first, second);

        assert!(!form.expire_notice(first));
        assert!(matches!(form.status(), ContactStatus::Failed(_)));
        assert!(form.expire_notice(second));
    }

    #[test]
    fn test_result_without_pending_request_is_ignored() {
        let mut form = filled();
        form.finish(Ok::<(), String>(()));
        assert_eq!(form.status(), &ContactStatus::Idle);
        assert_eq!(form.fields().name, "Ada");
    }
}
