//! Outbound email relay for the contact form.
//!
//! The relay credentials are required configuration: the server refuses to
//! start without them.

use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactFields;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
const RECIPIENT_VAR: &str = "CONTACT_RECIPIENT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    Missing(&'static str),
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("email relay unreachable: {0}")]
    Network(String),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected {
        status: http::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    pub to_email: &'a str,
}

/// JSON body of a relay send call.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            recipient: required(RECIPIENT_VAR)?,
        })
    }

    pub fn request<'a>(&'a self, fields: &'a ContactFields) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: fields.name.trim(),
                from_email: fields.email.trim(),
                phone: fields.phone.trim(),
                message: &fields.message,
                to_email: &self.recipient,
            },
        }
    }
}

#[cfg(feature = "ssr")]
pub use client::EmailRelay;

#[cfg(feature = "ssr")]
mod client {
    use std::sync::Arc;

    use super::{RelayConfig, RelayError, EMAILJS_SEND_URL};
    use crate::contact::ContactFields;

    /// Sends contact submissions to the relay. Cheap to clone.
    #[derive(Clone)]
    pub struct EmailRelay {
        client: reqwest::Client,
        config: Arc<RelayConfig>,
    }

    impl EmailRelay {
        pub fn new(config: RelayConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                config: Arc::new(config),
            }
        }

        /// One attempt, no retry. Timeouts are whatever the transport enforces.
        pub async fn send(&self, fields: &ContactFields) -> Result<(), RelayError> {
            let body = self.config.request(fields);
            tracing::debug!(service = %body.service_id, "POST {EMAILJS_SEND_URL}");

            let response = self
                .client
                .post(EMAILJS_SEND_URL)
                .json(&body)
                .send()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                tracing::info!("contact message relayed");
                return Ok(());
            }
            let body = response.text().await.unwrap_or_default();
            Err(RelayError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("EMAILJS_SERVICE_ID", "service_x"),
            ("EMAILJS_TEMPLATE_ID", "template_y"),
            ("EMAILJS_PUBLIC_KEY", "key_z"),
            ("CONTACT_RECIPIENT", "owner@example.com"),
        ])
    }

    #[test]
    fn test_config_from_complete_env() {
        let vars = full_env();
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.template_id, "template_y");
        assert_eq!(config.public_key, "key_z");
        assert_eq!(config.recipient, "owner@example.com");
    }

    #[test]
    fn test_missing_or_blank_config_is_an_error() {
        let mut vars = full_env();
        vars.remove("EMAILJS_PUBLIC_KEY");
        assert_eq!(
            RelayConfig::from_lookup(|k| vars.get(k).cloned()),
            Err(ConfigError::Missing("EMAILJS_PUBLIC_KEY"))
        );

        let mut vars = full_env();
        vars.insert("EMAILJS_SERVICE_ID".to_string(), "  ".to_string());
        let err = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required configuration: EMAILJS_SERVICE_ID"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let vars = full_env();
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let fields = ContactFields {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555".to_string(),
            message: "Hi!\nBye".to_string(),
        };
        let body = serde_json::to_value(config.request(&fields)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "phone": "555",
                    "message": "Hi!\nBye",
                    "to_email": "owner@example.com",
                }
            })
        );
    }
}
