use crate::domain::model::OutgoingEmail;
use crate::domain::ports::EmailSender;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

/// Resend HTTP API client (`POST {base_url}/emails`).
pub struct ResendSender {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ResendSender {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

/// Pull the provider's `message` out of an error body, if there is one.
fn provider_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(|r| format!("{} {}", status.as_u16(), r))
                .unwrap_or_else(|| status.as_u16().to_string())
        })
}

#[async_trait]
impl EmailSender for ResendSender {
    async fn send(&self, email: &OutgoingEmail) -> std::result::Result<(), String> {
        let body = SendEmailBody {
            from: &email.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
            reply_to: &email.reply_to,
        };

        tracing::debug!("Posting email to {}", self.endpoint());
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        tracing::debug!("Email provider response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        tracing::debug!("Email provider error body: {}", text);
        Err(provider_message(status, &text))
    }
}
