use crate::domain::model::{ContactRequest, OutgoingEmail};
use crate::domain::ports::EmailSender;
use crate::utils::validation::is_valid_email;
use std::sync::Arc;
use thiserror::Error;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email service is not configured. Please contact the site administrator.";

/// Every failure is terminal for the submission; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    #[error("Failed to send email: {0}. Please check your email service configuration.")]
    Delivery(String),
}

impl ContactError {
    /// Caller-correctable errors, reported before any external call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ContactError::MissingFields | ContactError::InvalidEmail)
    }
}

/// Addresses used when composing outgoing mail.
#[derive(Debug, Clone)]
pub struct Mailbox {
    pub from: String,
    pub to: String,
}

pub struct ContactService {
    sender: Option<Arc<dyn EmailSender>>,
    mailbox: Mailbox,
}

impl ContactService {
    pub fn new(sender: Arc<dyn EmailSender>, mailbox: Mailbox) -> Self {
        Self {
            sender: Some(sender),
            mailbox,
        }
    }

    /// A service with no delivery backend; every valid submission reports
    /// [`ContactError::NotConfigured`].
    pub fn unconfigured(mailbox: Mailbox) -> Self {
        Self {
            sender: None,
            mailbox,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.sender.is_some()
    }

    pub async fn submit(&self, request: &ContactRequest) -> Result<(), ContactError> {
        validate_request(request).inspect_err(|e| {
            tracing::warn!("Rejected contact submission: {}", e);
        })?;

        let Some(sender) = &self.sender else {
            tracing::error!("Contact submission received but no email sender is configured");
            return Err(ContactError::NotConfigured);
        };

        let email = compose_email(request, &self.mailbox);
        match sender.send(&email).await {
            Ok(()) => {
                tracing::info!("Contact email from {} delivered", request.email.trim());
                Ok(())
            }
            Err(detail) => {
                tracing::error!("Email delivery failed: {}", detail);
                Err(ContactError::Delivery(detail))
            }
        }
    }
}

pub fn validate_request(request: &ContactRequest) -> Result<(), ContactError> {
    let fields = [&request.name, &request.email, &request.message];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(request.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn compose_email(request: &ContactRequest, mailbox: &Mailbox) -> OutgoingEmail {
    let name = request.name.trim();
    let email = request.email.trim();
    let message = escape_html(&request.message).replace('\n', "<br>");

    let html = format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>",
        escape_html(name),
        escape_html(email),
        message
    );

    OutgoingEmail {
        from: mailbox.from.clone(),
        to: mailbox.to.clone(),
        reply_to: email.to_string(),
        subject: format!("Contact Form: {}", name),
        html,
    }
}
