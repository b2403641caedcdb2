//! Contact-form and newsletter delivery.
//!
//! Submissions leave the process through the `MessageSink` trait so the
//! delivery channel stays swappable; the shipped implementation forwards to a
//! Google Form over HTTP. Field mapping and the form URL come from the
//! environment (or a `.env` file), matching the deployment this replaces.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when delivering a submission.
#[derive(Debug, Error)]
pub enum OutreachError {
    /// A required submission field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No form action or entry mapping is configured.
    #[error("Delivery is not configured; set GOOGLE_FORM_ACTION or GOOGLE_FORM_VIEW_URL and the GOOGLE_ENTRY_* variables")]
    NotConfigured,

    /// The configured form URL does not parse.
    #[error("Invalid form URL: {0}")]
    InvalidUrl(String),

    /// Network-related errors (connection failures, DNS resolution, etc.)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request or response timeout errors
    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),

    /// HTTP errors with status code
    #[error("HTTP error: status {status}")]
    Http { status: u16 },
}

/// A visitor's contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
    phone: String,
    linkedin: String,
}

impl ContactMessage {
    /// Creates a contact message from the required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            phone: String::new(),
            linkedin: String::new(),
        }
    }

    /// Sets the optional phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the optional LinkedIn URL.
    pub fn with_linkedin(mut self, linkedin: impl Into<String>) -> Self {
        self.linkedin = linkedin.into();
        self
    }

    /// Returns the sender's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sender's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the phone number, empty if not provided.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the LinkedIn URL, empty if not provided.
    pub fn linkedin(&self) -> &str {
        &self.linkedin
    }

    /// Checks that name, email, and message are all non-blank.
    ///
    /// # Errors
    ///
    /// Returns `OutreachError::MissingField` naming the first blank field.
    pub fn validate(&self) -> Result<(), OutreachError> {
        if self.name.trim().is_empty() {
            return Err(OutreachError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(OutreachError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(OutreachError::MissingField("message"));
        }
        Ok(())
    }
}

/// Delivery channel for contact and newsletter submissions.
///
/// This trait is the seam between the toolkit and the outside world: the
/// Google Forms implementation below is one channel, and tests substitute
/// recording mocks.
pub trait MessageSink: Send + Sync {
    /// Delivers a contact-form submission.
    fn submit_contact(&self, message: &ContactMessage) -> Result<(), OutreachError>;

    /// Records a newsletter subscription for the given email address.
    fn subscribe(&self, email: &str) -> Result<(), OutreachError>;
}

/// Builder for constructing `GoogleFormSink` instances.
///
/// Every setting falls back to an environment variable, so a fully
/// env-configured sink is `GoogleFormSinkBuilder::new().build()`.
///
/// # Environment Variables
///
/// - `GOOGLE_FORM_ACTION` — the `formResponse` endpoint to post to.
/// - `GOOGLE_FORM_VIEW_URL` — a `viewform` URL the action is derived from
///   when no explicit action is set.
/// - `GOOGLE_ENTRY_NAME`, `GOOGLE_ENTRY_EMAIL` — required entry field ids.
/// - `GOOGLE_ENTRY_MESSAGE`, `GOOGLE_ENTRY_PHONE`, `GOOGLE_ENTRY_LINKEDIN` —
///   optional entry field ids; unset fields are simply not forwarded.
#[derive(Debug, Default)]
pub struct GoogleFormSinkBuilder {
    action: Option<String>,
    view_url: Option<String>,
    entry_name: Option<String>,
    entry_email: Option<String>,
    entry_message: Option<String>,
    entry_phone: Option<String>,
    entry_linkedin: Option<String>,
}

impl GoogleFormSinkBuilder {
    /// Creates a new builder with no explicit configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the form action URL to post submissions to.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the public `viewform` URL; the action is derived from it when no
    /// explicit action is configured.
    pub fn view_url(mut self, url: impl Into<String>) -> Self {
        self.view_url = Some(url.into());
        self
    }

    /// Sets the entry field id for the sender's name.
    pub fn entry_name(mut self, entry: impl Into<String>) -> Self {
        self.entry_name = Some(entry.into());
        self
    }

    /// Sets the entry field id for the sender's email.
    pub fn entry_email(mut self, entry: impl Into<String>) -> Self {
        self.entry_email = Some(entry.into());
        self
    }

    /// Sets the entry field id for the message body.
    pub fn entry_message(mut self, entry: impl Into<String>) -> Self {
        self.entry_message = Some(entry.into());
        self
    }

    /// Sets the entry field id for the phone number.
    pub fn entry_phone(mut self, entry: impl Into<String>) -> Self {
        self.entry_phone = Some(entry.into());
        self
    }

    /// Sets the entry field id for the LinkedIn URL.
    pub fn entry_linkedin(mut self, entry: impl Into<String>) -> Self {
        self.entry_linkedin = Some(entry.into());
        self
    }

    /// Builds the `GoogleFormSink`.
    ///
    /// # Errors
    ///
    /// Returns `OutreachError::NotConfigured` if no action can be determined
    /// or the name/email entry ids are missing, `OutreachError::InvalidUrl`
    /// if the view URL does not parse, and `OutreachError::Network` if the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<GoogleFormSink, OutreachError> {
        let action = match self.action.or_else(|| env_nonempty("GOOGLE_FORM_ACTION")) {
            Some(action) => action,
            None => {
                let view_url = self
                    .view_url
                    .or_else(|| env_nonempty("GOOGLE_FORM_VIEW_URL"))
                    .ok_or(OutreachError::NotConfigured)?;
                derive_form_action(&view_url)?
            }
        };

        let entry_name = self
            .entry_name
            .or_else(|| env_nonempty("GOOGLE_ENTRY_NAME"))
            .ok_or(OutreachError::NotConfigured)?;
        let entry_email = self
            .entry_email
            .or_else(|| env_nonempty("GOOGLE_ENTRY_EMAIL"))
            .ok_or(OutreachError::NotConfigured)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(OutreachError::Network)?;

        Ok(GoogleFormSink {
            client,
            action,
            entry_name,
            entry_email,
            entry_message: self
                .entry_message
                .or_else(|| env_nonempty("GOOGLE_ENTRY_MESSAGE")),
            entry_phone: self
                .entry_phone
                .or_else(|| env_nonempty("GOOGLE_ENTRY_PHONE")),
            entry_linkedin: self
                .entry_linkedin
                .or_else(|| env_nonempty("GOOGLE_ENTRY_LINKEDIN")),
        })
    }
}

/// `MessageSink` that forwards submissions to a Google Form.
#[derive(Debug)]
pub struct GoogleFormSink {
    client: reqwest::blocking::Client,
    action: String,
    entry_name: String,
    entry_email: String,
    entry_message: Option<String>,
    entry_phone: Option<String>,
    entry_linkedin: Option<String>,
}

impl GoogleFormSink {
    /// Returns the form action URL submissions are posted to.
    pub fn action(&self) -> &str {
        &self.action
    }

    fn post(&self, fields: &[(&str, &str)]) -> Result<(), OutreachError> {
        let response = self
            .client
            .post(&self.action)
            .form(fields)
            .send()
            .map_err(request_error)?;

        let status = response.status();
        // Google Forms answers a successful submission with 200 or a redirect.
        if status.is_success() || status.as_u16() == 302 {
            Ok(())
        } else {
            Err(OutreachError::Http {
                status: status.as_u16(),
            })
        }
    }
}

impl MessageSink for GoogleFormSink {
    fn submit_contact(&self, message: &ContactMessage) -> Result<(), OutreachError> {
        message.validate()?;

        let mut fields: Vec<(&str, &str)> = vec![
            (self.entry_name.as_str(), message.name()),
            (self.entry_email.as_str(), message.email()),
        ];
        if let Some(entry) = &self.entry_message {
            fields.push((entry.as_str(), message.message()));
        }
        if let Some(entry) = &self.entry_phone
            && !message.phone().is_empty()
        {
            fields.push((entry.as_str(), message.phone()));
        }
        if let Some(entry) = &self.entry_linkedin
            && !message.linkedin().is_empty()
        {
            fields.push((entry.as_str(), message.linkedin()));
        }

        self.post(&fields)
    }

    fn subscribe(&self, email: &str) -> Result<(), OutreachError> {
        if email.trim().is_empty() {
            return Err(OutreachError::MissingField("email"));
        }
        self.post(&[(self.entry_email.as_str(), email)])
    }
}

/// Derives the `formResponse` action endpoint from a public `viewform` URL:
/// the query string is dropped and the path suffix swapped.
fn derive_form_action(view_url: &str) -> Result<String, OutreachError> {
    let mut url = reqwest::Url::parse(view_url)
        .map_err(|e| OutreachError::InvalidUrl(format!("{view_url}: {e}")))?;
    url.set_query(None);
    let path = url.path().replace("/viewform", "/formResponse");
    url.set_path(&path);
    Ok(url.to_string())
}

/// Classifies a reqwest error as timeout or general network failure.
fn request_error(err: reqwest::Error) -> OutreachError {
    if err.is_timeout() {
        OutreachError::Timeout(err)
    } else {
        OutreachError::Network(err)
    }
}

/// Reads an environment variable, treating blank values as unset.
fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn contact_message_validates_required_fields() {
        let valid = ContactMessage::new("Ada", "ada@example.com", "Hello");
        assert!(valid.validate().is_ok());

        let missing_name = ContactMessage::new("  ", "ada@example.com", "Hello");
        assert!(matches!(
            missing_name.validate(),
            Err(OutreachError::MissingField("name"))
        ));

        let missing_email = ContactMessage::new("Ada", "", "Hello");
        assert!(matches!(
            missing_email.validate(),
            Err(OutreachError::MissingField("email"))
        ));

        let missing_message = ContactMessage::new("Ada", "ada@example.com", "\n");
        assert!(matches!(
            missing_message.validate(),
            Err(OutreachError::MissingField("message"))
        ));
    }

    #[test]
    fn contact_message_carries_optional_fields() {
        let message = ContactMessage::new("Ada", "ada@example.com", "Hello")
            .with_phone("555-0100")
            .with_linkedin("https://linkedin.com/in/ada");

        assert_eq!(message.phone(), "555-0100");
        assert_eq!(message.linkedin(), "https://linkedin.com/in/ada");
    }

    #[test]
    fn derive_form_action_swaps_viewform_for_form_response() {
        let action = derive_form_action(
            "https://docs.google.com/forms/d/e/ABC123/viewform?usp=sf_link",
        )
        .unwrap();
        assert_eq!(
            action,
            "https://docs.google.com/forms/d/e/ABC123/formResponse"
        );
    }

    #[test]
    fn derive_form_action_rejects_malformed_urls() {
        let err = derive_form_action("not a url").unwrap_err();
        assert!(matches!(err, OutreachError::InvalidUrl(_)));
    }

    #[test]
    #[serial]
    fn builder_requires_action_and_entry_ids() {
        // Shield the assertion from ambient configuration.
        for key in [
            "GOOGLE_FORM_ACTION",
            "GOOGLE_FORM_VIEW_URL",
            "GOOGLE_ENTRY_NAME",
            "GOOGLE_ENTRY_EMAIL",
        ] {
            // SAFETY: serialized test, no concurrent env access.
            unsafe { std::env::remove_var(key) };
        }

        let err = GoogleFormSinkBuilder::new().build().unwrap_err();
        assert!(matches!(err, OutreachError::NotConfigured));

        let err = GoogleFormSinkBuilder::new()
            .action("https://docs.google.com/forms/d/e/ABC123/formResponse")
            .build()
            .unwrap_err();
        assert!(matches!(err, OutreachError::NotConfigured));
    }

    #[test]
    #[serial]
    fn builder_reads_configuration_from_environment() {
        // SAFETY: serialized test, no concurrent env access.
        unsafe {
            std::env::remove_var("GOOGLE_FORM_ACTION");
            std::env::set_var(
                "GOOGLE_FORM_VIEW_URL",
                "https://docs.google.com/forms/d/e/ENV456/viewform?usp=sf_link",
            );
            std::env::set_var("GOOGLE_ENTRY_NAME", "entry.100");
            std::env::set_var("GOOGLE_ENTRY_EMAIL", "entry.200");
        }

        let sink = GoogleFormSinkBuilder::new().build().unwrap();
        assert_eq!(
            sink.action(),
            "https://docs.google.com/forms/d/e/ENV456/formResponse"
        );

        // SAFETY: serialized test, no concurrent env access.
        unsafe {
            std::env::remove_var("GOOGLE_FORM_VIEW_URL");
            std::env::remove_var("GOOGLE_ENTRY_NAME");
            std::env::remove_var("GOOGLE_ENTRY_EMAIL");
        }
    }

    #[test]
    #[serial]
    fn builder_prefers_explicit_settings() {
        let sink = GoogleFormSinkBuilder::new()
            .action("https://docs.google.com/forms/d/e/DIRECT/formResponse")
            .entry_name("entry.1")
            .entry_email("entry.2")
            .build()
            .unwrap();
        assert_eq!(
            sink.action(),
            "https://docs.google.com/forms/d/e/DIRECT/formResponse"
        );
    }
}
