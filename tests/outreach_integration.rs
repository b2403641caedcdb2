use std::sync::Mutex;

use lore::outreach::{ContactMessage, MessageSink, OutreachError};

/// Records every delivery instead of performing network I/O.
#[derive(Default)]
struct RecordingSink {
    contacts: Mutex<Vec<ContactMessage>>,
    subscriptions: Mutex<Vec<String>>,
}

impl MessageSink for RecordingSink {
    fn submit_contact(&self, message: &ContactMessage) -> Result<(), OutreachError> {
        message.validate()?;
        self.contacts.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn subscribe(&self, email: &str) -> Result<(), OutreachError> {
        if email.trim().is_empty() {
            return Err(OutreachError::MissingField("email"));
        }
        self.subscriptions.lock().unwrap().push(email.to_string());
        Ok(())
    }
}

/// A channel that always fails, for exercising error propagation.
struct FailingSink;

impl MessageSink for FailingSink {
    fn submit_contact(&self, _message: &ContactMessage) -> Result<(), OutreachError> {
        Err(OutreachError::Http { status: 503 })
    }

    fn subscribe(&self, _email: &str) -> Result<(), OutreachError> {
        Err(OutreachError::Http { status: 503 })
    }
}

#[test]
fn test_contact_flows_through_the_sink_seam() {
    let sink = RecordingSink::default();

    let message = ContactMessage::new("Ada Lovelace", "ada@example.com", "Interested in the demo")
        .with_phone("555-0100");

    // Deliveries go through the trait object, the same way the CLI holds the
    // sink, so any channel implementation can stand in.
    let channel: &dyn MessageSink = &sink;
    channel.submit_contact(&message).unwrap();

    let contacts = sink.contacts.lock().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name(), "Ada Lovelace");
    assert_eq!(contacts[0].phone(), "555-0100");
    assert_eq!(contacts[0].linkedin(), "");
}

#[test]
fn test_invalid_contact_is_rejected_before_delivery() {
    let sink = RecordingSink::default();

    let message = ContactMessage::new("", "ada@example.com", "Hello");
    let err = sink.submit_contact(&message).unwrap_err();

    assert!(matches!(err, OutreachError::MissingField("name")));
    assert!(sink.contacts.lock().unwrap().is_empty());
}

#[test]
fn test_subscribe_records_the_email() {
    let sink = RecordingSink::default();

    sink.subscribe("reader@example.com").unwrap();

    assert_eq!(
        *sink.subscriptions.lock().unwrap(),
        vec!["reader@example.com".to_string()]
    );
}

#[test]
fn test_blank_subscription_is_rejected() {
    let sink = RecordingSink::default();

    let err = sink.subscribe("   ").unwrap_err();
    assert!(matches!(err, OutreachError::MissingField("email")));
    assert!(sink.subscriptions.lock().unwrap().is_empty());
}

#[test]
fn test_delivery_failures_surface_as_errors() {
    let channel: &dyn MessageSink = &FailingSink;

    let message = ContactMessage::new("Ada", "ada@example.com", "Hello");
    let err = channel.submit_contact(&message).unwrap_err();
    assert!(matches!(err, OutreachError::Http { status: 503 }));

    let err = channel.subscribe("reader@example.com").unwrap_err();
    assert!(matches!(err, OutreachError::Http { status: 503 }));
}
