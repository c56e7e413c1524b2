use super::fill_template;
use pattern_framework::{Subscriber, SubscriberError};
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Sends an e-mail alert per notification.
#[derive(Debug)]
pub struct EmailAlertsListener {
    email: String,
    message: String,
    sent: Mutex<Vec<String>>,
}

impl EmailAlertsListener {
    /// # Arguments
    /// * `email` - Recipient address
    /// * `message` - Alert template; `%s` is replaced by the file name
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            message: message.into(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Bodies of every alert sent so far.
    pub fn sent(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Subscriber<String> for EmailAlertsListener {
    fn name(&self) -> &str {
        "email-alerts"
    }

    /// Fails when there is no usable recipient address.
    fn update(&self, filename: &String) -> Result<(), SubscriberError> {
        if !self.email.contains('@') {
            return Err(SubscriberError(format!("no recipient: {:?}", self.email)));
        }
        let body = fill_template(&self.message, filename);
        info!(to = %self.email, %body, "Email sent");
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(body);
        Ok(())
    }
}
