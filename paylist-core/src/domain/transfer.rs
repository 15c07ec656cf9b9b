//! Money transfer domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of a transfer the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    Sent,
    Received,
}

/// A money transfer between the user and someone else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    /// ISO 4217 currency code of `amount`
    pub currency_code: String,
    pub date: DateTime<Utc>,
    pub sender: String,
    pub recipient: String,
    /// True when the user sent this transfer
    pub is_sender: bool,
}

impl Transfer {
    /// Create a new transfer with required fields
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        currency_code: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            currency_code: currency_code.into(),
            date,
            sender: String::new(),
            recipient: String::new(),
            is_sender: false,
        }
    }

    /// Mark as sent by the user to `recipient`
    pub fn sent_to(mut self, sender: impl Into<String>, recipient: impl Into<String>) -> Self {
        self.sender = sender.into();
        self.recipient = recipient.into();
        self.is_sender = true;
        self
    }

    /// Mark as received by the user from `sender`
    pub fn received_from(
        mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        self.sender = sender.into();
        self.recipient = recipient.into();
        self.is_sender = false;
        self
    }

    pub fn direction(&self) -> TransferDirection {
        if self.is_sender {
            TransferDirection::Sent
        } else {
            TransferDirection::Received
        }
    }
}
