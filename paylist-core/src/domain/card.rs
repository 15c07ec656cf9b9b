//! Payment card domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A payment card registered by the user
///
/// `number` is whatever the API hands out, usually already masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub number: String,
    pub holder: String,
}

impl Card {
    pub fn new(number: impl Into<String>, holder: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
            holder: holder.into(),
        }
    }
}
