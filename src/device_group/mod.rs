//! Payloads for the legacy `/fcm/notification` device group management
//! endpoint: create a named group of registration tokens, grow or shrink
//! it, and read back the notification key that addresses the group in a
//! send request.

use serde::{Deserialize, Serialize};


/// A device group management request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum Operation {
    /// Registers a new group under `notification_key_name` with the given
    /// member tokens.
    Create {
        notification_key_name: String,
        registration_ids: Vec<String>,
    },

    /// Adds tokens to an existing group. The key name is optional on the
    /// wire; sending it guards against addressing the wrong key.
    Add {
        #[serde(skip_serializing_if = "Option::is_none")]
        notification_key_name: Option<String>,
        notification_key: String,
        registration_ids: Vec<String>,
    },

    /// Removes tokens from an existing group.
    Remove {
        #[serde(skip_serializing_if = "Option::is_none")]
        notification_key_name: Option<String>,
        notification_key: String,
        registration_ids: Vec<String>,
    },
}

/// Successful answer to any management request.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OperationResponse {
    /// The key that addresses the group as a send target.
    pub notification_key: String,
}
