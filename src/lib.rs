//! fcm-legacy
//! ==========
//!
//! A data model for the Firebase Cloud Messaging legacy HTTP API: build the
//! JSON payloads the `/fcm/send` and `/fcm/notification` endpoints expect,
//! and normalize the three response payloads the server answers with
//! (topic send, device group send, multicast) into a single [`Response`]
//! value. Transport, authentication and retries stay with the caller.
//!
//! # Examples:
//!
//! Build a message addressed to a topic:
//!
//! ```rust
//! use fcm_legacy::{MessageBuilder, Topic};
//!
//! let topic = Topic::new("news")?;
//!
//! let mut builder = MessageBuilder::new_to_topic(&topic);
//! builder.time_to_live(3600);
//! let message = builder.finalize();
//!
//! let body = serde_json::to_string(&message)?;
//! assert_eq!(body, r#"{"time_to_live":3600,"to":"/topics/news"}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Whatever send mode produced it, the response body parses into the same
//! shape:
//!
//! ```rust
//! use fcm_legacy::Response;
//!
//! let response =
//!     Response::from_str(r#"{"success":2,"failure":1,"failed_registration_ids":["tokA"]}"#)?;
//!
//! assert_eq!(response.succeeded, 2);
//! assert_eq!(response.failed, 1);
//! assert_eq!(response.results[2].token.as_deref(), Some("tokA"));
//! # Ok::<(), fcm_legacy::FcmError>(())
//! ```

use std::borrow::Cow;

mod error;
pub use crate::error::FcmError;
mod message;
pub use crate::message::*;
mod notification;
pub use crate::notification::*;
mod response;
pub use crate::response::*;
mod topic;
pub use crate::topic::*;
pub mod device_group;

pub(crate) fn cow_strs<'a, S>(values: &'a [S]) -> Vec<Cow<'a, str>>
where
    S: AsRef<str>,
{
    values.iter().map(|value| value.as_ref().into()).collect()
}
