use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::cow_strs;
use crate::notification::Notification;
use crate::topic::Topic;

#[cfg(test)]
mod tests;

/// Delivery priority of a message.
#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
}

/// The body of a legacy `/fcm/send` request. Serialize it and hand it to
/// the HTTP layer; authentication headers belong there, not here.
///
/// # Examples:
/// ```rust
/// use fcm_legacy::MessageBuilder;
///
/// let mut builder = MessageBuilder::new("<registration token>");
/// builder.dry_run(true);
/// let message = builder.finalize();
///
/// let body = serde_json::to_string(&message).unwrap();
/// ```
#[derive(Serialize, Debug, PartialEq)]
pub struct Message<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    collapse_key: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content_available: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    delay_while_idle: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<Notification<'a>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    registration_ids: Option<Vec<Cow<'a, str>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    restricted_package_name: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    time_to_live: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<Cow<'a, str>>,
}

impl<'a> Message<'a> {
    /// The `to` field, however the builder derived it.
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }
}

/// Accumulates the fields of a [`Message`].
///
/// # Examples:
/// ```rust
/// use fcm_legacy::{MessageBuilder, Priority};
///
/// let mut builder = MessageBuilder::new("<registration token>");
/// builder.priority(Priority::High);
/// let message = builder.finalize();
/// ```
#[derive(Debug, Default)]
pub struct MessageBuilder<'a> {
    collapse_key: Option<&'a str>,
    content_available: Option<bool>,
    data: Option<Value>,
    delay_while_idle: Option<bool>,
    dry_run: Option<bool>,
    notification: Option<Notification<'a>>,
    priority: Option<Priority>,
    registration_ids: Option<Vec<Cow<'a, str>>>,
    restricted_package_name: Option<&'a str>,
    time_to_live: Option<i32>,
    to: Option<Cow<'a, str>>,
}

impl<'a> MessageBuilder<'a> {
    /// A message for a single target: a registration token or a device
    /// group notification key.
    pub fn new<T: Into<Cow<'a, str>>>(to: T) -> Self {
        MessageBuilder {
            to: Some(to.into()),
            ..MessageBuilder::default()
        }
    }

    /// A message for every subscriber of `topic`.
    pub fn new_to_topic(topic: &Topic) -> Self {
        MessageBuilder {
            to: Some(topic.path().into()),
            ..MessageBuilder::default()
        }
    }

    /// A multicast message for an explicit list of registration tokens.
    pub fn new_multi<S>(ids: &'a [S]) -> Self
    where
        S: AsRef<str>,
    {
        MessageBuilder {
            registration_ids: Some(cow_strs(ids)),
            ..MessageBuilder::default()
        }
    }

    /// Replace the registration token list of a multicast message.
    pub fn registration_ids<S>(&mut self, ids: &'a [S]) -> &mut Self
    where
        S: AsRef<str>,
    {
        self.registration_ids = Some(cow_strs(ids));
        self
    }

    /// Identifies a group of messages that can be collapsed into one while
    /// the device is offline.
    pub fn collapse_key(&mut self, collapse_key: &'a str) -> &mut Self {
        self.collapse_key = Some(collapse_key);
        self
    }

    pub fn priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the `content-available` field on iOS.
    pub fn content_available(&mut self, content_available: bool) -> &mut Self {
        self.content_available = Some(content_available);
        self
    }

    /// When set, the message is only delivered once the device is active.
    pub fn delay_while_idle(&mut self, delay_while_idle: bool) -> &mut Self {
        self.delay_while_idle = Some(delay_while_idle);
        self
    }

    /// How long (in seconds) the server keeps the message for an offline
    /// device. The maximum and default is 4 weeks.
    pub fn time_to_live(&mut self, time_to_live: i32) -> &mut Self {
        self.time_to_live = Some(time_to_live);
        self
    }

    /// Package name the registration tokens must match.
    pub fn restricted_package_name(&mut self, restricted_package_name: &'a str) -> &mut Self {
        self.restricted_package_name = Some(restricted_package_name);
        self
    }

    /// When set, the server validates the message without delivering it.
    pub fn dry_run(&mut self, dry_run: bool) -> &mut Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Custom key-value payload, anything Serde can turn into JSON.
    ///
    /// # Examples:
    /// ```rust
    /// use fcm_legacy::MessageBuilder;
    /// use std::collections::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert("message", "Howdy!");
    ///
    /// let mut builder = MessageBuilder::new("<registration token>");
    /// builder.data(&map).unwrap();
    /// let message = builder.finalize();
    /// ```
    pub fn data(
        &mut self,
        data: &dyn erased_serde::Serialize,
    ) -> Result<&mut Self, serde_json::Error> {
        self.data = Some(serde_json::to_value(data)?);
        Ok(self)
    }

    /// Attaches a [`Notification`] for the client to display.
    pub fn notification(&mut self, notification: Notification<'a>) -> &mut Self {
        self.notification = Some(notification);
        self
    }

    /// Complete the build and get a `Message` instance.
    pub fn finalize(self) -> Message<'a> {
        Message {
            collapse_key: self.collapse_key,
            content_available: self.content_available,
            data: self.data,
            delay_while_idle: self.delay_while_idle,
            dry_run: self.dry_run,
            notification: self.notification,
            priority: self.priority,
            registration_ids: self.registration_ids,
            restricted_package_name: self.restricted_package_name,
            time_to_live: self.time_to_live,
            to: self.to,
        }
    }
}
