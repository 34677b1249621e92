use std::fmt;

use crate::error::FcmError;

#[cfg(test)]
mod tests;

/// A validated FCM topic name.
///
/// The server only accepts names built from `[a-zA-Z0-9-_.~%]`; validation
/// happens once at construction so a `Topic` held by the caller is always
/// addressable. Use [`Topic::path`] for the `to` field of a send request.
///
/// # Examples:
/// ```rust
/// use fcm_legacy::Topic;
///
/// let topic = Topic::new("news-en_US")?;
/// assert_eq!(topic.path(), "/topics/news-en_US");
/// # Ok::<(), fcm_legacy::FcmError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic {
    name: String,
}

impl Topic {
    /// Checks `name` against the accepted character set and wraps it.
    pub fn new<T: Into<String>>(name: T) -> Result<Topic, FcmError> {
        let name = name.into();

        if name.is_empty() || !name.bytes().all(is_topic_byte) {
            return Err(FcmError::InvalidTopicName(name));
        }

        Ok(Topic { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `/topics/<name>` form that addresses this topic in a send request.
    pub fn path(&self) -> String {
        format!("/topics/{}", self.name)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' in topics", self.name)
    }
}

// Multi-byte characters never pass: none of their bytes are in the class.
fn is_topic_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b'%')
}
