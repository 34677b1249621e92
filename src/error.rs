use std::error::Error;
use std::fmt;

/// What went wrong while building a request or reading a server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FcmError {
    /// The candidate topic name contains characters outside of
    /// `[a-zA-Z0-9-_.~%]`, or is empty. Carries the rejected name.
    InvalidTopicName(String),

    /// The response body does not match any payload the legacy HTTP API
    /// documents, or a recognized payload is missing a required field.
    MalformedResponse(String),
}

impl fmt::Display for FcmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FcmError::InvalidTopicName(name) => write!(f, "invalid topic name '{}'", name),
            FcmError::MalformedResponse(reason) => {
                write!(f, "malformed fcm response: {}", reason)
            }
        }
    }
}

impl Error for FcmError {}

impl From<serde_json::Error> for FcmError {
    fn from(err: serde_json::Error) -> Self {
        FcmError::MalformedResponse(err.to_string())
    }
}
