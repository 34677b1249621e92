use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FcmError;


const ERROR: &str = "error";
const FAILED_REGISTRATION_IDS: &str = "failed_registration_ids";
const FAILURE: &str = "failure";
const MESSAGE_ID: &str = "message_id";
const SUCCESS: &str = "success";

/// The outcome of one message for one target.
///
/// Which fields are set depends on the send mode: a succeeded topic send
/// carries `message_id`, a failed send carries `error`, and device group
/// failures additionally name the `token` they refer to. Succeeded device
/// group sends are empty markers.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageResult {
    pub message_id: Option<String>,
    pub token: Option<String>,
    pub error: Option<String>,
}

/// The normalized outcome of a send request.
///
/// The legacy HTTP API answers with a different payload per send mode;
/// deserializing through this type folds all of them into one shape. The
/// counts come from the server: on device group responses `failed` is the
/// reported total, which the server does not guarantee to match the number
/// of listed registration ids.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Response {
    pub succeeded: u64,
    pub failed: u64,
    pub results: Vec<MessageResult>,
}

impl Response {
    /// Parses a raw response body.
    pub fn from_str<T: AsRef<str>>(body: T) -> Result<Response, FcmError> {
        Ok(serde_json::from_str(body.as_ref())?)
    }

    /// Normalizes an already-parsed JSON tree.
    pub fn from_value(value: Value) -> Result<Response, FcmError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Which of the legacy API's response payloads an object is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// `{"message_id": ...}` or `{"error": ...}`, answering a topic send.
    Topic,
    /// Carries `failed_registration_ids`, or exactly the two keys
    /// `failure` and `success`, answering a device group send.
    DeviceGroup,
    /// Anything else; the multicast payload describes itself with top-level
    /// counts and a `results` array.
    Multicast,
}

impl ResponseKind {
    /// Classifies a response object by its keys. The topic check runs
    /// first: a payload carrying both `message_id` and
    /// `failed_registration_ids` is a topic response.
    pub fn of(root: &Map<String, Value>) -> ResponseKind {
        if root.contains_key(MESSAGE_ID) || root.contains_key(ERROR) {
            ResponseKind::Topic
        } else if root.contains_key(FAILED_REGISTRATION_IDS)
            || (root.len() == 2 && root.contains_key(FAILURE) && root.contains_key(SUCCESS))
        {
            ResponseKind::DeviceGroup
        } else {
            ResponseKind::Multicast
        }
    }
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D>(deserializer: D) -> Result<Response, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root = Map::<String, Value>::deserialize(deserializer)?;

        match ResponseKind::of(&root) {
            ResponseKind::Topic => topic_response(&root),
            ResponseKind::DeviceGroup => device_group_response(&root),
            ResponseKind::Multicast => multicast_response(root),
        }
    }
}

fn topic_response<E: de::Error>(root: &Map<String, Value>) -> Result<Response, E> {
    if let Some(error) = root.get(ERROR) {
        let error = scalar_string(error).ok_or_else(|| scalar_expected(ERROR))?;

        return Ok(Response {
            succeeded: 0,
            failed: 1,
            results: vec![MessageResult {
                error: Some(error),
                ..MessageResult::default()
            }],
        });
    }

    let message_id = root
        .get(MESSAGE_ID)
        .and_then(scalar_string)
        .ok_or_else(|| scalar_expected(MESSAGE_ID))?;

    Ok(Response {
        succeeded: 1,
        failed: 0,
        results: vec![MessageResult {
            message_id: Some(message_id),
            ..MessageResult::default()
        }],
    })
}

fn device_group_response<E: de::Error>(root: &Map<String, Value>) -> Result<Response, E> {
    let succeeded = count(root, SUCCESS)?;
    let failed = count(root, FAILURE)?;

    // Succeeded device group sends report no per-message ids, only a count.
    let mut results = vec![MessageResult::default(); succeeded as usize];

    if let Some(failed_ids) = root.get(FAILED_REGISTRATION_IDS) {
        let failed_ids = failed_ids
            .as_array()
            .ok_or_else(|| E::custom("`failed_registration_ids` is not an array"))?;

        for id in failed_ids {
            let token = scalar_string(id)
                .ok_or_else(|| E::custom("`failed_registration_ids` contains a non-scalar entry"))?;

            results.push(MessageResult {
                token: Some(token),
                error: Some(FAILURE.to_string()),
                ..MessageResult::default()
            });
        }

        // The server owns the count; keep it even when it disagrees with
        // the id list.
        if failed != failed_ids.len() as u64 {
            log::warn!(
                "device group response reports {} failed messages but lists {} registration ids",
                failed,
                failed_ids.len()
            );
        }
    }

    Ok(Response {
        succeeded,
        failed,
        results,
    })
}

fn multicast_response<E: de::Error>(root: Map<String, Value>) -> Result<Response, E> {
    #[derive(Deserialize, Default)]
    struct MulticastBody {
        #[serde(default)]
        success: u64,
        #[serde(default)]
        failure: u64,
        #[serde(default)]
        results: Vec<MessageResult>,
    }

    let body: MulticastBody = serde_json::from_value(Value::Object(root)).map_err(E::custom)?;

    Ok(Response {
        succeeded: body.success,
        failed: body.failure,
        results: body.results,
    })
}

fn count<E: de::Error>(root: &Map<String, Value>, key: &str) -> Result<u64, E> {
    root.get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| E::custom(format!("`{}` is not a non-negative integer", key)))
}

// The server quotes ids inconsistently; take any scalar in its string form.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_expected<E: de::Error>(key: &str) -> E {
    E::custom(format!("`{}` is not a scalar value", key))
}
