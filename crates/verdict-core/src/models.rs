// Rust guideline compliant 2026-02-06

//! Core data model for Verdict.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Status code a verdict starts with, and re-enters success with.
pub(crate) const SUCCESS_STATUS_CODE: u16 = 200;

/// Status code applied when a verdict enters the error state.
pub(crate) const ERROR_STATUS_CODE: u16 = 400;

/// Status of a Verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The call succeeded.
    #[default]
    Success,
    /// The call failed in a domain sense.
    Error,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Success => "success",
            Status::Error => "error",
        })
    }
}

/// Zero or more human-readable messages.
///
/// Exists so the append operations accept a single message, a list of
/// messages, or none at all (`()`), without separate method variants.
#[derive(Debug, Clone, Default)]
pub struct Messages(Vec<String>);

impl Messages {
    pub(crate) fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<()> for Messages {
    fn from(_: ()) -> Self {
        Self(Vec::new())
    }
}

impl From<&str> for Messages {
    fn from(message: &str) -> Self {
        Self(vec![message.to_string()])
    }
}

impl From<String> for Messages {
    fn from(message: String) -> Self {
        Self(vec![message])
    }
}

impl From<Vec<String>> for Messages {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl From<Vec<&str>> for Messages {
    fn from(messages: Vec<&str>) -> Self {
        Self(messages.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Messages {
    fn from(messages: &[&str]) -> Self {
        Self(messages.iter().map(|m| m.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Messages {
    fn from(messages: [&str; N]) -> Self {
        Self(messages.iter().map(|m| m.to_string()).collect())
    }
}

/// Zero or more numeric codes.
///
/// Mirrors [`Messages`] for the integer-code side of the envelope.
#[derive(Debug, Clone, Default)]
pub struct Codes(Vec<i64>);

impl Codes {
    pub(crate) fn into_vec(self) -> Vec<i64> {
        self.0
    }
}

impl From<()> for Codes {
    fn from(_: ()) -> Self {
        Self(Vec::new())
    }
}

impl From<i64> for Codes {
    fn from(code: i64) -> Self {
        Self(vec![code])
    }
}

impl From<Vec<i64>> for Codes {
    fn from(codes: Vec<i64>) -> Self {
        Self(codes)
    }
}

impl From<&[i64]> for Codes {
    fn from(codes: &[i64]) -> Self {
        Self(codes.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for Codes {
    fn from(codes: [i64; N]) -> Self {
        Self(codes.to_vec())
    }
}

/// A common return object for function and API calls.
///
/// A Verdict is either in success or error state, carries an HTTP-like
/// status code, ordered message and code lists for both sides, an optional
/// JSON payload, and an open-ended key/value map that is independent of the
/// state. All mutators return `&mut Self` for call chaining.
///
/// The state is switched by the append operations themselves: adding an
/// error clears everything success-related, adding a success clears
/// everything error-related. See the transition methods for the exact rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub(crate) status: Status,
    pub(crate) status_code: u16,
    pub(crate) error_messages: Vec<String>,
    pub(crate) error_codes: Vec<i64>,
    pub(crate) success_messages: Vec<String>,
    pub(crate) success_codes: Vec<i64>,
    pub(crate) data: Option<Value>,
    pub(crate) extra: HashMap<String, Value>,
}

impl Default for Verdict {
    fn default() -> Self {
        Self::new()
    }
}

impl Verdict {
    /// Creates a fresh verdict: success state, status code 200, no
    /// messages, no payload, empty extra map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: Status::Success,
            status_code: SUCCESS_STATUS_CODE,
            error_messages: Vec::new(),
            error_codes: Vec::new(),
            success_messages: Vec::new(),
            success_codes: Vec::new(),
            data: None,
            extra: HashMap::new(),
        }
    }

    /// Returns true if the verdict is in error state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Returns true if the verdict is in success state.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the messages of the currently active side: success messages
    /// in success state, error messages in error state.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        if self.is_success() {
            &self.success_messages
        } else {
            &self.error_messages
        }
    }

    /// Returns the accumulated success messages, regardless of state.
    #[must_use]
    pub fn success_messages(&self) -> &[String] {
        &self.success_messages
    }

    /// Returns the accumulated error messages, regardless of state.
    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// Returns the accumulated success codes.
    #[must_use]
    pub fn success_codes(&self) -> &[i64] {
        &self.success_codes
    }

    /// Returns the accumulated error codes.
    #[must_use]
    pub fn error_codes(&self) -> &[i64] {
        &self.error_codes
    }

    /// Returns the current payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Replaces the payload directly, without touching status or messages.
    ///
    /// A JSON `null` payload clears the slot, the same way an absent payload
    /// does in [`add_success`](Self::add_success).
    pub fn add_data(&mut self, data: impl Into<Value>) -> &mut Self {
        self.data = non_null(data.into());
        self
    }

    /// Clears the payload.
    pub fn clear_data(&mut self) -> &mut Self {
        self.data = None;
        self
    }

    /// Empties all four message and code lists.
    ///
    /// Status, status code, and payload are left untouched. Idempotent.
    pub fn clear_messages(&mut self) -> &mut Self {
        self.error_messages.clear();
        self.error_codes.clear();
        self.success_messages.clear();
        self.success_codes.clear();
        self
    }

    /// Overrides the status code unconditionally.
    pub fn set_status_code(&mut self, code: u16) -> &mut Self {
        self.status_code = code;
        self
    }

    /// Returns the status code.
    ///
    /// Compatibility shim: when the stored code is still the 200 default
    /// while the verdict is in error state, 400 is returned and persisted
    /// instead. This covers callers that override the code before the error
    /// is added; overrides applied after the error stand as-is. Persistence
    /// is why this getter takes `&mut self`.
    pub fn status_code(&mut self) -> u16 {
        self.status_code = self.effective_status_code();
        self.status_code
    }

    /// Status code with the 200-while-error correction applied, without
    /// persisting it. Used by serialization so it can stay borrowed.
    pub(crate) fn effective_status_code(&self) -> u16 {
        if self.status_code == SUCCESS_STATUS_CODE && self.is_error() {
            ERROR_STATUS_CODE
        } else {
            self.status_code
        }
    }

    /// Returns the whole extra key/value map.
    #[must_use]
    pub fn extra(&self) -> &HashMap<String, Value> {
        &self.extra
    }

    /// Returns a single extra entry, or None if the key is absent.
    #[must_use]
    pub fn extra_value(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Upserts one extra entry. Extra entries survive state transitions.
    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Maps JSON `null` to an absent payload.
pub(crate) fn non_null(value: Value) -> Option<Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}
