// Rust guideline compliant 2026-02-06

//! State transition rules for Verdict.
//!
//! A verdict switches sides through the append operations, never directly.
//! Each switch fires an entry event that clears the *opposite* side:
//!
//! - entering error clears success messages, success codes, and the payload,
//!   and pins status code 400
//! - entering success clears error messages, error codes, and the payload,
//!   and pins status code 200
//!
//! The entry event fires on every call, including re-entrant ones, so adding
//! an error while already in error state keeps the accumulated error
//! messages (only the success side is cleared) but still resets the status
//! code and payload.

use crate::models::{non_null, Codes, Messages, Status, ERROR_STATUS_CODE, SUCCESS_STATUS_CODE};
use crate::Verdict;
use serde_json::Value;

impl Verdict {
    /// Entry event for the error state.
    fn enter_error(&mut self) {
        self.success_messages.clear();
        self.success_codes.clear();
        self.data = None;
        self.status = Status::Error;
        self.status_code = ERROR_STATUS_CODE;
    }

    /// Entry event for the success state.
    fn enter_success(&mut self) {
        self.error_messages.clear();
        self.error_codes.clear();
        self.data = None;
        self.status = Status::Success;
        self.status_code = SUCCESS_STATUS_CODE;
    }

    /// Switches to error state and appends error messages and codes.
    ///
    /// Fires the error entry event first (clearing the success side, the
    /// payload, and pinning status code 400), then appends. Previously
    /// accumulated error messages and codes are kept.
    ///
    /// After the call `is_error()` is guaranteed.
    ///
    /// # Arguments
    ///
    /// * `messages` - a single message, a list, or `()` for none
    /// * `codes` - a single code, a list, or `()` for none
    pub fn add_error(&mut self, messages: impl Into<Messages>, codes: impl Into<Codes>) -> &mut Self {
        self.enter_error();
        self.error_messages.extend(messages.into().into_vec());
        self.error_codes.extend(codes.into().into_vec());
        self
    }

    /// Switches to success state, optionally storing a payload, and appends
    /// success messages and codes.
    ///
    /// Fires the success entry event first (clearing the error side, the
    /// payload, and pinning status code 200). A non-null `data` value then
    /// replaces the just-cleared payload; JSON `null` leaves it cleared.
    /// Previously accumulated success messages and codes are kept.
    ///
    /// After the call `is_success()` is guaranteed.
    ///
    /// # Arguments
    ///
    /// * `data` - the payload, or `()` for none
    /// * `messages` - a single message, a list, or `()` for none
    /// * `codes` - a single code, a list, or `()` for none
    pub fn add_success(
        &mut self,
        data: impl Into<Value>,
        messages: impl Into<Messages>,
        codes: impl Into<Codes>,
    ) -> &mut Self {
        self.enter_success();
        if let Some(value) = non_null(data.into()) {
            self.data = Some(value);
        }
        self.success_messages.extend(messages.into().into_vec());
        self.success_codes.extend(codes.into().into_vec());
        self
    }

    /// Appends messages and codes to the currently active side.
    ///
    /// Routes to [`add_success`](Self::add_success) with the current payload
    /// when in success state, to [`add_error`](Self::add_error) otherwise.
    /// This means the full entry event of the chosen branch fires again,
    /// opposite-side clearing and status-code reset included; it is not a
    /// side-effect-free append. Callers that have overridden the status code
    /// will see it reset to the branch default.
    pub fn add_message(
        &mut self,
        messages: impl Into<Messages>,
        codes: impl Into<Codes>,
    ) -> &mut Self {
        if self.is_success() {
            let data = self.data.take().unwrap_or(Value::Null);
            self.add_success(data, messages, codes)
        } else {
            self.add_error(messages, codes)
        }
    }
}
