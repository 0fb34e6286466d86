// Rust guideline compliant 2026-02-09

//! Emit functions: verdict in, JSON response out.

use crate::error::Result;
use crate::sink::ResponseSink;
use serde_json::Value;
use verdict_core::{Messages, Verdict};

/// MIME type every emitted response carries.
const CONTENT_TYPE_JSON: &str = "application/json";

/// Emits the verdict as a finished JSON response.
///
/// Sets the JSON content type, mirrors the verdict's status code (with its
/// lazy correction applied and persisted) onto the response, writes the
/// envelope, and finishes the response.
///
/// # Errors
///
/// Returns an error if envelope encoding fails or the sink rejects an
/// operation.
pub fn emit_json<S: ResponseSink>(sink: &mut S, verdict: &mut Verdict) -> Result<()> {
    sink.set_header("Content-Type", CONTENT_TYPE_JSON)?;
    sink.set_status(verdict.status_code())?;
    let body = serde_json::to_vec(&verdict.to_object())?;
    sink.write_body(&body)?;
    sink.finish()
}

/// Appends an error to the verdict, then emits it.
///
/// # Errors
///
/// Same failure modes as [`emit_json`].
pub fn emit_error<S: ResponseSink>(
    sink: &mut S,
    verdict: &mut Verdict,
    messages: impl Into<Messages>,
) -> Result<()> {
    verdict.add_error(messages, ());
    emit_json(sink, verdict)
}

/// Appends a success payload and messages to the verdict, then emits it.
///
/// # Errors
///
/// Same failure modes as [`emit_json`].
pub fn emit_success<S: ResponseSink>(
    sink: &mut S,
    verdict: &mut Verdict,
    data: impl Into<Value>,
    messages: impl Into<Messages>,
) -> Result<()> {
    verdict.add_success(data, messages, ());
    emit_json(sink, verdict)
}
