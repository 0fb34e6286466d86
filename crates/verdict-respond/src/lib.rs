// Rust guideline compliant 2026-02-09

//! Verdict Response Emission
//!
//! This crate provides the glue between a [`verdict_core::Verdict`] and an
//! HTTP-ish response: a sink trait standing in for the concrete response
//! object of whatever framework embeds it, a buffered in-memory sink, and
//! the emit functions that write the JSON envelope through the sink.

pub mod emit;
pub mod error;
pub mod sink;

pub use emit::{emit_error, emit_json, emit_success};
pub use error::{Error, Result};
pub use sink::{BufferedResponse, ResponseSink};
