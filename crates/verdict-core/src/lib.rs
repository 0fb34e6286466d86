// Rust guideline compliant 2026-02-06

//! Verdict Core Library
//!
//! This crate provides the common return object used to standardize
//! success/error results of function and API calls:
//! - Data model (Verdict, Status, message/code adapters)
//! - State transition rules (error/success entry events)
//! - Serialization contract (flat envelope object)
//!
//! "Error" here is a first-class domain state, not a fault: the object
//! itself never fails, and callers decide what counts as an error by calling
//! the corresponding append operation.

pub mod encode;
pub mod models;
pub mod transitions;

pub use models::{Codes, Messages, Status, Verdict};
