// Rust guideline compliant 2026-02-09

//! Response sink abstraction.
//!
//! The emit functions do not know any particular HTTP framework. They write
//! through [`ResponseSink`], which an embedding application implements on
//! top of its real response object. [`BufferedResponse`] is the in-memory
//! implementation used in tests and in embedders that assemble the response
//! themselves.

use crate::error::{Error, Result};

/// Abstract response collaborator the envelope is emitted through.
///
/// Implementations must treat [`finish`](Self::finish) as terminal: once a
/// response is finished, no further header, status, or body operation may
/// be accepted.
pub trait ResponseSink {
    /// Sets a response header.
    fn set_header(&mut self, name: &str, value: &str) -> Result<()>;

    /// Sets the response status code.
    fn set_status(&mut self, code: u16) -> Result<()>;

    /// Appends bytes to the response body.
    fn write_body(&mut self, bytes: &[u8]) -> Result<()>;

    /// Marks the response complete.
    fn finish(&mut self) -> Result<()>;
}

/// In-memory response sink capturing everything emitted.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    headers: Vec<(String, String)>,
    status: Option<u16>,
    body: Vec<u8>,
    finished: bool,
}

impl BufferedResponse {
    /// Creates an empty, unfinished response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the last value set for a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the captured status code, if one was set.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the captured body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns true once the response has been finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finished {
            return Err(Error::Sink("response already finished".to_string()));
        }
        Ok(())
    }
}

impl ResponseSink for BufferedResponse {
    fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        self.ensure_open()?;
        self.headers.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_status(&mut self, code: u16) -> Result<()> {
        self.ensure_open()?;
        self.status = Some(code);
        Ok(())
    }

    fn write_body(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_open()?;
        self.body.extend_from_slice(bytes);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.finished = true;
        Ok(())
    }
}
