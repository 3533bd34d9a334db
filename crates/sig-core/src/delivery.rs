//! The delivery capability generated snippets are written to.
//!
//! The engine never reaches for a global resource. Callers hand it a
//! `DeliverySink`; the CLI provides clipboard and stdout sinks, tests use
//! [`MemorySink`].

use thiserror::Error;

/// Failure to hand a finished snippet to its destination.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The destination resource could not be opened (no display, SSH session).
    #[error("{target} is not available: {reason}")]
    Unavailable { target: String, reason: String },

    /// The resource was opened but the write failed.
    #[error("failed to write to {target}: {reason}")]
    WriteFailed { target: String, reason: String },

    /// The dedicated worker delivering the text panicked before finishing.
    #[error("{target} worker terminated before the write completed")]
    WorkerPanicked { target: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A destination that accepts exactly one finished snippet per call.
///
/// Implementations must either complete the write or return an error before
/// returning; no fire-and-forget.
pub trait DeliverySink {
    /// Short name used in logs and messages (e.g. `"clipboard"`).
    fn name(&self) -> &'static str;

    /// Deliver `text`.
    ///
    /// # Errors
    /// Returns `DeliveryError` if the destination is unavailable or the write fails.
    fn deliver(&mut self, text: &str) -> Result<(), DeliveryError>;
}

impl<T: DeliverySink + ?Sized> DeliverySink for &mut T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn deliver(&mut self, text: &str) -> Result<(), DeliveryError> {
        (**self).deliver(text)
    }
}

/// Sink that keeps every delivered snippet in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    delivered: Vec<String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delivered(&self) -> &[String] {
        &self.delivered
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.delivered.last().map(String::as_str)
    }
}

impl DeliverySink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn deliver(&mut self, text: &str) -> Result<(), DeliveryError> {
        self.delivered.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.deliver("first").unwrap();
        sink.deliver("second").unwrap();
        assert_eq!(sink.delivered(), ["first", "second"]);
        assert_eq!(sink.last(), Some("second"));
    }

    #[test]
    fn mutable_reference_forwards_to_sink() {
        let mut sink = MemorySink::new();
        {
            let mut borrowed = &mut sink;
            assert_eq!(borrowed.name(), "memory");
            borrowed.deliver("via ref").unwrap();
        }
        assert_eq!(sink.last(), Some("via ref"));
    }

    #[test]
    fn delivery_errors_name_the_target() {
        let err = DeliveryError::Unavailable {
            target: "clipboard".into(),
            reason: "no display".into(),
        };
        assert_eq!(err.to_string(), "clipboard is not available: no display");
    }
}
