//! Delivery sinks for the CLI.

use std::io::{self, Write};
use std::thread;
#[cfg(target_os = "linux")]
use std::time::Instant;
use std::time::Duration;

use sig_config::DeliveryTarget;
use sig_core::{DeliveryError, DeliverySink};

const CLIPBOARD: &str = "clipboard";

/// How long the worker keeps serving the clipboard selection on Linux.
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// Writes to the system clipboard on one dedicated thread per snippet.
///
/// The worker is always joined before `deliver` returns. On X11 and Wayland
/// the selection lives only as long as its owner, so the worker holds it until
/// a clipboard manager takes it over or `hold` elapses. Without a clipboard
/// manager the snippet can be pasted only within that window.
#[derive(Debug)]
pub struct ClipboardSink {
    hold: Duration,
}

impl ClipboardSink {
    #[must_use]
    pub const fn with_hold(hold: Duration) -> Self {
        Self { hold }
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::with_hold(CLIPBOARD_HOLD)
    }
}

impl DeliverySink for ClipboardSink {
    fn name(&self) -> &'static str {
        CLIPBOARD
    }

    fn deliver(&mut self, text: &str) -> Result<(), DeliveryError> {
        let text = text.to_owned();
        let hold = self.hold;
        let worker = thread::Builder::new()
            .name("sig2moq-clipboard".to_string())
            .spawn(move || write_clipboard(&text, hold))?;

        worker.join().map_err(|_| DeliveryError::WorkerPanicked {
            target: CLIPBOARD.to_string(),
        })?
    }
}

fn write_clipboard(text: &str, hold: Duration) -> Result<(), DeliveryError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|error| DeliveryError::Unavailable {
            target: CLIPBOARD.to_string(),
            reason: error.to_string(),
        })?;
    set_text(&mut clipboard, text, hold).map_err(|error| DeliveryError::WriteFailed {
        target: CLIPBOARD.to_string(),
        reason: error.to_string(),
    })
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Duration,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    tracing::debug!(hold_ms = hold.as_millis(), "holding clipboard selection");
    clipboard
        .set()
        .wait_until(Instant::now() + hold)
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: Duration,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Writes the snippet, newline-terminated, to stdout or any writer.
#[derive(Debug)]
pub struct StdoutSink<W = io::Stdout> {
    out: W,
}

impl StdoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    #[cfg(test)]
    pub const fn with_writer(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DeliverySink for StdoutSink<W> {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn deliver(&mut self, text: &str) -> Result<(), DeliveryError> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// `--stdout` wins over the configured target.
#[must_use]
pub const fn effective_target(configured: DeliveryTarget, force_stdout: bool) -> DeliveryTarget {
    if force_stdout {
        DeliveryTarget::Stdout
    } else {
        configured
    }
}

pub fn sink_for(target: DeliveryTarget) -> Box<dyn DeliverySink> {
    match target {
        DeliveryTarget::Clipboard => Box::new(ClipboardSink::default()),
        DeliveryTarget::Stdout => Box::new(StdoutSink::new()),
    }
}
