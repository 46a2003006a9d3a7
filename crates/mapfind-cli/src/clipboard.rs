//! System clipboard access through the platform's command-line tools.

use std::io;
use std::process::Stdio;
use std::time::{Duration, Instant};

use mapfind_core::LookupError;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Tried in order; the first one that exists and exits successfully wins.
const TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("pbcopy", &[]),
    ("clip.exe", &[]),
];

/// How long a copy acknowledgment stays visible.
pub(crate) const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Writes `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`LookupError::ClipboardFailed`] if no tool is installed or every
/// installed tool failed.
pub(crate) async fn copy_to_clipboard(text: &str) -> Result<(), LookupError> {
    copy_with(TOOLS, text).await
}

async fn copy_with(tools: &[(&str, &[&str])], text: &str) -> Result<(), LookupError> {
    let mut last_failure = None;
    for (program, args) in tools {
        match pipe_to(program, args, text).await {
            Ok(()) => {
                tracing::debug!(program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard tool failed");
                last_failure = Some(format!("{program}: {e}"));
            }
        }
    }

    let reason = last_failure.unwrap_or_else(|| {
        let names: Vec<&str> = tools.iter().map(|(program, _)| *program).collect();
        format!("no clipboard tool found (tried {})", names.join(", "))
    });
    tracing::warn!(%reason, "clipboard write failed");
    Err(LookupError::ClipboardFailed(reason))
}

async fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Dropping stdin closes the pipe so the tool sees end of input.
    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(text.as_bytes()).await {
            // The exit status below says whether the tool actually failed.
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Err(e) => return Err(e),
        }
    }

    let status = child.wait().await?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("exited with {status}")))
    }
}

/// Transient acknowledgment of a copy attempt.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CopyNotice {
    copied: bool,
    shown_at: Instant,
}

impl CopyNotice {
    pub(crate) fn new(result: &Result<(), LookupError>, shown_at: Instant) -> Self {
        Self {
            copied: result.is_ok(),
            shown_at,
        }
    }

    pub(crate) fn message(self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Failed to copy."
        }
    }

    /// The message while still fresh at `now`, otherwise `None`.
    pub(crate) fn message_at(self, now: Instant) -> Option<&'static str> {
        (now.saturating_duration_since(self.shown_at) < NOTICE_TTL).then(|| self.message())
    }
}
