//! Error types
//!
//! The extractor itself has no error channel: unrecognized input is skipped,
//! not reported. Only the renderers, which write into arbitrary `io::Write`
//! sinks, can fail.

use thiserror::Error;

/// Failure while writing rendered output to a sink.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write rendered output")]
    Io(#[from] std::io::Error),
}
