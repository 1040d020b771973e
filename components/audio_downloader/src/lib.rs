// components/audio_downloader/src/lib.rs
mod command;
mod types;
mod ytdlp;

use std::path::Path;
use std::sync::Arc;

pub use command::{build_command, AUDIO_FORMAT};
pub use types::{
    CommandSpec, DownloadError, DownloadRequest, Downloader, ExecutionResult, OutcomeReport,
};
pub use ytdlp::{
    check_tool_available, parse_destination, YtDlp, CONVERTER_BIN, DESTINATION_MARKER,
    DOWNLOADER_BIN,
};

pub struct AudioDownloader {
    backend: Arc<dyn Downloader + Send + Sync>,
}

impl AudioDownloader {
    /// Create an AudioDownloader backed by the yt-dlp command-line tool
    pub fn new() -> Self {
        Self::with_backend(Arc::new(YtDlp))
    }

    /// Create an AudioDownloader with a specific backend implementation
    pub fn with_backend(backend: Arc<dyn Downloader + Send + Sync>) -> Self {
        Self { backend }
    }

    /// Verify both external tools before any work is attempted.
    ///
    /// A missing downloader always fails. A converter override skips the
    /// converter probe; the given path is trusted unverified.
    pub async fn preflight(&self, converter_override: Option<&Path>) -> Result<(), DownloadError> {
        self.backend.check_downloader().await?;

        if converter_override.is_none() {
            self.backend.check_converter().await?;
        }

        Ok(())
    }

    /// Run one built command to completion, folding every failure into the
    /// returned report.
    pub async fn run(&self, spec: &CommandSpec) -> OutcomeReport {
        self.backend.run(spec).await
    }
}

impl Default for AudioDownloader {
    fn default() -> Self {
        Self::new()
    }
}
