// components/audio_downloader/src/types.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Required dependency not found: {0}")]
    ToolNotFound(&'static str),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to create output directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Everything needed to fetch the audio of one URL.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    pub output_dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub ffmpeg_path: Option<PathBuf>,
}

impl DownloadRequest {
    /// Validate and wrap a source URL. The URL must parse; everything else
    /// starts unset.
    pub fn new(url: impl Into<String>) -> Result<Self, DownloadError> {
        let url = url.into();
        Url::parse(&url).map_err(|e| DownloadError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            url,
            output_dir: None,
            filename: None,
            ffmpeg_path: None,
        })
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Custom base name for the downloaded file, without extension.
    pub fn with_filename(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(name.into());
        self
    }

    pub fn with_ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg_path = Some(path.into());
        self
    }
}

/// A program plus its flat argument vector. Handed to the process spawner
/// as-is, never joined into a shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for CommandSpec {
    /// Space-joined rendering for console echo only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured output of one finished child process.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// None when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Final verdict of one download run.
#[derive(Debug, Clone)]
pub struct OutcomeReport {
    pub success: bool,
    /// Present only when the downloader reported where the file landed.
    pub resolved_path: Option<PathBuf>,
    pub message: String,
    /// Captured process output, absent when the process never spawned.
    pub execution: Option<ExecutionResult>,
}

#[async_trait::async_trait]
pub trait Downloader {
    /// Check that the download tool can be invoked at all.
    async fn check_downloader(&self) -> Result<(), DownloadError>;

    /// Check that the conversion tool can be invoked at all.
    async fn check_converter(&self) -> Result<(), DownloadError>;

    /// Execute one download command to completion and interpret its output.
    /// All failures are folded into the report, never raised.
    async fn run(&self, spec: &CommandSpec) -> OutcomeReport;
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn request_rejects_garbage_url() {
        let result = DownloadRequest::new("not a url");
        assert_matches!(result, Err(DownloadError::InvalidUrl(_)));
    }

    #[test]
    fn request_rejects_empty_url() {
        let result = DownloadRequest::new("");
        assert_matches!(result, Err(DownloadError::InvalidUrl(_)));
    }

    #[test]
    fn request_builders_set_fields() {
        let request = DownloadRequest::new("https://example.com/watch?v=abc")
            .unwrap()
            .with_output_dir("/tmp/music")
            .with_filename("song")
            .with_ffmpeg_path("/opt/ffmpeg/bin/ffmpeg");

        assert_eq!(request.url, "https://example.com/watch?v=abc");
        assert_eq!(request.output_dir.as_deref(), Some(std::path::Path::new("/tmp/music")));
        assert_eq!(request.filename.as_deref(), Some("song"));
        assert_eq!(
            request.ffmpeg_path.as_deref(),
            Some(std::path::Path::new("/opt/ffmpeg/bin/ffmpeg"))
        );
    }

    #[test]
    fn command_spec_display_joins_with_spaces() {
        let spec = CommandSpec::new(
            "yt-dlp",
            vec!["--extract-audio".to_string(), "https://example.com/v".to_string()],
        );
        assert_eq!(spec.to_string(), "yt-dlp --extract-audio https://example.com/v");
    }
}
