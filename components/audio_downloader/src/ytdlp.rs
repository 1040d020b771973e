// components/audio_downloader/src/ytdlp.rs
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::types::{CommandSpec, DownloadError, Downloader, ExecutionResult, OutcomeReport};

pub const DOWNLOADER_BIN: &str = "yt-dlp";
pub const CONVERTER_BIN: &str = "ffmpeg";

/// Line prefix yt-dlp prints before the final audio file path.
///
/// This is an unversioned log format, so the scan lives in one place;
/// change the marker here if yt-dlp changes its output.
pub const DESTINATION_MARKER: &str = "[ExtractAudio] Destination:";

/// Probe a tool by invoking it with harmless arguments.
///
/// Available means the spawn itself succeeded; the probe's exit status is
/// irrelevant. A missing executable is the `false` case, not an error.
pub async fn check_tool_available(program: &str, probe_args: &[&str]) -> bool {
    Command::new(program)
        .args(probe_args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .is_ok()
}

/// Extract the destination path from captured downloader stdout.
pub fn parse_destination(stdout: &str) -> Option<PathBuf> {
    stdout.lines().find_map(|line| {
        line.split_once(DESTINATION_MARKER)
            .map(|(_, rest)| PathBuf::from(rest.trim()))
    })
}

pub struct YtDlp;

#[async_trait]
impl Downloader for YtDlp {
    async fn check_downloader(&self) -> Result<(), DownloadError> {
        if check_tool_available(DOWNLOADER_BIN, &["--version"]).await {
            Ok(())
        } else {
            Err(DownloadError::ToolNotFound(DOWNLOADER_BIN))
        }
    }

    async fn check_converter(&self) -> Result<(), DownloadError> {
        if check_tool_available(CONVERTER_BIN, &["-version"]).await {
            Ok(())
        } else {
            Err(DownloadError::ToolNotFound(CONVERTER_BIN))
        }
    }

    async fn run(&self, spec: &CommandSpec) -> OutcomeReport {
        tracing::debug!(command = %spec, "spawning downloader");

        let output = match Command::new(&spec.program).args(&spec.args).output().await {
            Ok(output) => output,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return OutcomeReport {
                    success: false,
                    resolved_path: None,
                    message: missing_tool_message(&spec.program),
                    execution: None,
                };
            }
            Err(error) => {
                return OutcomeReport {
                    success: false,
                    resolved_path: None,
                    message: format!("Failed to run {}: {error}", spec.program),
                    execution: None,
                };
            }
        };

        let result = ExecutionResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        interpret(result)
    }
}

/// Map one finished invocation to its report.
fn interpret(result: ExecutionResult) -> OutcomeReport {
    if !result.is_success() {
        let stderr = result.stderr.trim();
        let message = if stderr.is_empty() {
            format!("Download failed with exit status {}", describe_exit(&result))
        } else {
            format!("Download failed: {stderr}")
        };
        tracing::warn!(exit_code = ?result.exit_code, "downloader reported failure");
        return OutcomeReport {
            success: false,
            resolved_path: None,
            message,
            execution: Some(result),
        };
    }

    match parse_destination(&result.stdout) {
        Some(path) => OutcomeReport {
            success: true,
            message: format!("Downloaded to {}", path.display()),
            resolved_path: Some(path),
            execution: Some(result),
        },
        None => OutcomeReport {
            success: true,
            resolved_path: None,
            message: "Download completed, but the output file path could not be determined"
                .to_string(),
            execution: Some(result),
        },
    }
}

fn describe_exit(result: &ExecutionResult) -> String {
    match result.exit_code {
        Some(code) => code.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

fn missing_tool_message(program: &str) -> String {
    if program == DOWNLOADER_BIN {
        format!(
            "{program} is not installed. Install it with 'pip install yt-dlp' \
             or see https://github.com/yt-dlp/yt-dlp#installation"
        )
    } else {
        format!("{program} is not installed or not on PATH")
    }
}

#[cfg(test)]
pub mod stub {
    use super::*;

    /// Backend double with scriptable probe results and a canned report.
    pub struct DownloaderStub {
        pub downloader_available: bool,
        pub converter_available: bool,
    }

    impl Default for DownloaderStub {
        fn default() -> Self {
            Self {
                downloader_available: true,
                converter_available: true,
            }
        }
    }

    #[async_trait]
    impl Downloader for DownloaderStub {
        async fn check_downloader(&self) -> Result<(), DownloadError> {
            if self.downloader_available {
                Ok(())
            } else {
                Err(DownloadError::ToolNotFound(DOWNLOADER_BIN))
            }
        }

        async fn check_converter(&self) -> Result<(), DownloadError> {
            if self.converter_available {
                Ok(())
            } else {
                Err(DownloadError::ToolNotFound(CONVERTER_BIN))
            }
        }

        async fn run(&self, _spec: &CommandSpec) -> OutcomeReport {
            let execution = ExecutionResult {
                exit_code: Some(0),
                stdout: format!("{DESTINATION_MARKER} /tmp/test/song.mp3\n"),
                stderr: String::new(),
            };
            OutcomeReport {
                success: true,
                resolved_path: Some(PathBuf::from("/tmp/test/song.mp3")),
                message: "Downloaded to /tmp/test/song.mp3".to_string(),
                execution: Some(execution),
            }
        }
    }
}
