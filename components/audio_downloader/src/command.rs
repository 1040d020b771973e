// components/audio_downloader/src/command.rs
use std::path::PathBuf;

use crate::types::{CommandSpec, DownloadError, DownloadRequest};
use crate::ytdlp::DOWNLOADER_BIN;

/// Target format for the extracted audio stream.
pub const AUDIO_FORMAT: &str = "mp3";

/// Build the yt-dlp invocation for one request.
///
/// Ensures the output directory exists (creating parents as needed) before
/// returning; the returned argument vector always ends with the source URL.
pub fn build_command(request: &DownloadRequest) -> Result<CommandSpec, DownloadError> {
    let output_dir = resolve_output_dir(request)?;

    let mut args = vec![
        "--extract-audio".to_string(),
        "--audio-format".to_string(),
        AUDIO_FORMAT.to_string(),
    ];

    if let Some(ffmpeg) = &request.ffmpeg_path {
        args.push("--ffmpeg-location".to_string());
        args.push(ffmpeg.to_string_lossy().into_owned());
    }

    // Base name comes from the request, falling back to the remote title.
    // The extension is always left to the conversion step.
    let base = request.filename.as_deref().unwrap_or("%(title)s");
    let template = output_dir.join(format!("{base}.%(ext)s"));
    args.push("-o".to_string());
    args.push(template.to_string_lossy().into_owned());

    args.push(request.url.clone());

    Ok(CommandSpec::new(DOWNLOADER_BIN, args))
}

fn resolve_output_dir(request: &DownloadRequest) -> Result<PathBuf, DownloadError> {
    let output_dir = match &request.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    std::fs::create_dir_all(&output_dir).map_err(|source| DownloadError::DirectoryCreate {
        path: output_dir.clone(),
        source,
    })?;

    Ok(output_dir)
}
