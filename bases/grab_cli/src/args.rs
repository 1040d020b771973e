// bases/grab_cli/src/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Download the audio track of a video URL and save it as MP3
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the video to fetch audio from
    pub url: String,

    /// Directory to store the downloaded file (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base name for the downloaded file, without extension
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Path to the ffmpeg executable when it is not on PATH
    #[arg(long)]
    pub ffmpeg_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
