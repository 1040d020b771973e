// bases/grab_cli/src/output.rs
use audio_downloader::{CommandSpec, DownloadError, OutcomeReport, CONVERTER_BIN, DOWNLOADER_BIN};

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_download_start(&self, url: &str) {
        println!("Starting download from: {}", url);
    }

    pub fn print_command(&self, spec: &CommandSpec) {
        println!("Executing: {}", spec);
    }

    pub fn print_report(&self, report: &OutcomeReport) {
        // Replay whatever the downloader printed, on the matching streams.
        if let Some(execution) = &report.execution {
            if !execution.stdout.is_empty() {
                print!("{}", execution.stdout);
            }
            if !execution.stderr.is_empty() {
                eprint!("{}", execution.stderr);
            }
        }

        if report.success {
            match &report.resolved_path {
                Some(path) => println!("Download complete: {}", path.display()),
                None => println!("{}", report.message),
            }
        } else {
            eprintln!("Error: {}", report.message);
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if let Some(DownloadError::ToolNotFound(tool)) = error.downcast_ref::<DownloadError>() {
            self.print_install_hint(tool);
        }

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }

    fn print_install_hint(&self, tool: &str) {
        match tool {
            DOWNLOADER_BIN => {
                eprintln!("Install it with: pip install yt-dlp");
                eprintln!("Or visit: https://github.com/yt-dlp/yt-dlp#installation");
            }
            CONVERTER_BIN => {
                eprintln!("Please install ffmpeg:");
                match std::env::consts::OS {
                    "windows" => {
                        eprintln!("- Windows: download from https://ffmpeg.org/download.html");
                        eprintln!("  After installation, add it to PATH or use --ffmpeg-path");
                    }
                    "macos" => eprintln!("- macOS: use 'brew install ffmpeg'"),
                    _ => eprintln!(
                        "- Linux: use 'apt install ffmpeg' or the equivalent for your distribution"
                    ),
                }
                eprintln!("Alternatively, pass --ffmpeg-path /path/to/ffmpeg");
            }
            _ => {}
        }
    }
}
