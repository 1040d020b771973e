// bases/grab_cli/src/app.rs
use audio_downloader::{build_command, AudioDownloader, DownloadRequest, OutcomeReport};
use color_eyre::Result;

use crate::args::Args;
use crate::output::OutputHandler;

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        Self { args, output }
    }

    pub async fn run(&self) -> Result<OutcomeReport> {
        let downloader = AudioDownloader::new();

        // Both tools must be reachable before any work is attempted.
        downloader
            .preflight(self.args.ffmpeg_path.as_deref())
            .await?;

        let request = self.build_request()?;
        let spec = build_command(&request)?;

        self.output.print_download_start(&self.args.url);
        self.output.print_command(&spec);

        let report = downloader.run(&spec).await;

        self.output.print_report(&report);
        Ok(report)
    }

    fn build_request(&self) -> Result<DownloadRequest> {
        let mut request = DownloadRequest::new(self.args.url.as_str())?;

        if let Some(dir) = &self.args.output {
            request = request.with_output_dir(dir);
        }
        if let Some(name) = &self.args.filename {
            request = request.with_filename(name.as_str());
        }
        if let Some(path) = &self.args.ffmpeg_path {
            request = request.with_ffmpeg_path(path);
        }

        Ok(request)
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
