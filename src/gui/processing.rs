use std::path::Path;
use std::sync::mpsc::Sender;
use std::time::Instant;

use tracing::{error, info, warn};

use super::models::{SquarepadGui, init_gui_logging};
use crate::core::batch::{self, ProgressEvent, ProgressSink};
use crate::io::scan::{SUPPORTED_EXTENSIONS, scan_image_dir};
use crate::types::BatchOutcome;

/// Forwards batch progress events onto an mpsc channel polled by the paint
/// thread.
pub struct ChannelProgress {
    tx: Sender<ProgressEvent>,
}

impl ChannelProgress {
    pub fn new(tx: Sender<ProgressEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgress {
    fn on_event(&self, event: ProgressEvent) {
        let _ = self.tx.send(event);
    }
}

impl SquarepadGui {
    pub fn select_images(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Image Files", &SUPPORTED_EXTENSIONS)
            .pick_files()
        {
            let added = self.session.add_images(paths);
            info!("Added {} image(s) to the selection", added);
        }
    }

    pub fn select_folder_images(&mut self) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            match scan_image_dir(&dir) {
                Ok(paths) => {
                    let added = self.session.add_images(paths);
                    info!("Added {} image(s) from {:?}", added, dir);
                }
                Err(e) => error!("Could not list {:?}: {}", dir, e),
            }
        }
    }

    pub fn remove_image(&mut self, path: &Path) {
        if self.session.remove_image(path) {
            info!("Removed {:?} from the selection", path);
        }
    }

    pub fn reset_selection(&mut self) {
        self.session.reset_selection();
        self.last_result = None;
        info!("Selection cleared");
    }

    pub fn select_destination(&mut self) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            self.config.save_folder = dir.to_string_lossy().into_owned();
            if let Err(e) = self.config.save(&self.config_path) {
                warn!("Could not persist destination folder: {}", e);
            }
            self.session.set_destination(dir.clone());
            info!("Destination folder set to {:?}", dir);
        }
    }

    /// Kick off a batch on a worker thread. Single-flight: a request while
    /// one is already running is ignored.
    pub fn start_processing(&mut self) {
        if self.is_processing {
            return;
        }

        init_gui_logging();

        // The runner re-validates these, but checking here surfaces usage
        // errors without spawning a worker thread.
        if self.session.selection().is_empty() {
            self.status_message =
                "No images selected! Please select images to process.".to_string();
            error!("{}", self.status_message);
            return;
        }
        if self.session.destination().is_none() {
            self.status_message =
                "No destination folder selected! Please select a save location.".to_string();
            error!("{}", self.status_message);
            return;
        }

        self.is_processing = true;
        self.processing_start_time = Some(Instant::now());
        self.last_processing_duration = None;
        self.last_result = None;
        self.progress = Some((0, self.session.selection().len()));
        self.status_message = "Processing...".to_string();

        let session = self.session.clone();
        let params = self.params;
        let (progress_tx, progress_rx) = std::sync::mpsc::channel();
        let (done_tx, done_rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            let progress = ChannelProgress::new(progress_tx);
            let result =
                batch::run_batch(&session, &params, &progress).map_err(|e| e.to_string());
            let _ = done_tx.send(result);
        });

        self.progress_receiver = Some(progress_rx);
        self.completion_receiver = Some(done_rx);
        info!("Processing started in background thread");
    }

    /// Drain progress and completion channels; called once per frame.
    pub fn poll_background(&mut self) {
        if let Some(rx) = &self.progress_receiver {
            for event in rx.try_iter() {
                if let ProgressEvent::ItemDone {
                    completed, total, ..
                } = event
                {
                    self.progress = Some((completed, total));
                }
            }
        }

        let finished = self
            .completion_receiver
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());
        if let Some(result) = finished {
            if let Some(start) = self.processing_start_time {
                let duration = start.elapsed();
                self.last_processing_duration = Some(duration);
                info!("Processing completed in {:.2?}", duration);
            }

            match result {
                Ok(report) => {
                    match report.outcome() {
                        BatchOutcome::AllSucceeded => {
                            self.status_message =
                                format!("Successfully processed {} image(s).", report.processed);
                            info!("{}", self.status_message);
                        }
                        BatchOutcome::Partial => {
                            self.status_message = format!(
                                "Processed {} image(s), {} failed.",
                                report.processed,
                                report.failures.len()
                            );
                            warn!("{}", report.summary());
                        }
                        BatchOutcome::AllFailed => {
                            self.status_message = "All images failed to process.".to_string();
                            error!("{}", report.summary());
                        }
                    }
                    self.last_result = Some(report);
                }
                Err(msg) => {
                    self.status_message = format!("Error: {}", msg);
                    error!("Processing failed: {}", msg);
                }
            }

            self.is_processing = false;
            self.processing_start_time = None;
            self.progress = None;
            self.progress_receiver = None;
            self.completion_receiver = None;
        }
    }
}
