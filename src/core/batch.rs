//! Sequential batch runner: drives the normalizer over a session's
//! selection, collecting per-item failures without aborting the batch and
//! emitting one progress tick per completed item.
use std::fs;

use tracing::{info, warn};

use crate::core::params::NormalizeParams;
use crate::core::processing::normalize::normalize_to_square;
use crate::core::selection::base_name;
use crate::core::session::Session;
use crate::error::{Error, Result};
use crate::types::BatchOutcome;

/// Per-image failure carried into the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub file: String,
    pub message: String,
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub processed: usize,
    pub failures: Vec<Failure>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.processed + self.failures.len()
    }

    pub fn outcome(&self) -> BatchOutcome {
        if self.failures.is_empty() {
            BatchOutcome::AllSucceeded
        } else if self.processed == 0 {
            BatchOutcome::AllFailed
        } else {
            BatchOutcome::Partial
        }
    }

    /// Human-readable report in the shape frontends display.
    pub fn summary(&self) -> String {
        let mut msg = match self.outcome() {
            BatchOutcome::AllSucceeded => {
                return format!("Successfully processed {} image(s).", self.processed);
            }
            BatchOutcome::Partial => format!(
                "Successfully processed {} image(s).\nHowever, the following image(s) failed to process:",
                self.processed
            ),
            BatchOutcome::AllFailed => "All images failed to process:".to_string(),
        };
        for failure in &self.failures {
            msg.push_str(&format!("\n{}: {}", failure.file, failure.message));
        }
        msg
    }
}

/// Events emitted while a batch runs.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The batch started; `total` items will be attempted.
    Started { total: usize },
    /// One item finished (success or failure); `completed` counts 1..=total.
    ItemDone {
        completed: usize,
        total: usize,
        file: String,
    },
    /// The batch finished.
    Finished { processed: usize, failed: usize },
}

/// Sink for progress events. Implementations must be callable from whatever
/// thread drives the batch.
pub trait ProgressSink: Send + Sync {
    fn on_event(&self, event: ProgressEvent);
}

/// No-op sink for callers that don't track progress.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_event(&self, _event: ProgressEvent) {}
}

/// Run the normalizer over every image in the session's selection, writing
/// each result to `destination/<base filename>`.
///
/// Items are processed strictly in order; one item's failure never stops the
/// rest, and outputs already written stay on disk. Usage errors (empty
/// selection, unset destination) abort before any file I/O and are distinct
/// from per-item failures.
pub fn run_batch(
    session: &Session,
    params: &NormalizeParams,
    progress: &dyn ProgressSink,
) -> Result<BatchResult> {
    let selection = session.selection();
    if selection.is_empty() {
        return Err(Error::EmptySelection);
    }
    let destination = session.destination().ok_or(Error::DestinationNotSet)?;

    if let Err(e) = fs::create_dir_all(destination) {
        // Surfaces again as per-item write failures
        warn!("Could not create destination directory {:?}: {}", destination, e);
    }

    let total = selection.len();
    info!("Starting batch of {} image(s) into {:?}", total, destination);
    progress.on_event(ProgressEvent::Started { total });

    let mut result = BatchResult::default();
    for (index, input) in selection.iter().enumerate() {
        let file = base_name(input);
        let output = destination.join(&file);
        match normalize_to_square(input, &output, params) {
            Ok(()) => {
                info!("Processed {:?} -> {:?}", input, output);
                result.processed += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", input, e);
                result.failures.push(Failure {
                    file: file.clone(),
                    message: e.to_string(),
                });
            }
        }
        progress.on_event(ProgressEvent::ItemDone {
            completed: index + 1,
            total,
            file,
        });
    }

    info!(
        "Batch complete! Processed: {}, Errors: {}",
        result.processed,
        result.failures.len()
    );
    progress.on_event(ProgressEvent::Finished {
        processed: result.processed,
        failed: result.failures.len(),
    });

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn empty_selection_is_a_usage_error_and_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new();
        session.set_destination(dir.path().join("out"));

        let err = run_batch(&session, &NormalizeParams::default(), &NullProgress).unwrap_err();
        assert!(matches!(err, Error::EmptySelection));
        assert!(err.is_usage());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn unset_destination_is_a_usage_error() {
        let mut session = Session::new();
        session.add_images([PathBuf::from("/nowhere/a.png")]);

        let err = run_batch(&session, &NormalizeParams::default(), &NullProgress).unwrap_err();
        assert!(matches!(err, Error::DestinationNotSet));
        assert!(err.is_usage());
    }

    #[test]
    fn outcome_classification() {
        let mut result = BatchResult {
            processed: 2,
            failures: Vec::new(),
        };
        assert_eq!(result.outcome(), BatchOutcome::AllSucceeded);

        result.failures.push(Failure {
            file: "x.png".to_string(),
            message: "boom".to_string(),
        });
        assert_eq!(result.outcome(), BatchOutcome::Partial);
        assert_eq!(result.total(), 3);

        result.processed = 0;
        assert_eq!(result.outcome(), BatchOutcome::AllFailed);
        assert!(result.summary().contains("x.png: boom"));
    }
}
