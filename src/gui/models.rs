use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use crate::core::batch::{BatchResult, ProgressEvent};
use crate::core::params::NormalizeParams;
use crate::core::session::Session;
use crate::gui::logging::{GuiLogLayer, LogEntry};
use crate::io::config::AppConfig;

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Quiet the frame loop's own logging.
        let filter = EnvFilter::new("info")
            .add_directive("eframe=warn".parse().unwrap())
            .add_directive("winit=warn".parse().unwrap());

        let subscriber = Registry::default().with(gui_layer).with(filter);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub struct SquarepadGui {
    // Core state driven by the UI
    pub session: Session,
    pub params: NormalizeParams,

    // Persisted settings
    pub config: AppConfig,
    pub config_path: PathBuf,

    // Status
    pub status_message: String,
    pub is_processing: bool,
    pub processing_start_time: Option<Instant>,
    pub last_processing_duration: Option<Duration>,
    /// (completed, total) while a batch runs
    pub progress: Option<(usize, usize)>,
    pub last_result: Option<BatchResult>,

    // Log messages for the activity panel
    pub log_messages: Arc<Mutex<Vec<LogEntry>>>,
    pub min_log_level: Level,

    // Receivers wired to the background processing thread
    pub progress_receiver: Option<Receiver<ProgressEvent>>,
    pub completion_receiver: Option<Receiver<std::result::Result<BatchResult, String>>>,
}

impl Default for SquarepadGui {
    fn default() -> Self {
        Self::with_config_path(AppConfig::default_path())
    }
}

impl SquarepadGui {
    /// Build the app state, restoring the persisted destination folder.
    pub fn with_config_path(config_path: PathBuf) -> Self {
        let config = AppConfig::load(&config_path);
        let mut session = Session::new();
        if !config.save_folder.is_empty() {
            session.set_destination(PathBuf::from(&config.save_folder));
        }

        Self {
            session,
            params: NormalizeParams::default(),
            config,
            config_path,
            status_message: "Ready".to_string(),
            is_processing: false,
            processing_start_time: None,
            last_processing_duration: None,
            progress: None,
            last_result: None,
            log_messages: Arc::new(Mutex::new(Vec::new())),
            min_log_level: Level::INFO,
            progress_receiver: None,
            completion_receiver: None,
        }
    }
}
