use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Simple file logger for the TUI. stderr is unusable while the alternate
/// screen is active, so diagnostics go to `~/.shiftdeck/tui.log`.
pub struct FileLogger {
    log_file_path: PathBuf,
}

impl FileLogger {
    /// Create a new file logger
    pub fn new() -> Self {
        let mut log_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        log_path.push(".shiftdeck");

        if let Err(e) = std::fs::create_dir_all(&log_path) {
            eprintln!("Warning: Could not create log directory: {}", e);
        }

        log_path.push("tui.log");

        Self {
            log_file_path: log_path,
        }
    }

    pub fn log_error(&self, message: &str) {
        self.write_log("ERROR", message);
    }

    pub fn log_info(&self, message: &str) {
        self.write_log("INFO", message);
    }

    pub fn log_debug(&self, message: &str) {
        self.write_log("DEBUG", message);
    }

    fn write_log(&self, level: &str, message: &str) {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!("[{}] {}: {}\n", timestamp, level, message);

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
        {
            if let Err(e) = file.write_all(log_entry.as_bytes()) {
                eprintln!("Warning: Could not write to log file: {}", e);
            }
        }
    }

    pub fn get_log_path(&self) -> &PathBuf {
        &self.log_file_path
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

/// Initialize the global logger
pub fn init_logger() {
    let _ = LOGGER.get_or_init(FileLogger::new);
}

fn get_logger() -> Option<&'static FileLogger> {
    LOGGER.get()
}

/// Log an error message
pub fn log_error(message: &str) {
    if let Some(logger) = get_logger() {
        logger.log_error(message);
    }
}

/// Log an info message
pub fn log_info(message: &str) {
    if let Some(logger) = get_logger() {
        logger.log_info(message);
    }
}

/// Log a debug message
pub fn log_debug(message: &str) {
    if let Some(logger) = get_logger() {
        logger.log_debug(message);
    }
}

/// Get the path to the log file
pub fn get_log_file_path() -> Option<PathBuf> {
    get_logger().map(|logger| logger.get_log_path().clone())
}
