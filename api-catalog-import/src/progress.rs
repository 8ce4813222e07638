//! Import progress reporting.

/// Trait for receiving catalog build progress updates.
pub trait ImportProgress {
    /// Called before each spreadsheet is imported.
    fn on_file(&self, current: usize, total: usize, name: &str);

    /// Called when a phase starts (e.g., "Writing catalog.json").
    fn on_phase(&self, message: &str);

    /// Called when the build is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _current: usize, _total: usize, _name: &str) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_file(&self, current: usize, total: usize, name: &str) {
        log::info!("  [{}/{}] {}", current, total, name);
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
