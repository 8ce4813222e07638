//! Terminal progress for catalog builds.

use api_catalog_import::{ImportProgress, LogProgress};
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};

/// Progress bar over the spreadsheet files, with every update also logged.
///
/// The bar is hidden when `visible` is false so it never interleaves with
/// verbose log output.
pub(crate) struct BarProgress {
    bar: ProgressBar,
    log: LogProgress,
}

impl BarProgress {
    pub(crate) fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        }
        .with_finish(ProgressFinish::AndClear);

        let style = ProgressStyle::with_template("  {spinner:.cyan} [{pos}/{len}] {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_chars("/-\\|");
        bar.set_style(style);

        Self {
            bar,
            log: LogProgress,
        }
    }
}

impl ImportProgress for BarProgress {
    fn on_file(&self, current: usize, total: usize, name: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current.saturating_sub(1) as u64);
        self.bar.set_message(name.to_string());
        self.log.on_file(current, total, name);
    }

    fn on_phase(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.log.on_phase(message);
    }

    fn on_complete(&self, message: &str) {
        self.bar.finish_and_clear();
        self.log.on_complete(message);
    }
}
