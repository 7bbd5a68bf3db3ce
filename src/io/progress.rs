//! Terminal progress display for the sampling pass

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SAMPLING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} columns"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Column-level progress bar for one sampling run
///
/// The underlying bar is thread safe, so [`SamplingProgress::column_done`]
/// can be called from rayon workers.
pub struct SamplingProgress {
    bar: ProgressBar,
}

impl SamplingProgress {
    /// Create a progress display for a grid with `columns` columns
    ///
    /// When `visible` is false nothing is drawn but the position is still tracked.
    pub fn new(columns: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(columns as u64)
        } else {
            let hidden = ProgressBar::hidden();
            hidden.set_length(columns as u64);
            hidden
        };
        bar.set_style(SAMPLING_STYLE.clone());
        bar.set_message("sampling");
        Self { bar }
    }

    /// Record one finished grid column
    pub fn column_done(&self) {
        self.bar.inc(1);
    }

    /// Columns recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total columns expected
    pub fn length(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Stop the display and leave a completion message
    pub fn finish(&self) {
        self.bar.finish_with_message("sampled");
    }
}
