// Wed Jan 15 2026 - Alex

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn hidden() -> Self {
        Self { enabled: false }
    }

    /// Length is set later by the pipeline once duplicates are removed.
    pub fn create_lookup_progress(&self) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            pb.set_style(style.progress_chars("█▓▒░ "));
        }
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
