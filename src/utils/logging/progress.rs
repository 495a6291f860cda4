//! Progress reporting for the dashboard pipeline
//!
//! The pipeline is a short fixed sequence of steps; a single bar tracks them
//! using the indicatif crate.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Default style for the pipeline progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";

/// Create the main progress bar with a standardized style
///
/// # Arguments
/// * `length` - Total number of steps
/// * `description` - Optional description to display as the initial message
/// * `visible` - When false the bar is hidden (tests, non-interactive runs)
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>, visible: bool) -> ProgressBar {
    let pb = if visible {
        ProgressBar::new(length)
    } else {
        ProgressBar::with_draw_target(Some(length), ProgressDrawTarget::hidden())
    };
    let style = ProgressStyle::default_bar()
        .template(DEFAULT_MAIN_TEMPLATE)
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("#>-"));
    pb.set_style(style);

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Finish a progress bar with a completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_tracks_position() {
        let pb = create_main_progress_bar(5, Some("Generating"), false);
        pb.inc(2);
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.length(), Some(5));
        finish_progress_bar(&pb, Some("done"));
        assert!(pb.is_finished());
    }
}
