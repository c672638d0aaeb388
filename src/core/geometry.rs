//! Terminal size plumbing for the graph bars.

use terminal_size::{Width, terminal_size};

use crate::core::constants::GRAPH_MAX_BAR;

/// Width of the attached terminal, `None` when stdout is a pipe or file.
#[inline]
#[must_use]
pub fn terminal_width() -> Option<Width> {
    terminal_size().map(|(w, _)| w)
}

/// Room left for a bar after `used` columns of text, capped at
/// `GRAPH_MAX_BAR`. One column stays free so the line never wraps.
#[inline]
#[must_use]
pub fn bar_width(Width(w): Width, used: usize) -> usize {
    usize::from(w)
        .saturating_sub(used + 1)
        .min(GRAPH_MAX_BAR)
}

/// Length of the bar for `value` inside `lo..=hi` when the full range
/// spans `width` columns.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn bar_len(value: f64, (lo, hi): (f64, f64), width: usize) -> usize {
    let r = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    (r * width as f64).round() as usize
}
