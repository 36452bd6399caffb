//! Diff generation for dry-run previews (`similar`).

use similar::TextDiff;

const CONTEXT_LINES: usize = 3;

/// Unified diff from `original` to `modified`, with `---`/`+++` labels and
/// `@@` hunk headers. Empty when the two texts are equal.
#[must_use]
pub fn generate_unified_diff(
    original: &str,
    modified: &str,
    original_label: &str,
    modified_label: &str,
) -> String {
    TextDiff::from_lines(original, modified)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(original_label, modified_label)
        .to_string()
}
