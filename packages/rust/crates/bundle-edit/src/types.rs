//! Result type shared by the text transforms.

/// Output of a text transform over an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Content after the transform.
    pub modified: String,
    /// Number of pattern occurrences that were rewritten.
    pub count: usize,
}

impl Rewrite {
    /// Whether the pattern matched at least once.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.count > 0
    }
}
