/// When renderer calls reach the caller's renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Calls are issued inline while parsing. A later error leaves the calls
    /// already made in place.
    #[default]
    Streaming,
    /// Calls are recorded and only replayed once the whole document has
    /// parsed, so a failing document issues no calls at all.
    Atomic,
}

/// Parser configuration.
///
/// ```rust
/// use wdl_lang::{CommitMode, ParseOptions};
///
/// let opts = ParseOptions::new().commit(CommitMode::Atomic).max_nesting(16);
/// assert_eq!(opts.commit, CommitMode::Atomic);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub commit: CommitMode,
    /// Deepest allowed panel nesting; the window's own children are depth 0.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            commit: CommitMode::Streaming,
            max_nesting: 256,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(mut self, mode: CommitMode) -> Self {
        self.commit = mode;
        self
    }

    pub fn max_nesting(mut self, depth: usize) -> Self {
        self.max_nesting = depth;
        self
    }
}
