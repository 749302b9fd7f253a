#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    /// Reject characters that are neither whitespace nor part of a lexeme.
    pub strict: bool,
    /// Maximum nesting depth of the parser, unlimited if `None`.
    pub max_depth: Option<usize>,
}

pub const DEFAULT_OPTIONS: Options = Options {
    strict: false,
    max_depth: None,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}
