use thiserror::Error;

/// Structural error found while preprocessing a single file
///
/// Every variant carries the 1-based line number where it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreprocessError {
    /// `#if` directive without a feature name
    #[error("Line {line}: Missing feature in #if directive")]
    MissingFeature { line: usize },

    /// `#else` with no open `#if` block
    #[error("Line {line}: Unexpected #else without matching #if")]
    UnexpectedElse { line: usize },

    /// Second `#else` inside the same `#if` block
    #[error("Line {line}: Duplicate #else in #if {feature}")]
    DuplicateElse { line: usize, feature: String },

    /// `#endif` with no open `#if` block
    #[error("Line {line}: Unexpected #endif without matching #if")]
    UnexpectedEndif { line: usize },

    /// Input ended while blocks were still open; `line` is where the outermost one started
    #[error("Missing #endif for {count} unmatched #if directive(s) (outermost opened at line {line})")]
    UnterminatedIf { count: usize, line: usize },
}

impl PreprocessError {
    /// Line number the error points at (1-based)
    pub fn line(&self) -> usize {
        match self {
            PreprocessError::MissingFeature { line }
            | PreprocessError::UnexpectedElse { line }
            | PreprocessError::DuplicateElse { line, .. }
            | PreprocessError::UnexpectedEndif { line }
            | PreprocessError::UnterminatedIf { line, .. } => *line,
        }
    }
}
