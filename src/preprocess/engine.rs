use super::directive::{Keyword, classify};
use super::error::PreprocessError;
use std::collections::HashSet;

/// One open `#if` block
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    /// Feature named by the opening directive
    feature: String,
    /// Whether lines of the current branch are kept
    condition_met: bool,
    /// Set once the block's `#else` has been consumed
    else_seen: bool,
    /// Line of the opening directive (1-based)
    line: usize,
}

/// Stack of open blocks for a single pass over one input
#[derive(Debug, Default)]
struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// A line is dropped as soon as any enclosing branch is not taken
    fn is_suppressed(&self) -> bool {
        self.frames.iter().any(|frame| !frame.condition_met)
    }
}

/// Filters text according to `#if`/`#else`/`#endif` comment directives
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    features: HashSet<String>,
}

impl Preprocessor {
    /// Create a preprocessor with the given enabled features
    pub fn new<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a feature is enabled
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Enabled features in sorted order
    pub fn features(&self) -> Vec<&str> {
        let mut features: Vec<&str> = self.features.iter().map(String::as_str).collect();
        features.sort_unstable();
        features
    }

    /// Run one pass over `content` and return the retained lines.
    ///
    /// Directive lines are always consumed. Any other line is kept verbatim
    /// (untrimmed) when every open block's current branch is taken. The
    /// first structural problem aborts the pass.
    pub fn process(&self, content: &str) -> Result<String, PreprocessError> {
        let mut stack = FrameStack::default();
        let mut suppressed = false;
        let mut output: Vec<&str> = Vec::new();

        for (index, line) in content.split('\n').enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

            match classify(trimmed) {
                Some(Keyword::If) => {
                    // Tokens: marker, `#if`, feature
                    let feature = trimmed
                        .split_whitespace()
                        .nth(2)
                        .ok_or(PreprocessError::MissingFeature { line: line_number })?;

                    stack.push(Frame {
                        feature: feature.to_string(),
                        condition_met: self.is_enabled(feature),
                        else_seen: false,
                        line: line_number,
                    });
                    suppressed = stack.is_suppressed();
                }
                Some(Keyword::Else) => {
                    let top = stack
                        .top_mut()
                        .ok_or(PreprocessError::UnexpectedElse { line: line_number })?;

                    if top.else_seen {
                        return Err(PreprocessError::DuplicateElse {
                            line: line_number,
                            feature: top.feature.clone(),
                        });
                    }

                    top.else_seen = true;
                    top.condition_met = !top.condition_met;
                    suppressed = stack.is_suppressed();
                }
                Some(Keyword::Endif) => {
                    stack
                        .pop()
                        .ok_or(PreprocessError::UnexpectedEndif { line: line_number })?;
                    suppressed = stack.is_suppressed();
                }
                None => {
                    if !suppressed {
                        output.push(line);
                    }
                }
            }
        }

        if !stack.is_empty() {
            return Err(PreprocessError::UnterminatedIf {
                count: stack.len(),
                line: stack.frames[0].line,
            });
        }

        Ok(output.join("\n"))
    }
}

/// Preprocess `content` with the given enabled features
pub fn process<I, S>(content: &str, features: I) -> Result<String, PreprocessError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Preprocessor::new(features).process(content)
}
