/// Comment markers that may introduce a directive
const COMMENT_MARKERS: [&str; 4] = ["#", "//", "/*", "<!--"];

/// Keyword of a conditional directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Opens a conditional block: `#if FEATURE`
    If,
    /// Switches to the alternate branch of the innermost block
    Else,
    /// Closes the innermost block
    Endif,
}

impl Keyword {
    /// Keywords in the order a line is tested against them
    pub const PRIORITY: [Keyword; 3] = [Keyword::If, Keyword::Else, Keyword::Endif];

    /// The bare keyword as written after the `#`
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Endif => "endif",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

/// Check whether an already trimmed line opens the given directive.
///
/// A directive is one of the comment markers, a single space and `#keyword`,
/// e.g. `// #if`, `# #else` or `<!-- #endif`. The test is a plain
/// case-sensitive prefix match; whatever follows the prefix is not inspected.
pub fn recognize(line: &str, keyword: Keyword) -> bool {
    COMMENT_MARKERS.iter().any(|marker| {
        line.strip_prefix(marker)
            .and_then(|rest| rest.strip_prefix(" #"))
            .is_some_and(|rest| rest.starts_with(keyword.as_str()))
    })
}

/// Classify a trimmed line, testing `#if`, then `#else`, then `#endif`
pub fn classify(line: &str) -> Option<Keyword> {
    Keyword::PRIORITY.into_iter().find(|keyword| recognize(line, *keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_all_comment_styles() {
        assert!(recognize("# #if FEATURE", Keyword::If));
        assert!(recognize("// #if FEATURE", Keyword::If));
        assert!(recognize("/* #if FEATURE */", Keyword::If));
        assert!(recognize("<!-- #if FEATURE -->", Keyword::If));
    }

    #[test]
    fn test_recognize_else_and_endif() {
        assert!(recognize("// #else", Keyword::Else));
        assert!(recognize("<!-- #else -->", Keyword::Else));
        assert!(recognize("# #endif", Keyword::Endif));
        assert!(recognize("/* #endif */", Keyword::Endif));
    }

    #[test]
    fn test_recognize_rejects_other_keywords() {
        assert!(!recognize("// #else", Keyword::If));
        assert!(!recognize("// #endif", Keyword::If));
        assert!(!recognize("// #if FEATURE", Keyword::Else));
        assert!(!recognize("// #if FEATURE", Keyword::Endif));
    }

    #[test]
    fn test_recognize_is_strict() {
        // Case, spacing and unknown markers all matter
        assert!(!recognize("// #IF FEATURE", Keyword::If));
        assert!(!recognize("//#if FEATURE", Keyword::If));
        assert!(!recognize("//  #if FEATURE", Keyword::If));
        assert!(!recognize("-- #if FEATURE", Keyword::If));
        assert!(!recognize("; #if FEATURE", Keyword::If));
        assert!(!recognize("#if FEATURE", Keyword::If));
    }

    #[test]
    fn test_recognize_expects_trimmed_input() {
        assert!(!recognize("    // #if FEATURE", Keyword::If));
        assert!(recognize("// #if FEATURE", Keyword::If));
    }

    #[test]
    fn test_recognize_is_prefix_only() {
        assert!(recognize("// #ifdef FEATURE", Keyword::If));
        assert!(recognize("// #endif trailing words", Keyword::Endif));
        assert!(!recognize("code(); // #if FEATURE", Keyword::If));
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("// #if A"), Some(Keyword::If));
        assert_eq!(classify("# #else"), Some(Keyword::Else));
        assert_eq!(classify("<!-- #endif -->"), Some(Keyword::Endif));
        assert_eq!(classify("console.log(1);"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_keyword_display() {
        assert_eq!(Keyword::If.to_string(), "#if");
        assert_eq!(Keyword::Else.to_string(), "#else");
        assert_eq!(Keyword::Endif.to_string(), "#endif");
    }
}
