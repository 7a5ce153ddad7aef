use eyre::{Context, Result};
use regex::Regex;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// A single skip entry
#[derive(Debug, Clone)]
enum Pattern {
    /// Matches the file name exactly
    Name(String),
    /// `*` wildcard entry, compiled to an anchored regex
    Glob(Regex),
}

impl Pattern {
    fn parse(entry: &str) -> Result<Self> {
        if !entry.contains('*') {
            return Ok(Pattern::Name(entry.to_string()));
        }

        let pattern = format!("^{}$", regex::escape(entry).replace(r"\*", ".*"));
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid skip pattern: {}", entry))?;
        Ok(Pattern::Glob(regex))
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Name(expected) => expected == name,
            Pattern::Glob(regex) => regex.is_match(name),
        }
    }
}

/// Names of files and directories left out of the output tree
#[derive(Debug, Clone, Default)]
pub struct SkipList {
    entries: Vec<String>,
    patterns: Vec<Pattern>,
}

impl SkipList {
    /// Build a skip list from entries
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let patterns = entries
            .iter()
            .map(|entry| Pattern::parse(entry))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries, patterns })
    }

    /// Parse ignore-file content: one name per line, blank lines and `#` comments ignored
    pub fn parse(content: &str) -> Result<Self> {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load the ignore file from the source root, falling back to `defaults` when it is absent
    pub fn load(source_dir: &Path, ignore_file: &str, defaults: &[String]) -> Result<Self> {
        let path = source_dir.join(ignore_file);

        if path.is_file() {
            log::debug!("Loading skip list from {}", path.display());
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;
            return Self::parse(&content);
        }

        log::debug!("No {} in {}, using default skip list", ignore_file, source_dir.display());
        Self::new(defaults.iter().cloned())
    }

    /// Check whether an entry with this file name is skipped
    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.patterns.iter().any(|pattern| pattern.matches(&name))
    }

    /// The raw entries, in file order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exact_names() {
        let skip = SkipList::new(["node_modules", ".git"]).unwrap();
        assert!(skip.matches(OsStr::new("node_modules")));
        assert!(skip.matches(OsStr::new(".git")));
        assert!(!skip.matches(OsStr::new(".github")));
        assert!(!skip.matches(OsStr::new("modules")));
    }

    #[test]
    fn test_wildcards() {
        let skip = SkipList::new(["*.log", "tmp*", "a.b*"]).unwrap();
        assert!(skip.matches(OsStr::new("debug.log")));
        assert!(skip.matches(OsStr::new("tmp")));
        assert!(skip.matches(OsStr::new("tmp-build")));
        assert!(skip.matches(OsStr::new("a.bc")));
        // The dot is literal
        assert!(!skip.matches(OsStr::new("axbc")));
        assert!(!skip.matches(OsStr::new("debug.log.txt")));
    }

    #[test]
    fn test_parse_ignore_content() {
        let content = "# build output\ndist\n\n  coverage  \n#not-a-name\n*.map\n";
        let skip = SkipList::parse(content).unwrap();
        assert_eq!(skip.entries(), &["dist", "coverage", "*.map"]);
        assert!(!skip.matches(OsStr::new("#not-a-name")));
        assert!(skip.matches(OsStr::new("app.js.map")));
    }

    #[test]
    fn test_load_prefers_ignore_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(".featppignore"), "secret\n").expect("Failed to write ignore file");

        let defaults = vec!["node_modules".to_string()];
        let skip = SkipList::load(temp_dir.path(), ".featppignore", &defaults).unwrap();
        assert_eq!(skip.entries(), &["secret"]);
        assert!(!skip.matches(OsStr::new("node_modules")));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let defaults = vec!["node_modules".to_string(), "dist".to_string()];
        let skip = SkipList::load(temp_dir.path(), ".featppignore", &defaults).unwrap();
        assert_eq!(skip.entries(), &["node_modules", "dist"]);
    }

    #[test]
    fn test_empty_ignore_file_skips_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(".featppignore"), "# nothing\n").expect("Failed to write ignore file");

        let defaults = vec!["dist".to_string()];
        let skip = SkipList::load(temp_dir.path(), ".featppignore", &defaults).unwrap();
        assert!(skip.entries().is_empty());
        assert!(!skip.matches(OsStr::new("dist")));
    }
}
