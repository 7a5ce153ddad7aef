//! Feature-flag preprocessor.
//!
//! Lines between `#if FEATURE` / `#else` / `#endif` comment directives are
//! kept or dropped depending on which features are enabled:
//!
//! ```
//! let source = "// #if FEATURE_A\nconsole.log(\"A\");\n// #else\nconsole.log(\"Fallback\");\n// #endif";
//! let output = featpp::process(source, ["FEATURE_A"]).unwrap();
//! assert_eq!(output, "console.log(\"A\");");
//! ```
//!
//! Directives are recognized after `#`, `//`, `/*` and `<!--` comment markers.

pub mod build;
pub mod cli;
pub mod config;
pub mod output;
pub mod preprocess;

pub use preprocess::{PreprocessError, Preprocessor, process};
