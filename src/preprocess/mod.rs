pub mod directive;
pub mod engine;
pub mod error;

pub use directive::Keyword;
pub use engine::{Preprocessor, process};
pub use error::PreprocessError;
