pub mod extractor;
pub mod rules;

use std::sync::LazyLock;

use bmi_model::attributes::ParsedAttributes;

pub use extractor::{Extractor, KeywordExtractor, MockExtractor};
pub use rules::{Conversion, ExtractionRules, Rule};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read rules file")]
    Io(#[from] std::io::Error),
    #[error("malformed rules file: {0}")]
    Config(#[from] ron::error::SpannedError),
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

static DEFAULT_EXTRACTOR: LazyLock<KeywordExtractor> = LazyLock::new(|| {
    KeywordExtractor::new(&ExtractionRules::default()).expect("Invalid built-in extraction rule")
});

impl Default for KeywordExtractor {
    fn default() -> Self {
        (*DEFAULT_EXTRACTOR).clone()
    }
}

/// Extracts age, height and weight from `text` with the built-in rules.
/// Fields that cannot be found are left unresolved.
pub fn extract(text: &str) -> ParsedAttributes {
    DEFAULT_EXTRACTOR.extract(text)
}
