//! Resume text preprocessing: cleaning, tokenization and skill extraction

pub mod cleaner;
pub mod pipeline;
pub mod skills;
pub mod tokenizer;

pub use cleaner::TextCleaner;
pub use pipeline::{PreprocessedResume, Preprocessor};
pub use skills::SkillExtractor;
pub use tokenizer::Tokenizer;
