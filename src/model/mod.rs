//! Pre-trained model artifacts: vectorizer, classifier and label encoder

pub mod artifacts;
pub mod classifier;
pub mod labels;
pub mod vectorizer;

pub use artifacts::ModelArtifacts;
pub use classifier::LinearClassifier;
pub use labels::LabelEncoder;
pub use vectorizer::TfidfVectorizer;
