pub mod body_area;
pub mod extractor;
pub mod normalizer;
pub mod prompt;
