//! Natural language processing components
//!
//! Tokenization, part-of-speech tagging, lemmatization, morphological
//! resolution, and stopword filtering.

pub mod lemmatizer;
pub mod resolver;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
