//! In-memory search engine over a recipe collection.
//!
//! The pipeline: raw rows pass through the field parsers and the sentence
//! splitter into a [`store::RecipeStore`], the derived search text is
//! tokenized into unigrams + bigrams, and an [`index::RankingIndex`] (BM25)
//! is built over the result. Queries run the same tokenizer and come back
//! as ranked records.

pub mod engine;
pub mod fields;
pub mod index;
pub mod literal;
pub mod sentence;
pub mod store;
pub mod tokenizer;

pub use engine::{load, search, RawRow, SearchContext, SearchOutcome, SearchResult};
pub use index::{DocId, Posting, RankingIndex, TermId};
pub use sentence::Splitter;
pub use store::{Recipe, RecipeStore, SourceColumns};
