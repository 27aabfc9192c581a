//! In-memory BM25 inverted index over the tokenized corpus.
//!
//! Built once per dataset load, frozen afterwards. Document ids are the
//! positions of the token sequences handed to [`RankingIndex::build`], so
//! they line up with the recipe store's row ids by construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TermId = u32;
pub type DocId = u32;

/// Term-frequency saturation parameter.
pub const BM25_K1: f32 = 1.2;
/// Document-length normalization parameter.
pub const BM25_B: f32 = 0.75;

/// One entry in a term's postings list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_frequency: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RankingIndex {
    /// term -> numeric id, frozen after build
    pub dictionary: HashMap<String, TermId>,
    /// term id -> number of documents containing the term
    pub df: Vec<u32>,
    /// term id -> postings, in ascending doc id order
    pub postings: HashMap<TermId, Vec<Posting>>,
    /// doc id -> token count
    pub doc_lengths: Vec<u32>,
    pub doc_count: u32,
    pub total_doc_length: u64,
}

impl RankingIndex {
    /// Build the index from one token sequence per document. Sequence order
    /// defines the document ids. An empty corpus builds an empty index that
    /// answers every query with no results.
    pub fn build(corpus: &[Vec<String>]) -> Self {
        let mut index = Self::default();
        for (doc_id, tokens) in corpus.iter().enumerate() {
            index.add_document(doc_id as DocId, tokens);
        }
        index
    }

    fn add_document(&mut self, doc_id: DocId, tokens: &[String]) {
        let doc_len = tokens.len() as u32;
        self.doc_lengths.push(doc_len);
        self.doc_count += 1;
        self.total_doc_length += u64::from(doc_len);

        let mut tf: HashMap<&str, u32> = HashMap::new();
        for token in tokens {
            *tf.entry(token.as_str()).or_insert(0) += 1;
        }

        for (term, term_frequency) in tf {
            let next_id = self.dictionary.len() as TermId;
            let term_id = *self.dictionary.entry(term.to_string()).or_insert(next_id);
            if term_id as usize >= self.df.len() {
                self.df.resize(term_id as usize + 1, 0);
            }
            self.df[term_id as usize] += 1;
            self.postings.entry(term_id).or_default().push(Posting {
                doc_id,
                term_frequency,
            });
        }
    }

    pub fn average_doc_length(&self) -> f32 {
        if self.doc_count == 0 {
            return 0.0;
        }
        self.total_doc_length as f32 / self.doc_count as f32
    }

    /// BM25 score of every document against the query tokens, indexed by
    /// doc id. Documents containing no query token score 0.0, and an empty
    /// token slice scores 0.0 everywhere; no-match and no-query are
    /// indistinguishable here by contract, callers filter zero scores.
    pub fn scores(&self, tokens: &[String]) -> Vec<f32> {
        let mut scores = vec![0.0f32; self.doc_count as usize];
        if self.doc_count == 0 {
            return scores;
        }
        let avgdl = self.average_doc_length();
        let n = self.doc_count as f32;

        for token in tokens {
            let Some(&term_id) = self.dictionary.get(token) else {
                continue;
            };
            let Some(postings) = self.postings.get(&term_id) else {
                continue;
            };
            let df = self.df[term_id as usize] as f32;
            let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();

            for posting in postings {
                let dl = self.doc_lengths[posting.doc_id as usize] as f32;
                let tf = posting.term_frequency as f32;
                let norm = tf + BM25_K1 * (1.0 - BM25_B + BM25_B * dl / avgdl);
                scores[posting.doc_id as usize] += idf * tf * (BM25_K1 + 1.0) / norm;
            }
        }
        scores
    }

    /// The `k` highest-scoring document ids with their scores, ties broken
    /// by ascending doc id. The result is truncated to `k` even when fewer
    /// than `k` documents score above zero; filtering zero-score entries is
    /// the caller's responsibility.
    pub fn top_k(&self, tokens: &[String], k: usize) -> Vec<(DocId, f32)> {
        let scores = self.scores(tokens);
        let mut order: Vec<DocId> = (0..self.doc_count).collect();
        order.sort_by(|&a, &b| {
            scores[b as usize]
                .partial_cmp(&scores[a as usize])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order.truncate(k);
        order
            .into_iter()
            .map(|doc_id| (doc_id, scores[doc_id as usize]))
            .collect()
    }
}
