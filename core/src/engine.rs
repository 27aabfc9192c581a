//! Load and search entry points tying the pipeline together.
//!
//! `load` turns raw rows into a [`SearchContext`] (store + index built as
//! one unit); `search` answers ranked queries against it. A context is
//! read-only once built, so concurrent queries need no coordination and a
//! reload is published by swapping the whole context at once.

use crate::fields;
use crate::index::{DocId, RankingIndex};
use crate::sentence::Splitter;
use crate::store::{Recipe, RecipeStore, SourceColumns};
use crate::tokenizer;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One raw dataset row, fields already resolved to canonical names by the
/// loading layer. Empty strings stand in for missing values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    pub title: String,
    pub ingredients_raw: String,
    pub steps_raw: String,
    pub url: String,
}

/// A matched store + index pair. The two are only ever built together, so
/// the index's document table and the store's row ids cannot drift apart.
pub struct SearchContext {
    pub store: RecipeStore,
    pub index: RankingIndex,
}

/// One ranked hit with the record fields the caller displays.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: DocId,
    pub score: f32,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    /// The normalized query tokens, returned for diagnostic display.
    pub query_tokens: Vec<String>,
}

/// Build a search context from raw rows. Never fails: per-row problems
/// degrade (rows without a title are dropped, a missing url becomes "#",
/// unusable step text becomes a placeholder sentence) and an empty row set
/// builds an empty context that answers every query with no results.
pub fn load(rows: Vec<RawRow>, columns: SourceColumns) -> SearchContext {
    let splitter = Splitter::italian();
    let mut records: Vec<Recipe> = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for row in rows {
        let title = row.title.trim().to_string();
        if title.is_empty() {
            skipped += 1;
            continue;
        }
        let ingredients = fields::parse_ingredients(&row.ingredients_raw);
        let steps = fields::parse_steps(&row.steps_raw, &splitter);
        let url = match row.url.trim() {
            "" => "#".to_string(),
            url => url.to_string(),
        };
        let search_text = format!("{} {}", title, ingredients.join(" "));
        records.push(Recipe {
            id: records.len() as DocId,
            title,
            ingredients,
            steps,
            url,
            search_text,
        });
    }
    if skipped > 0 {
        warn!(skipped, "dropped rows without a title");
    }

    let corpus: Vec<Vec<String>> = records
        .iter()
        .map(|record| tokenizer::tokenize(&record.search_text))
        .collect();
    let index = RankingIndex::build(&corpus);
    let store = RecipeStore::new(records, columns);
    info!(
        num_docs = store.len(),
        num_terms = index.dictionary.len(),
        "search context built"
    );
    SearchContext { store, index }
}

/// Rank the corpus against `query` and return up to `limit` hits with a
/// positive score, highest first. An empty query or an empty context yields
/// an empty outcome, never an error.
pub fn search(ctx: &SearchContext, query: &str, limit: usize) -> SearchOutcome {
    if query.trim().is_empty() || ctx.store.is_empty() {
        return SearchOutcome::default();
    }

    let query_tokens = tokenizer::tokenize(query);
    let ranked = ctx.index.top_k(&query_tokens, limit);

    let mut results = Vec::new();
    for (doc_id, score) in ranked {
        if score <= 0.0 {
            continue;
        }
        if let Some(recipe) = ctx.store.get(doc_id) {
            results.push(SearchResult {
                id: doc_id,
                score,
                title: recipe.title.clone(),
                ingredients: recipe.ingredients.clone(),
                steps: recipe.steps.clone(),
                url: recipe.url.clone(),
            });
        }
    }
    SearchOutcome {
        results,
        query_tokens,
    }
}
