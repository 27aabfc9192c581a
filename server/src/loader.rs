//! CSV dataset loading and column-name resolution.
//!
//! Datasets come from different exports with inconsistent headers, so each
//! canonical field is resolved case-insensitively against a synonym list.
//! Any failure (missing file, malformed CSV, no usable title column)
//! degrades to an empty dataset; the service keeps serving.

use anyhow::{Context, Result};
use ricetta_core::{RawRow, SearchContext, SourceColumns};
use std::path::Path;
use tracing::{info, warn};

const TITLE_SYNONYMS: &[&str] = &["nome", "title", "name"];
const INGREDIENT_SYNONYMS: &[&str] = &["ingredienti", "ingredients"];
const STEP_SYNONYMS: &[&str] = &["steps", "procedimento"];
const URL_SYNONYMS: &[&str] = &["link", "url"];

/// Load the dataset and build a search context, falling back to an empty
/// context (with a warning) when the CSV cannot be read. Never fails.
pub fn load_context(path: &Path) -> SearchContext {
    match read_rows(path) {
        Ok((rows, columns)) => ricetta_core::load(rows, columns),
        Err(err) => {
            warn!(error = %err, path = %path.display(), "dataset load failed, serving an empty index");
            ricetta_core::load(Vec::new(), SourceColumns::default())
        }
    }
}

/// Read the CSV into raw rows plus the header provenance. A title column
/// is required; the other fields fall back to empty strings per row.
pub fn read_rows(path: &Path) -> Result<(Vec<RawRow>, SourceColumns)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading csv header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let title_idx =
        find_column(&headers, TITLE_SYNONYMS).context("no title column in csv header")?;
    let ingredients_idx = find_column(&headers, INGREDIENT_SYNONYMS);
    let steps_idx = find_column(&headers, STEP_SYNONYMS);
    let url_idx = find_column(&headers, URL_SYNONYMS);

    let columns = SourceColumns {
        title: Some(headers[title_idx].clone()),
        ingredients: ingredients_idx.map(|i| headers[i].clone()),
        steps: steps_idx.map(|i| headers[i].clone()),
        url: url_idx.map(|i| headers[i].clone()),
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("reading csv record")?;
        let field = |idx: Option<usize>| -> String {
            idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
        };
        rows.push(RawRow {
            title: field(Some(title_idx)),
            ingredients_raw: field(ingredients_idx),
            steps_raw: field(steps_idx),
            url: field(url_idx),
        });
    }
    info!(num_rows = rows.len(), path = %path.display(), "csv read");
    Ok((rows, columns))
}

/// First header matching any synonym, in synonym priority order.
fn find_column(headers: &[String], synonyms: &[&str]) -> Option<usize> {
    synonyms
        .iter()
        .find_map(|syn| headers.iter().position(|h| h.to_lowercase() == *syn))
}
