use crate::index::DocId;
use serde::{Deserialize, Serialize};

/// One fully parsed recipe, immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Ingestion row order; joins this record to the ranking index.
    pub id: DocId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub url: String,
    /// Title + ingredients, concatenated for indexing only.
    pub search_text: String,
}

/// Which original dataset headers resolved to each canonical field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceColumns {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub url: Option<String>,
}

/// Ordered collection of parsed recipes plus their load-time provenance.
/// Records are keyed by row id; the store is never mutated after a load.
#[derive(Debug, Default)]
pub struct RecipeStore {
    records: Vec<Recipe>,
    columns: SourceColumns,
}

impl RecipeStore {
    pub fn new(records: Vec<Recipe>, columns: SourceColumns) -> Self {
        Self { records, columns }
    }

    pub fn get(&self, id: DocId) -> Option<&Recipe> {
        self.records.get(id as usize)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> &SourceColumns {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: DocId, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            ingredients: vec![],
            steps: vec!["Procedimento non disponibile.".to_string()],
            url: "#".to_string(),
            search_text: title.to_lowercase(),
        }
    }

    #[test]
    fn lookup_by_row_id() {
        let store = RecipeStore::new(
            vec![recipe(0, "Carbonara"), recipe(1, "Amatriciana")],
            SourceColumns::default(),
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().title, "Amatriciana");
        assert!(store.get(2).is_none());
    }

    #[test]
    fn keeps_column_provenance() {
        let columns = SourceColumns {
            title: Some("Nome".to_string()),
            ingredients: Some("Ingredienti".to_string()),
            steps: None,
            url: None,
        };
        let store = RecipeStore::new(vec![], columns);
        assert!(store.is_empty());
        assert_eq!(store.columns().title.as_deref(), Some("Nome"));
        assert!(store.columns().steps.is_none());
    }
}
