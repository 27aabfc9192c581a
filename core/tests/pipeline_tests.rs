use ricetta_core::{load, search, RawRow, SourceColumns};

fn row(title: &str, ingredients: &str, steps: &str, url: &str) -> RawRow {
    RawRow {
        title: title.to_string(),
        ingredients_raw: ingredients.to_string(),
        steps_raw: steps.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn finds_carbonara_by_title_token() {
    let ctx = load(
        vec![row(
            "Pasta alla Carbonara",
            "['guanciale', 'uova', 'pecorino']",
            "Scalda l'olio con il Pecorino. Aggiungi la pasta",
            "",
        )],
        SourceColumns::default(),
    );

    let outcome = search(&ctx, "carbonara", 12);
    assert_eq!(outcome.results.len(), 1);
    let hit = &outcome.results[0];
    assert_eq!(hit.title, "Pasta alla Carbonara");
    assert!(hit.score > 0.0);
    assert_eq!(hit.ingredients, vec!["guanciale", "uova", "pecorino"]);
    assert_eq!(
        hit.steps,
        vec!["Scalda l'olio con il Pecorino.", "Aggiungi la pasta."]
    );
    assert_eq!(hit.url, "#");
    assert!(outcome.query_tokens.contains(&"carbonara".to_string()));
}

#[test]
fn empty_query_returns_empty_outcome() {
    let ctx = load(
        vec![row("Pasta al Pomodoro", "['pomodoro']", "Cuoci.", "")],
        SourceColumns::default(),
    );
    let outcome = search(&ctx, "", 12);
    assert!(outcome.results.is_empty());
    assert!(outcome.query_tokens.is_empty());

    let outcome = search(&ctx, "   ", 12);
    assert!(outcome.results.is_empty());
}

#[test]
fn empty_dataset_answers_without_error() {
    let ctx = load(Vec::new(), SourceColumns::default());
    assert!(ctx.store.is_empty());
    assert!(search(&ctx, "qualsiasi cosa", 12).results.is_empty());
}

#[test]
fn limit_truncates_positive_scores() {
    let rows: Vec<RawRow> = (0..10)
        .map(|i| {
            row(
                &format!("Pasta della nonna {i}"),
                "['pasta', 'pomodoro']",
                "Cuoci la pasta.",
                "",
            )
        })
        .collect();
    let ctx = load(rows, SourceColumns::default());

    let outcome = search(&ctx, "pasta", 3);
    assert_eq!(outcome.results.len(), 3);
    for window in outcome.results.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
    for hit in &outcome.results {
        assert!(hit.score > 0.0);
    }
}

#[test]
fn zero_score_documents_are_filtered() {
    let ctx = load(
        vec![
            row("Lasagne alla Bolognese", "['ragù', 'besciamella']", "", ""),
            row("Tiramisù", "['mascarpone', 'savoiardi']", "", ""),
        ],
        SourceColumns::default(),
    );
    let outcome = search(&ctx, "mascarpone", 12);
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].title, "Tiramisù");
}

#[test]
fn rows_without_title_are_dropped_and_ids_stay_aligned() {
    let ctx = load(
        vec![
            row("", "['sale']", "", ""),
            row("Focaccia", "['farina', 'olio']", "Impasta e inforna.", ""),
        ],
        SourceColumns::default(),
    );
    assert_eq!(ctx.store.len(), 1);
    assert_eq!(ctx.index.doc_count, 1);

    let outcome = search(&ctx, "focaccia", 12);
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].id, 0);
}

#[test]
fn missing_steps_get_placeholder_sentence() {
    let ctx = load(
        vec![row("Insalata", "['lattuga']", "", "https://example.com/insalata")],
        SourceColumns::default(),
    );
    let recipe = ctx.store.get(0).unwrap();
    assert_eq!(recipe.steps, vec!["Procedimento non disponibile."]);
    assert_eq!(recipe.url, "https://example.com/insalata");
}

#[test]
fn reloading_the_same_rows_scores_identically() {
    let rows = vec![
        row(
            "Spaghetti alla Carbonara",
            "['guanciale', 'uova', 'pecorino']",
            "Mescola e servi.",
            "",
        ),
        row(
            "Bucatini all'Amatriciana",
            "['guanciale', 'pomodoro', 'pecorino']",
            "Soffriggi il guanciale.",
            "",
        ),
    ];
    let a = load(rows.clone(), SourceColumns::default());
    let b = load(rows, SourceColumns::default());

    let qa = search(&a, "guanciale pecorino", 12);
    let qb = search(&b, "guanciale pecorino", 12);
    let scores_a: Vec<f32> = qa.results.iter().map(|r| r.score).collect();
    let scores_b: Vec<f32> = qb.results.iter().map(|r| r.score).collect();
    assert_eq!(scores_a, scores_b);
}
