use criterion::{criterion_group, criterion_main, Criterion};
use ricetta_core::tokenizer::tokenize;

fn bench_tokenize(c: &mut Criterion) {
    let text = "Scalda l'olio in padella con aglio e peperoncino, aggiungi i \
                pomodori pelati e cuoci per venti minuti. Sala l'acqua, cuoci \
                la pasta al dente, manteca con il pecorino e servi con \
                basilico fresco.";
    c.bench_function("tokenize_step_text", |b| b.iter(|| tokenize(text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
