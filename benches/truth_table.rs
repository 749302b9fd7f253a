use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use truth_table::core::process_line;
use truth_table::core::render::to_latex;
use truth_table::parser::DEFAULT_OPTIONS;

// Lowercase `v` is the disjunction, so it is not a symbol.
const LETTERS: &str = "abcdefghijklmnopqrstuwxyz";

/// `(a -> b) ^ (b -> c) ^ ... ^ !(a <-> z)` over the first `n` letters.
fn implication_chain(n: usize) -> String {
    let vars: Vec<char> = LETTERS.chars().take(n).collect();
    let links: Vec<String> = vars.windows(2).map(|w| format!("({} -> {})", w[0], w[1])).collect();
    format!("{} ^ !({} <-> {})", links.join(" ^ "), vars[0], vars[n - 1])
}

fn my_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("TruthTable");

    for n in [2, 4, 8, 12] {
        let line = implication_chain(n);
        group.bench_with_input(BenchmarkId::new("process_line", n), &line, |b, line| {
            b.iter(|| process_line(line, &DEFAULT_OPTIONS))
        });

        let table = process_line(&line, &DEFAULT_OPTIONS).unwrap();
        group.bench_with_input(BenchmarkId::new("to_latex", n), &table, |b, table| b.iter(|| to_latex(table)));
    }

    group.finish();
}

criterion_group!(benches, my_benches);
criterion_main!(benches);
