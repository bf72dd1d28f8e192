use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordcube::trie::Trie;

fn words() -> Vec<String> {
    // Every four-letter word over a small alphabet.
    let letters = ['A', 'E', 'I', 'N', 'O', 'R', 'S', 'T'];
    let mut result = vec![];
    for a in letters.iter() {
        for b in letters.iter() {
            for c in letters.iter() {
                for d in letters.iter() {
                    result.push([*a, *b, *c, *d].iter().collect());
                }
            }
        }
    }
    result
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let words = words();

    c.bench_function("build_trie", |b| {
        b.iter(|| Trie::build(black_box(&words)).unwrap());
    });

    let trie = Trie::build(&words).unwrap();

    c.bench_function("is_word", |b| {
        b.iter(|| trie.is_word(black_box("RATS")));
    });

    c.bench_function("children", |b| {
        b.iter(|| black_box(trie.root()).children().count());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
