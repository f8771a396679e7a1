use criterion::{criterion_group, criterion_main, Criterion};
use faqdex_core::{StopwordFilter, Tokenizer, UnicodeSegmenter};

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new(
        Box::new(UnicodeSegmenter),
        StopwordFilter::from_reader("the\nand\nto\nof\n".as_bytes()).unwrap(),
    );
    let text = "How to configure git to use a proxy? Set http.proxy and \
                https.proxy in ~/.gitconfig, or export HTTP_PROXY before \
                cloning. Remember to unset them afterwards."
        .repeat(64);
    c.bench_function("tokenize_notes", |b| b.iter(|| tokenizer.tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
