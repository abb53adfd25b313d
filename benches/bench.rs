//! Criterion benchmarks for text-ripper.
//!
//! Covers the per-row hot paths:
//! - Pre-filter normalization
//! - Word tokenization (whitespace and Lindera engines)
//! - Frequency counting and rank cuts

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use text_ripper::analysis::morphology::lindera::LinderaAnalyzer;
use text_ripper::analysis::morphology::whitespace::WhitespaceAnalyzer;
use text_ripper::analysis::tokenizer::{TokenizerConfig, WordTokenizer};
use text_ripper::plugin::kana::KanaLikeCountPlugin;
use text_ripper::prefilter::neologd::NeologdNormalizer;
use text_ripper::ranking::{RankDirection, WordCounter, filter_by_rank};

const JAPANESE_TEXTS: &[&str] = &[
    "東京タワーは１９５８年に完成した電波塔です。",
    "ﾊﾝｶｸｶﾀｶﾅ の 文章 を 正規化 します～",
    "スーーーパーで　ＡＢＣ　の商品を買いました！",
    "日本語の形態素解析を行うことができます。",
    "いちにさん と えーびーしー を 数える",
];

/// Generate whitespace separated rows drawn from a small vocabulary.
fn generate_rows(count: usize) -> Vec<String> {
    let words = [
        "word", "count", "rank", "top", "last", "stop", "filter", "plugin", "text", "row",
        "column", "header", "token", "noun", "verb",
    ];

    (0..count)
        .map(|i| {
            (0..12)
                .map(|j| words[(i * 7 + j * j) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_prefilter(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefilter");
    let normalizer = NeologdNormalizer::new().unwrap();
    let kana = KanaLikeCountPlugin::alphanum().unwrap();

    group.throughput(Throughput::Elements(JAPANESE_TEXTS.len() as u64));
    group.bench_function("neologd_normalize", |b| {
        b.iter(|| {
            for text in JAPANESE_TEXTS {
                black_box(normalizer.normalize(black_box(text)));
            }
        })
    });

    group.bench_function("kana_alphanum_count", |b| {
        b.iter(|| {
            for text in JAPANESE_TEXTS {
                black_box(kana.count(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let rows = generate_rows(100);

    let whitespace = WordTokenizer::new(
        Box::new(WhitespaceAnalyzer::new()),
        TokenizerConfig::default(),
    );
    group.throughput(Throughput::Elements(rows.len() as u64));
    group.bench_function("whitespace_rows", |b| {
        b.iter(|| {
            for row in &rows {
                black_box(whitespace.tokenize(black_box(row)).unwrap());
            }
        })
    });

    let lindera = WordTokenizer::new(
        Box::new(LinderaAnalyzer::with_default_dictionary().unwrap()),
        TokenizerConfig::default(),
    );
    group.throughput(Throughput::Elements(JAPANESE_TEXTS.len() as u64));
    group.bench_function("lindera_sentences", |b| {
        b.iter(|| {
            for text in JAPANESE_TEXTS {
                black_box(lindera.tokenize(black_box(text)).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    let rows = generate_rows(1000);

    group.throughput(Throughput::Elements(rows.len() as u64));
    group.bench_function("count_rows", |b| {
        b.iter(|| {
            let mut counter = WordCounter::new(false);
            for row in &rows {
                counter.add_words(row.split(' '));
            }
            black_box(counter.into_result())
        })
    });

    let mut counter = WordCounter::new(false);
    for row in &rows {
        counter.add_words(row.split(' '));
    }
    let result = counter.into_result();
    group.bench_function("filter_by_rank", |b| {
        b.iter(|| {
            black_box(filter_by_rank(
                &result.list,
                result.total_count,
                black_box(5),
                black_box(0.5),
                RankDirection::Top,
            ));
            black_box(filter_by_rank(
                &result.list,
                result.total_count,
                black_box(5),
                black_box(0.1),
                RankDirection::Last,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_prefilter, bench_tokenize, bench_ranking);
criterion_main!(benches);
