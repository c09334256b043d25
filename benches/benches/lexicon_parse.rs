// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use gloss_lexicon::{Glossary, TermTrie, tokenize};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Pseudo-words of 3..=10 lowercase letters.
fn gen_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let len = 3 + rng.next_usize(8);
        let mut w = String::with_capacity(len);
        for _ in 0..len {
            let c = b'a' + rng.next_usize(26) as u8;
            w.push(c as char);
        }
        out.push(w);
    }
    out
}

/// Prose mixing dictionary terms (roughly one word in four) with filler.
fn gen_prose(terms: &[String], word_count: usize, seed: u64) -> String {
    let filler = gen_words(256, seed ^ 0x5EED);
    let mut rng = Rng::new(seed);
    let mut out = String::new();
    for i in 0..word_count {
        if i > 0 {
            out.push(' ');
        }
        if rng.next_usize(4) == 0 {
            out.push_str(&terms[rng.next_usize(terms.len())]);
        } else {
            out.push_str(&filler[rng.next_usize(filler.len())]);
        }
    }
    out
}

fn bench_trie_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_build");
    for &n in &[64usize, 512, 4096] {
        let terms = gen_words(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_n{}", n), |b| {
            b.iter(|| {
                let trie = TermTrie::from_terms(&terms);
                black_box(trie.len());
            })
        });
    }
    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for &n in &[64usize, 512, 4096] {
        let terms = gen_words(n, 0xBADC_F00D_1234_5678);
        let trie = TermTrie::from_terms(&terms);
        let prose = gen_prose(&terms, 2_000, 0xC1A5_7E55_9999_ABCD);
        group.throughput(Throughput::Bytes(prose.len() as u64));
        group.bench_function(format!("dict_n{}", n), |b| {
            b.iter(|| {
                let tokens = tokenize(&trie, &prose);
                black_box(tokens.len());
            })
        });
    }
    group.finish();
}

fn bench_glossary_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("glossary");
    let terms = gen_words(512, 0xFACE_FEED_CAFE_BABE);
    let glossary = Glossary::from_entries(
        terms
            .iter()
            .map(|t| (t.clone(), format!("definition of {t}"))),
    );
    let prose = gen_prose(&terms, 2_000, 0x0DDB_A11_5EED);
    group.throughput(Throughput::Bytes(prose.len() as u64));
    group.bench_function("tokenize_prose", |b| {
        b.iter(|| {
            let tokens = glossary.tokenize(&prose);
            black_box(tokens.len());
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_trie_build,
    bench_tokenize,
    bench_glossary_tokenize,
);
criterion_main!(benches);
