//! Scanner Benchmarks
//!
//! Run with: `cargo bench --package lox-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lox_lex::{keywords, scan};
use lox_util::Handler;

fn scanner_token_count(source: &str) -> usize {
    let handler = Handler::new();
    scan(source, &handler).len()
}

fn bench_scanner_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "var x = 42; fun main() { var y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| scanner_token_count(black_box("var x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| scanner_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_program");

    let source = r#"
        // Recursive fibonacci
        fun fib(n) {
          if (n <= 1) return n;
          return fib(n - 2) + fib(n - 1);
        }

        /* Classes /* nested */ and inheritance */
        class Doughnut {
          cook() {
            print "Fry until golden brown.";
          }
        }

        class BostonCream < Doughnut {
          cook() {
            super.cook();
            print "Pipe full of custard and coat with chocolate.";
          }
        }

        for (var i = 0; i < 20; i = i + 1) {
          print fib(i) * 1.5;
        }
    "#
    .repeat(50);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_program", |b| {
        b.iter(|| scanner_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_keyword_lookup(c: &mut Criterion) {
    let words = ["and", "while", "classy", "print", "x", "return", "zebra"];

    c.bench_function("keyword_lookup", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| keywords::lookup(black_box(w)).is_some())
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_scanner_simple,
    bench_scanner_program,
    bench_keyword_lookup
);
criterion_main!(benches);
