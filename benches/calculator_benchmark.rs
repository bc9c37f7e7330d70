// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Operations - Validated arithmetic and scientific functions
// 2. Formatting - Display string generation across magnitudes
// 3. Key Sequences - End-to-end state transitions through the calculator
// ============================================================================

use calculator_core::numeric::{format_number, round_to_precision};
use calculator_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

// ============================================================================
// Operation Benchmarks
// ============================================================================

fn benchmark_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    let table = OperationTable::default();

    for symbol in ["+", "−", "×", "÷"] {
        group.bench_with_input(BenchmarkId::new("binary", symbol), &symbol, |b, symbol| {
            b.iter(|| black_box(table.evaluate(symbol, black_box(&[1234.5678, 0.1]))));
        });
    }

    for name in ["sin", "cos", "tan", "ln", "sqrt"] {
        group.bench_with_input(BenchmarkId::new("scientific", name), &name, |b, name| {
            b.iter(|| black_box(table.evaluate(name, black_box(&[42.0]))));
        });
    }

    group.bench_function("round_to_precision", |b| {
        b.iter(|| black_box(round_to_precision(black_box(0.1 + 0.2), 10)));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    for value in [7.0, 1234567.0, -98765.4321, 1.123456789012345, 1e21] {
        group.bench_with_input(
            BenchmarkId::from_parameter(value),
            &value,
            |b, value| {
                b.iter(|| black_box(format_number(black_box(*value))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Key Sequence Benchmarks
// ============================================================================

fn benchmark_key_sequences(c: &mut Criterion) {
    let calculator = CalculatorBuilder::new()
        .with_history_limit(100)
        .build(Arc::new(NoOpEventHandler))
        .unwrap();

    let chain: Vec<Key> = (0..50)
        .flat_map(|i| {
            [
                Key::Digit(char::from(b'1' + (i % 9) as u8)),
                Key::Operator(BinaryOperator::ALL[i % 4]),
            ]
        })
        .chain([Key::Digit('7'), Key::Equals])
        .collect();

    c.bench_function("key_sequence_chained_operators", |b| {
        b.iter(|| {
            black_box(calculator.apply_all(CalculatorState::new(), chain.iter().copied()))
        });
    });
}

criterion_group!(
    benches,
    benchmark_operations,
    benchmark_formatting,
    benchmark_key_sequences
);
criterion_main!(benches);
