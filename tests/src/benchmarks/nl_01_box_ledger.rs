//! # NL-01 Box Ledger Benchmarks
//!
//! What to watch:
//! - Resolving a promoted record is a map lookup plus an `Arc` clone
//! - First promotion pays for load, decode, digest and signature check
//! - Lookups by index stay flat as the box grows

use crate::fixtures::PaymentsInbox;
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use nl_01_box_ledger::{BoxReceipt, TransactionKind};
use rand::Rng;
use shared_types::TransactionNumber;
use std::time::Duration;

/// Resolve on a record that is already full.
pub fn resolve_promoted(c: &mut Criterion) {
    let mut group = c.benchmark_group("nl-01-resolve-promoted");
    group.measurement_time(Duration::from_secs(5));

    for size in [100u64, 1_000, 10_000] {
        let inbox = PaymentsInbox::new(size);
        inbox.populate(1, size);
        for n in 1..=size {
            let _ = inbox.ledger.resolve(TransactionNumber(n));
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("random_number", size), &size, |b, &size| {
            let mut rng = rand::thread_rng();
            b.iter(|| {
                let number = TransactionNumber(rng.gen_range(1..=size));
                black_box(inbox.ledger.resolve(number).is_ok())
            })
        });
    }

    group.finish();
}

/// Cost of the first resolve: load, decode, verify, replace.
pub fn first_promotion(c: &mut Criterion) {
    let mut group = c.benchmark_group("nl-01-first-promotion");

    group.bench_function("signed_notice", |b| {
        b.iter_batched(
            || {
                let inbox = PaymentsInbox::new(1);
                inbox.post(1, TransactionKind::Notice, Some("x".repeat(512)));
                inbox
            },
            |inbox| black_box(inbox.ledger.resolve(TransactionNumber(1)).is_ok()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Box receipt codec on its own.
pub fn receipt_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("nl-01-receipt-codec");
    let inbox = PaymentsInbox::new(1);

    for reference_len in [64usize, 4_096, 65_536] {
        let receipt = inbox.receipt(
            1,
            TransactionKind::Notice,
            Some("r".repeat(reference_len)),
        );
        let bytes = BoxReceipt::encode(&receipt).unwrap_or_default();

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", reference_len),
            &bytes,
            |b, bytes| b.iter(|| black_box(BoxReceipt::decode(bytes).is_ok())),
        );
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    resolve_promoted(c);
    first_promotion(c);
    receipt_codec(c);
}
