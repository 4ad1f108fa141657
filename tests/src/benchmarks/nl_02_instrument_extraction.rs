//! # NL-02 Instrument Extraction Benchmarks
//!
//! Per-record extraction for both paths, and a full inbox scan where a third
//! of the receipts are skipped at the type gate.

use crate::fixtures::{alice, cheque, purse, PaymentsInbox};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use nl_01_box_ledger::TransactionKind;
use nl_02_instrument_extraction::{InstrumentExtractionApi, PaymentInstrumentExtractor};
use shared_types::TransactionNumber;

/// Encrypted and plain paths on a promoted record.
pub fn extract_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("nl-02-extract-single");

    let inbox = PaymentsInbox::new(2);
    inbox.post(
        1,
        TransactionKind::InstrumentNotice,
        Some(inbox.sealed_notice(&cheque(100))),
    );
    inbox.post(
        2,
        TransactionKind::Notice,
        Some(inbox.plain_notice(&purse(&[1, 5, 10, 25]))),
    );
    let extractor = PaymentInstrumentExtractor::with_keyring(inbox.keyring.clone());
    let reader = alice();

    group.bench_function("encrypted_notice", |b| {
        b.iter(|| {
            black_box(extractor.extract(&reader, inbox.ledger.as_ref(), TransactionNumber(1)))
        })
    });

    group.bench_function("plain_notice", |b| {
        b.iter(|| {
            black_box(extractor.extract(&reader, inbox.ledger.as_ref(), TransactionNumber(2)))
        })
    });

    group.finish();
}

/// Scan a whole payments inbox.
pub fn extract_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("nl-02-extract-all");

    for size in [30u64, 300, 3_000] {
        let inbox = PaymentsInbox::new(size);
        inbox.populate(1, size);
        let extractor = PaymentInstrumentExtractor::with_keyring(inbox.keyring.clone());
        let reader = alice();

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("mixed_inbox", size), &size, |b, _| {
            b.iter(|| black_box(extractor.extract_all(&reader, inbox.ledger.as_ref()).len()))
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    extract_single(c);
    extract_all(c);
}
