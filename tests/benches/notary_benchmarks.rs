//! # Notary-Ledger Benchmarks
//!
//! | Subsystem | Hot path |
//! |-----------|----------|
//! | nl-01 Box Ledger | resolve, first promotion, receipt decode |
//! | nl-02 Instrument Extraction | single extract, inbox scan |

use criterion::{criterion_group, criterion_main, Criterion};
use nl_tests::benchmarks::{nl_01_box_ledger, nl_02_instrument_extraction};

fn bench_box_ledger(c: &mut Criterion) {
    nl_01_box_ledger::register_benchmarks(c);
}

fn bench_instrument_extraction(c: &mut Criterion) {
    nl_02_instrument_extraction::register_benchmarks(c);
}

criterion_group!(benches, bench_box_ledger, bench_instrument_extraction);
criterion_main!(benches);
