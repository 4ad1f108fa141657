//! # Integration Test Flows
//!
//! Tests that nl-01-box-ledger and nl-02-instrument-extraction work together
//! over real signatures, sealed envelopes and box receipt stores.
//!
//! ## Flows Tested:
//!
//! 1. **Inbox scan**: abbreviated inbox → promotion → extraction, in ledger order
//! 2. **Concurrent readers**: many tasks resolve and extract the same receipt
//! 3. **Restart**: receipts persisted by `FileBoxReceiptStore` promote in a fresh ledger
//! 4. **Diagnostics**: failures are reported, never raised

#[cfg(test)]
mod tests {
    use crate::fixtures::{alice, bob, cheque, notary, purse, PaymentsInbox};
    use nl_01_box_ledger::{
        BoxLedgerApi, BoxReceiptStore, FileBoxReceiptStore, InMemoryBoxReceiptStore,
        IssuedNumberRegistry, Ledger, NotarySignatureVerifier, TransactionKind, TransactionRecord,
    };
    use nl_02_instrument_extraction::{
        ExtractionCategory, InstrumentExtractionApi, PaymentInstrumentExtractor,
        RecordingDiagnostics, TracingDiagnostics,
    };
    use notary_telemetry::{log_instrument_event, log_receipt_event, subsystem_span};
    use shared_types::{BoxType, IdentityId, TransactionNumber};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Store that takes a while to answer, to widen race windows.
    struct SlowStore {
        inner: Arc<InMemoryBoxReceiptStore>,
        delay: Duration,
        loads: AtomicUsize,
    }

    impl BoxReceiptStore for SlowStore {
        fn load(
            &self,
            owner: &IdentityId,
            box_type: BoxType,
            number: TransactionNumber,
        ) -> Option<Vec<u8>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(self.delay);
            self.inner.load(owner, box_type, number)
        }
    }

    fn extractor(inbox: &PaymentsInbox) -> (PaymentInstrumentExtractor, Arc<RecordingDiagnostics>) {
        let diagnostics = Arc::new(RecordingDiagnostics::new());
        let extractor = PaymentInstrumentExtractor::with_keyring(inbox.keyring.clone())
            .with_diagnostics(diagnostics.clone());
        (extractor, diagnostics)
    }

    // =============================================================================
    // INBOX SCAN
    // =============================================================================

    #[test]
    fn test_inbox_scan_extracts_in_ledger_order() {
        notary_telemetry::init_test_tracing();
        let inbox = PaymentsInbox::new(100);
        inbox.populate(1, 30);
        let (extractor, diagnostics) = extractor(&inbox);

        assert_eq!(inbox.ledger.abbreviated_count(), 30);

        let _span = subsystem_span!("scan_box", subsystem = "nl-tests").entered();
        let found = extractor.extract_all(&alice(), inbox.ledger.as_ref());
        for (number, instrument) in &found {
            log_instrument_event!(debug, "nl-tests", "instrument found", number, instrument.type_name());
        }

        // 10 encrypted notices and 10 plain notices; cheque receipts skipped.
        assert_eq!(found.len(), 20);
        assert!(found.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(found.iter().all(|(number, instrument)| match number.value() % 3 {
            0 => *instrument == cheque(number.value() as i64),
            _ => *instrument == purse(&[number.value()]),
        }));
        assert!(diagnostics.is_empty());
        assert_eq!(inbox.ledger.full_count(), 20);
        assert_eq!(inbox.store.load_count(), 20);
    }

    #[test]
    fn test_second_scan_does_no_io() {
        let inbox = PaymentsInbox::new(100);
        inbox.populate(1, 12);
        let (extractor, _) = extractor(&inbox);

        let first = extractor.extract_all(&alice(), inbox.ledger.as_ref());
        let loads = inbox.store.load_count();
        let second = extractor.extract_all(&alice(), inbox.ledger.as_ref());

        assert_eq!(first, second);
        assert_eq!(inbox.store.load_count(), loads);
    }

    // =============================================================================
    // CONCURRENT READERS
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_extract_promotes_once() {
        let store = Arc::new(InMemoryBoxReceiptStore::new());
        let slow = Arc::new(SlowStore {
            inner: store.clone(),
            delay: Duration::from_millis(20),
            loads: AtomicUsize::new(0),
        });
        let inbox = PaymentsInbox::with_store(10, store, slow.clone());
        inbox.post(
            7,
            TransactionKind::InstrumentNotice,
            Some(inbox.sealed_notice(&cheque(250))),
        );
        let extractor = Arc::new(extractor(&inbox).0);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let ledger = inbox.ledger.clone();
            let extractor = extractor.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                let record = ledger.resolve(TransactionNumber(7)).expect("resolves");
                let instrument =
                    extractor.extract(&alice(), ledger.as_ref(), TransactionNumber(7));
                (record, instrument)
            }));
        }

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.expect("task completes"));
        }

        assert_eq!(slow.loads.load(Ordering::SeqCst), 1);
        let (first, _) = &results[0];
        for (record, instrument) in &results {
            assert!(record.same_receipt(first));
            assert_eq!(instrument.as_ref(), Some(&cheque(250)));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_distinct_numbers_resolve_in_parallel() {
        let inbox = PaymentsInbox::new(100);
        inbox.populate(1, 40);

        let mut handles = Vec::new();
        for number in 1..=40u64 {
            let ledger = inbox.ledger.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                ledger.resolve(TransactionNumber(number)).is_ok()
            }));
        }
        for handle in handles {
            assert!(handle.await.expect("task completes"));
        }

        assert_eq!(inbox.store.load_count(), 40);
        assert_eq!(inbox.ledger.abbreviated_count(), 0);
    }

    // =============================================================================
    // RESTART
    // =============================================================================

    #[test]
    fn test_file_store_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = PaymentsInbox::new(10);
        let files = FileBoxReceiptStore::new(dir.path());

        let notice = writer.receipt(
            3,
            TransactionKind::Notice,
            Some(writer.plain_notice(&purse(&[5, 10]))),
        );
        files.put_receipt(&notice).expect("write receipt");

        // A fresh ledger only knows the abbreviated record.
        let numbers = IssuedNumberRegistry::new();
        numbers.issue(&notary(), &alice(), TransactionNumber(3));
        let verifier = NotarySignatureVerifier::new()
            .with_notary(notary(), writer.notary_keys.public_key());
        let ledger = Ledger::new(
            notary(),
            alice(),
            BoxType::PaymentsInbox,
            Arc::new(files),
            Arc::new(verifier),
        );
        ledger
            .insert(
                TransactionRecord::abbreviated(
                    TransactionNumber(3),
                    TransactionKind::Notice,
                    alice(),
                    notice.abbreviate(),
                ),
                &numbers,
            )
            .expect("insert");

        let (extractor, _) = extractor(&writer);
        assert_eq!(
            extractor.extract(&alice(), &ledger, TransactionNumber(3)),
            Some(purse(&[5, 10]))
        );
    }

    // =============================================================================
    // DIAGNOSTICS
    // =============================================================================

    #[test]
    fn test_failures_become_diagnostics() {
        notary_telemetry::init_test_tracing();
        let inbox = PaymentsInbox::new(10);
        inbox.post(1, TransactionKind::Transfer, None);
        inbox.post(2, TransactionKind::Notice, Some("{broken".to_string()));
        inbox.post(3, TransactionKind::InstrumentNotice, Some(inbox.sealed_notice(&cheque(-1))));
        inbox.post(4, TransactionKind::Notice, None);
        inbox.store.remove(&alice(), BoxType::PaymentsInbox, TransactionNumber(4));
        let (extractor, diagnostics) = extractor(&inbox);

        for n in 1..=5 {
            assert!(extractor
                .extract(&alice(), inbox.ledger.as_ref(), TransactionNumber(n))
                .is_none());
        }

        let records = diagnostics.records();
        for d in &records {
            log_receipt_event!(info, "nl-tests", "extraction failed", inbox.ledger.address(), d.number, stage = %d.stage);
        }
        let categories: Vec<_> = records.iter().map(|d| d.category).collect();
        assert_eq!(
            categories,
            vec![
                ExtractionCategory::TypeMismatch,
                ExtractionCategory::MalformedReference,
                ExtractionCategory::InvalidInstrument,
                ExtractionCategory::Unavailable,
                ExtractionCategory::Unavailable,
            ]
        );
    }

    #[test]
    fn test_tracing_sink_with_other_reader() {
        notary_telemetry::init_test_tracing();
        let inbox = PaymentsInbox::new(10);
        inbox.keyring.generate_for(bob());
        inbox.post(
            1,
            TransactionKind::InstrumentNotice,
            Some(inbox.sealed_notice(&cheque(5))),
        );
        let extractor = PaymentInstrumentExtractor::with_keyring(inbox.keyring.clone())
            .with_diagnostics(Arc::new(TracingDiagnostics));

        assert!(extractor
            .extract(&bob(), inbox.ledger.as_ref(), TransactionNumber(1))
            .is_none());
        assert_eq!(
            extractor.extract(&alice(), inbox.ledger.as_ref(), TransactionNumber(1)),
            Some(cheque(5))
        );
        assert_eq!(inbox.ledger.len(), 1);
    }
}
