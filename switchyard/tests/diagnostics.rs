//! Diagnostic events emitted with the `tracing` feature.
#![cfg(feature = "tracing")]

use std::{
    io,
    sync::{Arc, Mutex, PoisonError},
};
use switchyard::{DispatchTable, Directive};
use tracing_subscriber::filter::LevelFilter;

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_registration_events() {
    let output = capture(|| {
        let _table: DispatchTable<u8, fn()> =
            DispatchTable::new([Directive::case(1, || {}), Directive::default(|| {})]);
    });

    assert!(output.contains("case registered"), "{output}");
    assert!(output.contains("default registered"), "{output}");
}

#[test]
fn test_rejected_directive_event() {
    let output = capture(|| {
        let result: Result<DispatchTable<u8, fn()>, _> = DispatchTable::try_from_directives([
            Directive::default(|| {}),
            Directive::default(|| {}),
        ]);
        assert!(result.is_err());
    });

    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("directive rejected"), "{output}");
    assert!(output.contains("only one default may be registered"), "{output}");
}

#[test]
fn test_fallback_event() {
    let output = capture(|| {
        let table: DispatchTable<u8, fn() -> u8> =
            DispatchTable::new([Directive::case(1, || 1), Directive::default(|| 0)]);
        assert_eq!(table.resolve_nullary(&1), 1);
        assert_eq!(table.resolve_nullary(&9), 0);
    });

    assert_eq!(output.matches("no case matched").count(), 1, "{output}");
    assert!(output.contains("has_default=true"), "{output}");
}
