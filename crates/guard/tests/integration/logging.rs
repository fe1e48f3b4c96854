use std::io;
use std::sync::{Arc, Mutex};

use nebula_guard::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn rejection_emits_debug_event() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _ = prop("Ratio").finite(f64::NAN);
        let _ = prop("Ratio").finite(1.0);
    });

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert_eq!(output.matches("guard rejected value").count(), 1, "{output}");
    assert!(output.contains("nebula_guard"), "{output}");
    assert!(output.contains("name=Ratio"), "{output}");
    assert!(output.contains("code=\"finite\""), "{output}");
}
