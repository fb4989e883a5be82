//! Diagnostic logging must not change outcomes or leak credentials.

use std::io;
use std::sync::{Arc, Mutex};

use lndconnect::{ConnectStringParser, ErrorKind};

const SECRET_MACAROON: &str = "c2VjcmV0LW1hY2Fyb29u";

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[test]
fn failures_are_logged() {
    let (result, logs) = with_captured_logs(|| {
        ConnectStringParser::new().parse("lndconnect://10.0.0.1:10009?cert=Zm9v")
    });
    assert_eq!(result, Err(ErrorKind::InvalidCertificate));
    assert!(logs.contains("certificate creation failed"), "logs: {logs}");
}

#[test]
fn missing_macaroon_is_logged() {
    let (result, logs) = with_captured_logs(|| {
        ConnectStringParser::new().parse("lndconnect://10.0.0.1:10009?foo=bar")
    });
    assert_eq!(result, Err(ErrorKind::NoMacaroon));
    assert!(logs.contains("does not include a macaroon"), "logs: {logs}");
}

#[test]
fn outcome_is_identical_with_and_without_subscriber() {
    let inputs = [
        "lndconnect://10.0.0.1:10009?macaroon=YWJjZA",
        "lndconnect://10.0.0.1:10009?macaroon=!!!",
        "http://10.0.0.1:10009?macaroon=YWJjZA",
        "lndconnect://10.0.0.1?macaroon=YWJjZA",
    ];
    let parser = ConnectStringParser::new();
    for input in inputs {
        let (logged, _) = with_captured_logs(|| parser.parse(input));
        assert_eq!(logged, parser.parse(input), "input: {input}");
    }
}

#[test]
fn macaroon_never_appears_in_logs() {
    let inputs = [
        format!("lndconnect://10.0.0.1:10009?cert=Zm9v&macaroon={SECRET_MACAROON}"),
        format!("lndconnect://10.0.0.1:10009?macaroon={SECRET_MACAROON}!"),
        format!("lndconnect://10.0.0.1?macaroon={SECRET_MACAROON}"),
        format!("lndconnect://10.0.0.1:10009?macaroon={SECRET_MACAROON}"),
    ];
    for input in &inputs {
        let (_, logs) = with_captured_logs(|| ConnectStringParser::new().parse(input.as_str()));
        assert!(!logs.contains(SECRET_MACAROON), "leaked in: {logs}");
    }
}
