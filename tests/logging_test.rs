use email_metadata::scan;
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run a scan with a subscriber that records every event.
fn scan_with_logs(dir: &TempDir) -> (String, String) {
    let logs = Captured::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut out = Vec::new();
    tracing::subscriber::with_default(subscriber, || scan(dir.path(), &mut out)).unwrap();

    (String::from_utf8(out).unwrap(), logs.text())
}

#[test]
fn test_skipped_file_logs_warning_with_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "just some notes\n").unwrap();
    fs::write(dir.path().join("z.eml"), "Subject: ok\r\n\r\n").unwrap();

    let (out, logs) = scan_with_logs(&dir);
    let path = dir.path().join("notes.txt").display().to_string();

    let warning = logs
        .lines()
        .find(|line| line.contains("WARN"))
        .expect("a warning line");
    assert!(warning.contains(&path));
    assert!(out.contains("z.eml"));
}

#[test]
fn test_bad_received_date_is_not_logged() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.eml"),
        "Received: by mx id X for y@example.com; not-a-date\r\n\
         Date: Thu, 01 Jan 2025 12:00:00 +0000\r\n\
         \r\n",
    )
    .unwrap();

    let (out, logs) = scan_with_logs(&dir);

    assert!(out.contains("X,"));
    assert!(!logs.contains("WARN"));
    assert!(!logs.contains("ERROR"));
    assert!(!logs.contains("not-a-date"));
}
