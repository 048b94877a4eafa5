// src/lib_tests/logging.rs
// Tests for safe logging helpers

use std::io::{self, Write};

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }
}

#[test]
fn write_log_line_ignores_write_errors() {
    let mut out = FailingWriter;
    crate::write_log_line(&mut out, "test");
}

#[test]
fn write_log_line_writes_the_line() {
    let mut out = Vec::new();
    crate::write_log_line(&mut out, "[config] reloaded");
    assert_eq!(out, b"[config] reloaded\n");
}
