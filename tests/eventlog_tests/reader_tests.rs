//! Tests for Event Reader
//!
//! These tests verify:
//! - Reading events line by line
//! - End-of-file signalling
//! - Corruption reporting with line numbers
//! - Iterator behaviour
//! - Creating a missing file on open

use std::fs;
use std::path::PathBuf;

use linkstore::eventlog::{Event, EventReader, EventWriter};
use linkstore::LinkStoreError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_log() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("storage.txt");
    (temp_dir, log_path)
}

fn write_events(path: &PathBuf, events: &[Event]) {
    let mut writer = EventWriter::open(path).unwrap();
    for event in events {
        writer.write_event(event).unwrap();
    }
    writer.close().unwrap();
}

// =============================================================================
// Basic Reading Tests
// =============================================================================

#[test]
fn test_open_missing_file_creates_it() {
    let (_temp, log_path) = setup_temp_log();

    let mut reader = EventReader::open(&log_path).unwrap();

    assert!(log_path.exists());
    assert!(reader.read_event().unwrap().is_none());
}

#[test]
fn test_read_empty_file() {
    let (_temp, log_path) = setup_temp_log();
    fs::write(&log_path, b"").unwrap();

    let mut reader = EventReader::open(&log_path).unwrap();

    assert!(reader.read_event().unwrap().is_none());
    assert_eq!(reader.line_number(), 0);
}

#[test]
fn test_read_multiple_events_in_order() {
    let (_temp, log_path) = setup_temp_log();
    let events = vec![
        Event::new("a", "https://a.example/"),
        Event::new("b", "https://b.example/"),
        Event::new("a", "https://a2.example/"),
    ];
    write_events(&log_path, &events);

    let mut reader = EventReader::open(&log_path).unwrap();
    for (i, original) in events.iter().enumerate() {
        let event = reader.read_event().unwrap().unwrap();
        assert_eq!(&event, original, "Event {} mismatch", i);
        assert_eq!(reader.line_number(), (i + 1) as u64);
    }

    // Should reach EOF, and stay there
    assert!(reader.read_event().unwrap().is_none());
    assert!(reader.read_event().unwrap().is_none());
}

#[test]
fn test_read_last_line_without_terminator() {
    let (_temp, log_path) = setup_temp_log();
    fs::write(&log_path, br#"{"uuid":0,"short_url":"k","original_url":"v"}"#).unwrap();

    let mut reader = EventReader::open(&log_path).unwrap();

    assert_eq!(reader.read_event().unwrap().unwrap(), Event::new("k", "v"));
    assert!(reader.read_event().unwrap().is_none());
}

#[test]
fn test_read_crlf_line() {
    let (_temp, log_path) = setup_temp_log();
    fs::write(&log_path, b"{\"uuid\":0,\"short_url\":\"k\",\"original_url\":\"v\"}\r\n").unwrap();

    let mut reader = EventReader::open(&log_path).unwrap();

    assert_eq!(reader.read_event().unwrap().unwrap(), Event::new("k", "v"));
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_corrupt_line_reports_line_number() {
    let (_temp, log_path) = setup_temp_log();
    let good = String::from_utf8(Event::new("k", "v").encode().unwrap()).unwrap();
    fs::write(&log_path, format!("{}\nnot json\n{}\n", good, good)).unwrap();

    let mut reader = EventReader::open(&log_path).unwrap();

    assert!(reader.read_event().unwrap().is_some());
    match reader.read_event() {
        Err(LinkStoreError::Corruption { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected corruption, got {:?}", other),
    }

    // Direct reads may continue past the bad line
    assert_eq!(reader.read_event().unwrap().unwrap(), Event::new("k", "v"));
}

#[test]
fn test_empty_line_is_corruption() {
    let (_temp, log_path) = setup_temp_log();
    fs::write(&log_path, b"\n").unwrap();

    let mut reader = EventReader::open(&log_path).unwrap();

    let err = reader.read_event().unwrap_err();
    assert!(err.is_corruption());
}

#[test]
fn test_truncated_tail_is_corruption() {
    let (_temp, log_path) = setup_temp_log();
    write_events(&log_path, &[Event::new("k", "v")]);

    // Simulate a torn final append
    let mut bytes = fs::read(&log_path).unwrap();
    bytes.extend_from_slice(br#"{"uuid":0,"short_url":"x","orig"#);
    fs::write(&log_path, bytes).unwrap();

    let mut reader = EventReader::open(&log_path).unwrap();
    assert!(reader.read_event().unwrap().is_some());
    assert!(reader.read_event().unwrap_err().is_corruption());
}

// =============================================================================
// Iterator Tests
// =============================================================================

#[test]
fn test_iterator_empty_file() {
    let (_temp, log_path) = setup_temp_log();

    let reader = EventReader::open(&log_path).unwrap();

    assert_eq!(reader.count(), 0);
}

#[test]
fn test_iterator_collects_all_events() {
    let (_temp, log_path) = setup_temp_log();
    let events: Vec<Event> = (0..50)
        .map(|i| Event::new(format!("code{}", i), format!("https://example.com/{}", i)))
        .collect();
    write_events(&log_path, &events);

    let read: Vec<Event> = EventReader::open(&log_path)
        .unwrap()
        .collect::<linkstore::Result<_>>()
        .unwrap();

    assert_eq!(read, events);
}

#[test]
fn test_iterator_stops_after_first_error() {
    let (_temp, log_path) = setup_temp_log();
    let good = String::from_utf8(Event::new("k", "v").encode().unwrap()).unwrap();
    fs::write(&log_path, format!("{}\ngarbage\n{}\n", good, good)).unwrap();

    let items: Vec<_> = EventReader::open(&log_path).unwrap().collect();

    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

// =============================================================================
// Independence Tests
// =============================================================================

#[test]
fn test_readers_are_independent() {
    let (_temp, log_path) = setup_temp_log();
    write_events(&log_path, &[Event::new("a", "1"), Event::new("b", "2")]);

    let mut first = EventReader::open(&log_path).unwrap();
    let mut second = EventReader::open(&log_path).unwrap();

    assert_eq!(first.read_event().unwrap().unwrap().short_code, "a");
    assert_eq!(first.read_event().unwrap().unwrap().short_code, "b");
    assert_eq!(second.read_event().unwrap().unwrap().short_code, "a");
}
