//! Tests for the in-memory sink

use super::*;
use crate::app::services::output_sink::{MemorySink, RecordSink};

#[test]
fn test_memory_sink_keeps_write_order() {
    let mut sink = MemorySink::new();
    assert!(sink.is_empty());

    sink.write_record("b", &create_test_record()).unwrap();
    sink.write_record("a", &create_test_record()).unwrap();
    sink.finish().unwrap();

    assert_eq!(sink.len(), 2);
    let ids: Vec<&str> = sink.records().iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(sink.get("a"), Some(&create_test_record()));
    assert_eq!(sink.get("c"), None);
    assert_eq!(sink.into_records().len(), 2);
}
