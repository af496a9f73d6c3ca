use dispatch::http::Query;

#[test]
fn test_plus_and_percent_decoding() {
    let query = Query::parse("key=hello+big%20world");
    assert_eq!(query.get("key"), Some("hello big world"));
}

#[test]
fn test_last_value_wins() {
    let query = Query::parse("key=first&key=second");
    assert_eq!(query.get("key"), Some("second"));
    assert_eq!(query.len(), 1);
}

#[test]
fn test_empty_value_counts_as_absent() {
    let query = Query::parse("key=&flag");
    assert_eq!(query.get("key"), Some(""));
    assert_eq!(query.value("key"), None);
    assert_eq!(query.get("flag"), Some(""));
    assert_eq!(query.value("missing"), None);
}

#[test]
fn test_invalid_percent_sequences_are_kept_literally() {
    let query = Query::parse("a=%zz&b=%E2%82");
    assert_eq!(query.get("a"), Some("%zz"));
    assert_eq!(query.get("b"), Some("\u{fffd}"));
}

#[test]
fn test_empty_input() {
    assert!(Query::parse("").is_empty());
    assert!(Query::parse("&&&").is_empty());
}
