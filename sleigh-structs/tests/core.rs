use sleigh_structs::{config::ReaderConfig, core::Gift, layout::*};

#[test]
fn test_numeric_id() {
    assert_eq!(Gift::new("42", "1.0", "2.0", "3").numeric_id(), Some(42));
    assert_eq!(Gift::new(" 7", "1.0", "2.0", "3").numeric_id(), Some(7));
    assert_eq!(Gift::new("8\t", "1.0", "2.0", "3").numeric_id(), Some(8));
    assert_eq!(Gift::new("-1", "1.0", "2.0", "3").numeric_id(), Some(-1));
    assert_eq!(Gift::new("x42", "1.0", "2.0", "3").numeric_id(), None);
    assert_eq!(Gift::new("4.5", "1.0", "2.0", "3").numeric_id(), None);
}

#[test]
fn test_reader_config_default() {
    let config = ReaderConfig::default();
    assert_eq!(config.delimiter, ',');
    assert_eq!(config.quote, '"');
    assert!(config.has_headers);
}

#[test]
fn test_layout_chain() {
    assert_eq!(ROOT_IDENTIFIER, 1);
    assert_eq!(LOCATION_LIST_IDENTIFIER, 2);
    assert_eq!(FIRST_LOCATION_IDENTIFIER, 3);
    assert_eq!(FLEET_SIZE, 3);
}
