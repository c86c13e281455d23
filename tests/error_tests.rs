use post_classifier::{ClassifyError, PostBatch};

#[test]
fn test_missing_collection_message() {
    let err = PostBatch::from_posts(None).unwrap_err();
    assert!(matches!(err, ClassifyError::NoPosts));
    assert_eq!(err.to_string(), "No posts returned");
}

#[test]
fn test_exit_codes() {
    assert_eq!(ClassifyError::NoPosts.exit_code(), 2);
    assert_eq!(ClassifyError::Parse("bad".to_string()).exit_code(), 65);
    assert_eq!(ClassifyError::Io("gone".to_string()).exit_code(), 66);
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let err = PostBatch::load_from_json(r#"{"text": "not an array"}"#).unwrap_err();
    assert!(matches!(err, ClassifyError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse posts JSON"));
}

#[test]
fn test_missing_fields_default_to_empty() {
    let batch = PostBatch::load_from_json(r#"[{}]"#).expect("empty post should load");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.records()[0].text(), "");
}
