use console_core::Batch;

#[test]
fn concat_keeps_batch_and_item_order() {
    let batch = Batch::concat([
        Batch::from(vec!["GET /a", "GET /b"]),
        Batch::none(),
        Batch::single("POST /c"),
    ]);

    assert_eq!(batch.len(), 3);
    assert_eq!(batch.as_slice(), &["GET /a", "GET /b", "POST /c"]);
}

#[test]
fn empty_batch_reports_empty() {
    let batch: Batch<String> = Batch::default();
    assert!(batch.is_empty());
    assert!(Batch::<u8>::from_iter(std::iter::empty()).is_empty());
}

#[test]
fn serializes_as_a_plain_sequence() {
    let batch: Batch<u8> = vec![1, 2].into();
    assert_eq!(serde_json::to_string(&batch).unwrap(), "[1,2]");
}
