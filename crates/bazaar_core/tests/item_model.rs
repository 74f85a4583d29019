use bazaar_core::{ItemDraft, ItemSummary, ItemValidationError};

#[test]
fn draft_with_name_passes_validation() {
    let draft = ItemDraft::new("Book A", 1, "img1.jpg");
    assert!(draft.validate().is_ok());
}

#[test]
fn draft_with_blank_name_fails_validation() {
    for bad in ["", " ", "\t\n"] {
        let draft = ItemDraft::new(bad, 1, "img1.jpg");
        assert_eq!(draft.validate(), Err(ItemValidationError::EmptyName));
    }
}

#[test]
fn summary_serialization_uses_expected_wire_fields() {
    let summary = ItemSummary {
        id: 7,
        name: "Book A".to_string(),
        category_name: "Books".to_string(),
        image_name: "img1.jpg".to_string(),
    };

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Book A");
    assert_eq!(json["category"], "Books");
    assert_eq!(json["image_name"], "img1.jpg");

    let decoded: ItemSummary = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, summary);
}
