use checklist_core::{BlobError, Checklist, Item};

fn texts<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'a str> {
    items.map(|item| item.text.as_str()).collect()
}

#[test]
fn partitions_cover_every_item_exactly_once() {
    let mut list = Checklist::new();
    let a = list.add_item("a").id;
    list.add_item("b");
    let c = list.add_item("c").id;
    list.toggle_complete(a);
    list.toggle_complete(c);

    let view = list.view();
    assert_eq!(view.active_texts(), ["b"]);
    assert_eq!(view.complete_texts(), ["a", "c"]);
    assert_eq!(view.len(), list.len());
    for item in list.items() {
        let in_active = view.active.iter().any(|row| row.id == item.id);
        let in_complete = view.complete.iter().any(|row| row.id == item.id);
        assert!(in_active ^ in_complete, "item {} in both or neither", item.id);
    }
}

#[test]
fn remove_targets_instance_not_text() {
    let mut list = Checklist::new();
    let first = list.add_item("same").id;
    let second = list.add_item("same").id;

    let removed = list.remove_item(second).unwrap();
    assert_eq!(removed.id, second);
    assert_eq!(list.len(), 1);
    assert_eq!(list.items()[0].id, first);
}

#[test]
fn removing_twice_is_a_noop() {
    let mut list = Checklist::new();
    let keep = list.add_item("keep").id;
    let gone = list.add_item("gone").id;

    assert!(list.remove_item(gone).is_some());
    let after_first = list.clone();
    assert!(list.remove_item(gone).is_none());

    assert_eq!(list, after_first);
    assert!(list.get(keep).is_some());
}

#[test]
fn edit_to_empty_text_keeps_item_active() {
    let mut list = Checklist::sample("draft");
    let id = list.items()[0].id;

    assert!(list.edit_item(id, ""));
    assert_eq!(texts(list.active()), [""]);
}

#[test]
fn blob_uses_list_envelope_wire_fields() {
    let mut list = Checklist::new();
    let done = list.add_item("ship").id;
    list.add_item("line1\nline2");
    list.toggle_complete(done);

    let blob = list.to_blob().unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json["list"][0]["complete"], true);
    assert_eq!(json["list"][0]["text"], "ship");
    assert_eq!(json["list"][1]["complete"], false);
    assert_eq!(json["list"][1]["text"], "line1\nline2");
    assert!(json["list"][0].get("id").is_none());
}

#[test]
fn from_blob_accepts_envelope_and_bare_array() {
    let envelope = r#"{"list":[{"complete":true,"text":"x"},{"complete":false,"text":"y"}]}"#;
    let bare = r#"[{"complete":true,"text":"x"},{"complete":false,"text":"y"}]"#;

    let from_envelope = Checklist::from_blob(envelope).unwrap();
    let from_bare = Checklist::from_blob(bare).unwrap();
    assert_eq!(from_envelope, from_bare);
    assert_eq!(texts(from_envelope.complete()), ["x"]);
}

#[test]
fn from_blob_defaults_missing_item_fields() {
    let list = Checklist::from_blob(r#"{"list":[{"text":"only text"},{}]}"#).unwrap();
    assert_eq!(list.items()[0], Item::new("only text"));
    assert_eq!(list.items()[1], Item::new(""));
}

#[test]
fn from_blob_assigns_distinct_ids() {
    let list = Checklist::from_blob(r#"[{"text":"a"},{"text":"a"}]"#).unwrap();
    assert!(!list.items()[0].same_instance(&list.items()[1]));
}

#[test]
fn malformed_blob_carries_raw_text() {
    let raw = r#"{"list":[{"complete":"yes"}]}"#;
    match Checklist::from_blob(raw).unwrap_err() {
        BlobError::Deserialization { raw: carried, .. } => assert_eq!(carried, raw),
        other => panic!("unexpected error: {other}"),
    }

    let err = Checklist::from_blob("not json").unwrap_err();
    assert!(err.to_string().contains("malformed checklist blob"));
}
