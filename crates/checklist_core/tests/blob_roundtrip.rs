use checklist_core::{Checklist, Item};
use proptest::prelude::*;

fn item_strategy() -> impl Strategy<Value = Item> {
    (any::<bool>(), any::<String>()).prop_map(|(complete, text)| Item::with_state(complete, text))
}

proptest! {
    #[test]
    fn blob_roundtrip_preserves_order_and_fields(items in prop::collection::vec(item_strategy(), 0..16)) {
        let list = Checklist::from_items(items);
        let decoded = Checklist::from_blob(&list.to_blob().unwrap()).unwrap();
        prop_assert_eq!(decoded, list);
    }

    #[test]
    fn view_partitions_every_item(items in prop::collection::vec(item_strategy(), 0..16)) {
        let list = Checklist::from_items(items);
        let view = list.view();
        prop_assert_eq!(view.len(), list.len());
        prop_assert!(view.active.iter().all(|row| !row.complete));
        prop_assert!(view.complete.iter().all(|row| row.complete));
    }
}
