//! Store Tests
//!
//! Cross-operation behaviour of ListStore against a manual clock and
//! in-memory storage.

use chrono::{Duration, TimeZone, Utc};

use super::ListStore;
use crate::clock::ManualClock;
use crate::config::CONFIG_KEY;
use crate::error::StoreError;
use crate::export::ExportRow;
use crate::model::{IngredientId, IngredientPatch, ListId};
use crate::persistence::{KeyValueStore, MemoryStorage, LISTS_KEY};
use crate::scaling::compute_display_quantity;

fn setup() -> (ListStore<ManualClock>, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
    (ListStore::with_clock(clock.clone()), clock)
}

fn new_list(store: &mut ListStore<ManualClock>, name: &str) -> ListId {
    store.create_list(name).expect("Failed to create list").id.clone()
}

fn display_of(store: &ListStore<ManualClock>, list_id: &ListId, id: &IngredientId) -> f64 {
    let list = store.list(list_id).unwrap();
    compute_display_quantity(list.find_ingredient(id).unwrap(), list.number_of_people)
}

#[test]
fn test_create_list() {
    let (mut store, _) = setup();
    let list = store.create_list("  Sunday Lunch ").unwrap();
    assert_eq!(list.name, "Sunday Lunch");
    assert!(list.ingredients.is_empty());
    assert_eq!(list.number_of_people, 1);
    assert_eq!(list.created_at, list.updated_at);
    let id = list.id.clone();
    assert_eq!(store.active_list_id(), Some(&id));
}

#[test]
fn test_create_list_rejects_blank_name() {
    let (mut store, _) = setup();
    assert!(matches!(store.create_list("   "), Err(StoreError::Validation(_))));
    assert!(store.is_empty());
    assert!(store.active_list().is_none());
}

#[test]
fn test_new_list_becomes_active() {
    let (mut store, _) = setup();
    let first = new_list(&mut store, "First");
    let second = new_list(&mut store, "Second");
    assert_eq!(store.active_list_id(), Some(&second));
    store.select_list(&first).unwrap();
    assert_eq!(store.active_list().unwrap().name, "First");
    assert!(matches!(store.select_list(&"nope".into()), Err(StoreError::NotFound(_))));
}

#[test]
fn test_display_quantity_tracks_people_count() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Curry");
    let cat = store.add_category(&list_id, "Veg").unwrap();
    let onion = store.add_sub_ingredient(&list_id, &cat, "Onion", 2.0, "pieces").unwrap();

    store.set_number_of_people(&list_id, 4).unwrap();
    assert_eq!(display_of(&store, &list_id, &onion), 8.0);

    store.set_number_of_people(&list_id, 1).unwrap();
    assert_eq!(display_of(&store, &list_id, &onion), 2.0);

    for k in [3, 9, 2, 9] {
        store.set_number_of_people(&list_id, k).unwrap();
        assert_eq!(display_of(&store, &list_id, &onion), 2.0 * f64::from(k));
    }
    let list = store.list(&list_id).unwrap();
    assert_eq!(list.find_ingredient(&onion).unwrap().base_quantity, 2.0);
}

#[test]
fn test_invalid_people_count_leaves_list_unchanged() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Party");
    store.set_number_of_people(&list_id, 6).unwrap();
    assert!(matches!(
        store.set_number_of_people(&list_id, 0),
        Err(StoreError::Validation(_))
    ));
    assert_eq!(store.list(&list_id).unwrap().number_of_people, 6);
}

#[test]
fn test_delete_category_cascades() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Picnic");
    let a = store.add_category(&list_id, "A").unwrap();
    let b = store.add_category(&list_id, "B").unwrap();
    store.add_sub_ingredient(&list_id, &a, "Bread", 1.0, "pieces").unwrap();
    store.add_sub_ingredient(&list_id, &a, "Butter", 50.0, "g").unwrap();
    let b1 = store.add_sub_ingredient(&list_id, &b, "Juice", 0.5, "liters").unwrap();

    assert_eq!(store.delete_ingredient(&list_id, &a).unwrap(), 3);

    let list = store.list(&list_id).unwrap();
    let ids: Vec<_> = list.ingredients.iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, vec![b, b1]);
}

#[test]
fn test_delete_sub_ingredient_removes_only_it() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Picnic");
    let a = store.add_category(&list_id, "A").unwrap();
    let bread = store.add_sub_ingredient(&list_id, &a, "Bread", 1.0, "pieces").unwrap();
    store.add_sub_ingredient(&list_id, &a, "Jam", 1.0, "pieces").unwrap();

    assert_eq!(store.delete_ingredient(&list_id, &bread).unwrap(), 1);
    assert_eq!(store.list(&list_id).unwrap().ingredients.len(), 2);
    assert_eq!(store.delete_ingredient(&list_id, &"ghost".into()).unwrap(), 0);
}

#[test]
fn test_duplicate_category_is_rejected_ignoring_case() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Pantry");
    store.add_category(&list_id, "spices").unwrap();
    let before = store.list(&list_id).unwrap().clone();

    let err = store.add_category(&list_id, "Spices ").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName(_)));
    assert_eq!(store.list(&list_id).unwrap(), &before);
}

#[test]
fn test_sub_ingredient_may_share_category_name() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Pantry");
    let cat = store.add_category(&list_id, "Rice").unwrap();
    store.add_sub_ingredient(&list_id, &cat, "Rice", 1.0, "kg").unwrap();
    store.add_sub_ingredient(&list_id, &cat, "rice", 1.0, "kg").unwrap();
    assert_eq!(store.list(&list_id).unwrap().ingredients.len(), 3);
}

#[test]
fn test_add_sub_ingredient_validation() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Bake");
    let cat = store.add_category(&list_id, "Dry").unwrap();
    let flour = store.add_sub_ingredient(&list_id, &cat, "Flour", 0.5, " kg ").unwrap();
    assert_eq!(store.list(&list_id).unwrap().find_ingredient(&flour).unwrap().base_unit, "kg");

    assert!(matches!(
        store.add_sub_ingredient(&list_id, &"missing".into(), "Sugar", 1.0, "g"),
        Err(StoreError::NotFound(_))
    ));
    // A sub-ingredient is not a valid parent
    assert!(matches!(
        store.add_sub_ingredient(&list_id, &flour, "Sugar", 1.0, "g"),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.add_sub_ingredient(&list_id, &cat, "  ", 1.0, "g"),
        Err(StoreError::Validation(_))
    ));
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            store.add_sub_ingredient(&list_id, &cat, "Sugar", bad, "g"),
            Err(StoreError::Validation(_))
        ));
    }
    assert!(matches!(
        store.add_category(&"missing".into(), "Wet"),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(store.list(&list_id).unwrap().ingredients.len(), 2);
}

#[test]
fn test_edit_ingredient_applies_patch() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Soup");
    let cat = store.add_category(&list_id, "Veg").unwrap();
    let carrot = store.add_sub_ingredient(&list_id, &cat, "Carrot", 1.0, "pieces").unwrap();

    store
        .edit_ingredient(
            &list_id,
            &carrot,
            IngredientPatch {
                name: Some(" Carrots ".into()),
                base_quantity: Some(3.0),
                base_unit: Some("kg".into()),
            },
        )
        .unwrap();
    let list = store.list(&list_id).unwrap();
    let edited = list.find_ingredient(&carrot).unwrap();
    assert_eq!(edited.name, "Carrots");
    assert_eq!(edited.base_quantity, 3.0);
    assert_eq!(edited.base_unit, "kg");
}

#[test]
fn test_edit_ingredient_rejects_invalid_values_atomically() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Soup");
    let cat = store.add_category(&list_id, "Veg").unwrap();
    let leek = store.add_sub_ingredient(&list_id, &cat, "Leek", 1.0, "pieces").unwrap();
    let before = store.list(&list_id).unwrap().clone();

    let patch = IngredientPatch {
        name: Some("Leeks".into()),
        base_quantity: Some(0.0),
        ..Default::default()
    };
    assert!(matches!(
        store.edit_ingredient(&list_id, &leek, patch),
        Err(StoreError::Validation(_))
    ));
    let patch = IngredientPatch { name: Some(" ".into()), ..Default::default() };
    assert!(store.edit_ingredient(&list_id, &leek, patch).is_err());
    assert_eq!(store.list(&list_id).unwrap(), &before);
}

#[test]
fn test_category_rename_keeps_names_unique() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Market");
    let fruit = store.add_category(&list_id, "Fruit").unwrap();
    store.add_category(&list_id, "Dairy").unwrap();

    let rename = |name: &str| IngredientPatch { name: Some(name.into()), ..Default::default() };
    assert!(matches!(
        store.edit_ingredient(&list_id, &fruit, rename("DAIRY")),
        Err(StoreError::DuplicateName(_))
    ));
    // Case-only change of its own name is fine
    store.edit_ingredient(&list_id, &fruit, rename("FRUIT")).unwrap();
    assert_eq!(store.list(&list_id).unwrap().find_ingredient(&fruit).unwrap().name, "FRUIT");
}

#[test]
fn test_category_ignores_quantity_patch() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Market");
    let fruit = store.add_category(&list_id, "Fruit").unwrap();
    let patch = IngredientPatch {
        base_quantity: Some(5.0),
        base_unit: Some("kg".into()),
        ..Default::default()
    };
    store.edit_ingredient(&list_id, &fruit, patch).unwrap();
    let cat = store.list(&list_id).unwrap().find_ingredient(&fruit).unwrap().clone();
    assert_eq!(cat.base_quantity, 0.0);
    assert_eq!(cat.base_unit, "");
}

#[test]
fn test_edit_unknown_ingredient_is_silent() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Market");
    let patch = IngredientPatch { name: Some("X".into()), ..Default::default() };
    assert!(store.edit_ingredient(&list_id, &"ghost".into(), patch).is_ok());
}

#[test]
fn test_export_omits_empty_categories() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Trip");
    store.add_category(&list_id, "A").unwrap();
    let b = store.add_category(&list_id, "B").unwrap();
    store.add_sub_ingredient(&list_id, &b, "Water", 2.0, "liters").unwrap();
    store.set_number_of_people(&list_id, 3).unwrap();

    let snapshot = store.export_snapshot(&list_id).unwrap();
    let rows: Vec<_> = snapshot.rows().collect();
    assert_eq!(
        rows,
        vec![
            ExportRow::Category { name: "B" },
            ExportRow::Item { name: "Water", quantity: 6.0, unit: "liters" },
        ]
    );
}

#[test]
fn test_delete_active_list_selects_first_remaining() {
    let (mut store, _) = setup();
    let first = new_list(&mut store, "First");
    let second = new_list(&mut store, "Second");

    assert!(store.delete_list(&second));
    assert_eq!(store.active_list_id(), Some(&first));

    assert!(store.delete_list(&first));
    assert!(store.active_list_id().is_none());
    assert!(!store.delete_list(&first));
}

#[test]
fn test_delete_inactive_list_keeps_selection() {
    let (mut store, _) = setup();
    let first = new_list(&mut store, "First");
    let second = new_list(&mut store, "Second");
    store.delete_list(&first);
    assert_eq!(store.active_list_id(), Some(&second));
}

#[test]
fn test_clear_all_lists() {
    let (mut store, _) = setup();
    new_list(&mut store, "One");
    new_list(&mut store, "Two");
    store.clear_all_lists();
    assert!(store.is_empty());
    assert!(store.active_list().is_none());
}

#[test]
fn test_updated_at_advances_on_mutation() {
    let (mut store, clock) = setup();
    let list_id = new_list(&mut store, "Timeline");
    let created = store.list(&list_id).unwrap().updated_at;

    clock.advance(Duration::seconds(10));
    let cat = store.add_category(&list_id, "A").unwrap();
    let after_add = store.list(&list_id).unwrap().updated_at;
    assert_eq!(after_add, created + Duration::seconds(10));

    // Wall clock jumps backwards: timestamp must hold
    clock.advance(Duration::seconds(-60));
    store.add_sub_ingredient(&list_id, &cat, "X", 1.0, "g").unwrap();
    assert_eq!(store.list(&list_id).unwrap().updated_at, after_add);

    clock.advance(Duration::seconds(120));
    store.delete_ingredient(&list_id, &cat).unwrap();
    assert!(store.list(&list_id).unwrap().updated_at > after_add);
}

#[test]
fn test_update_list_replaces_wholesale() {
    let (mut store, clock) = setup();
    let list_id = new_list(&mut store, "Old");
    let mut copy = store.list(&list_id).unwrap().clone();
    copy.name = "New".into();
    copy.number_of_people = 5;

    clock.advance(Duration::minutes(1));
    assert!(store.update_list(copy.clone()).unwrap());
    let stored = store.list(&list_id).unwrap();
    assert_eq!(stored.name, "New");
    assert_eq!(stored.number_of_people, 5);
    assert_eq!(stored.updated_at, copy.created_at + Duration::minutes(1));

    copy.id = "unknown".into();
    assert!(!store.update_list(copy).unwrap());
    assert_eq!(store.lists().len(), 1);
}

#[test]
fn test_update_list_rejects_orphaned_sub_ingredients() {
    let (mut store, clock) = setup();
    let storage = MemoryStorage::new();
    let keep_id = new_list(&mut store, "Keep me");
    let list_id = new_list(&mut store, "Dinner");
    let cat = store.add_category(&list_id, "Veg").unwrap();
    store.add_sub_ingredient(&list_id, &cat, "Onion", 1.0, "pcs").unwrap();
    store.flush(&storage, LISTS_KEY).unwrap();

    let mut copy = store.list(&list_id).unwrap().clone();
    copy.ingredients.retain(|i| i.id != cat);
    let result = store.update_list(copy);
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(store.list(&list_id).unwrap().ingredients.len(), 2);

    let mut copy = store.list(&list_id).unwrap().clone();
    copy.number_of_people = 0;
    assert!(matches!(store.update_list(copy), Err(StoreError::Validation(_))));
    assert_eq!(store.list(&list_id).unwrap().number_of_people, 1);

    store.flush(&storage, LISTS_KEY).unwrap();
    let reloaded = ListStore::init(&storage, LISTS_KEY, clock);
    assert_eq!(reloaded.lists().len(), 2);
    assert!(reloaded.list(&keep_id).is_some());
}

#[test]
fn test_rename_list() {
    let (mut store, _) = setup();
    let list_id = new_list(&mut store, "Draft");
    store.rename_list(&list_id, " Final ").unwrap();
    assert_eq!(store.list(&list_id).unwrap().name, "Final");
    assert!(store.rename_list(&list_id, "").is_err());
    assert!(store.rename_list(&"ghost".into(), "Other").is_ok());
}

#[test]
fn test_persistence_round_trip() {
    let (mut store, clock) = setup();
    let storage = MemoryStorage::new();
    let list_id = new_list(&mut store, "Feast");
    let cat = store.add_category(&list_id, "Meat").unwrap();
    store.add_sub_ingredient(&list_id, &cat, "Lamb", 0.3, "kg").unwrap();
    store.set_number_of_people(&list_id, 8).unwrap();
    new_list(&mut store, "Snacks");
    store.flush(&storage, LISTS_KEY).unwrap();

    let restored = ListStore::init(&storage, LISTS_KEY, clock);
    assert_eq!(restored.lists(), store.lists());
    // First stored list is active after a reload
    assert_eq!(restored.active_list_id(), Some(&list_id));
}

#[test]
fn test_corrupt_storage_initializes_empty() {
    let (_, clock) = setup();
    let storage = MemoryStorage::new();
    storage.set(LISTS_KEY, "{not json").unwrap();
    let store = ListStore::init(&storage, LISTS_KEY, clock);
    assert!(store.is_empty());
    assert!(store.active_list().is_none());
}

#[test]
fn test_flush_after_clear_removes_record() {
    let (mut store, _) = setup();
    let storage = MemoryStorage::new();
    new_list(&mut store, "Temp");
    store.flush(&storage, LISTS_KEY).unwrap();
    store.clear_all_lists();
    store.flush(&storage, LISTS_KEY).unwrap();
    assert!(storage.get(LISTS_KEY).unwrap().is_none());
}

#[test]
fn test_reset_app_clears_storage() {
    let (mut store, _) = setup();
    let storage = MemoryStorage::new();
    new_list(&mut store, "Temp");
    store.flush(&storage, LISTS_KEY).unwrap();
    storage.set(CONFIG_KEY, "{}").unwrap();

    store.reset_app(&storage, LISTS_KEY).unwrap();
    assert!(store.is_empty());
    assert!(storage.is_empty());
}
