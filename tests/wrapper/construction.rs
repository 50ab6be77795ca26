//! Construction and conformance.

use std::collections::BTreeSet;

use translated_collection::{
    ChangeEvent, ConstructionError, TranslatedCollection, TranslatedCollectionError,
    WrapperOptions,
};

use super::support::{letters, lower, record_events, strings, upper};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_stores_the_collection_unchanged() {
    let wrapper = letters(&["a", "b", "C"]);
    assert_eq!(wrapper.collection(), &strings(&["a", "b", "C"]));
}

#[test]
fn new_does_not_check_conformance_by_default() {
    let wrapper = letters(&["a", "b", "C"]);
    assert!(!wrapper.is_conforming());
}

#[test]
fn with_options_rejects_non_conforming_collection_when_checking() {
    let options = WrapperOptions {
        check_conformance: true,
        ..WrapperOptions::default()
    };
    let err = TranslatedCollection::with_options(strings(&["a", "b", "C"]), lower, upper, options)
        .unwrap_err();
    match err {
        TranslatedCollectionError::Construction(ConstructionError { position }) => {
            assert_eq!(position, 2)
        }
        other => panic!("expected construction error, got {other:?}"),
    }
}

#[test]
fn with_options_accepts_conforming_collection_when_checking() {
    let options = WrapperOptions {
        check_conformance: true,
        wrap_results: false,
    };
    let wrapper =
        TranslatedCollection::with_options(strings(&["a", "b"]), lower, upper, options).unwrap();
    assert!(!wrapper.wrap_results());
    assert_eq!(wrapper.to_vec(), strings(&["A", "B"]));
}

#[test]
fn conformance_check_skips_empty_collection() {
    let options = WrapperOptions {
        check_conformance: true,
        ..WrapperOptions::default()
    };
    // Every element would fail, but there are none.
    let wrapper = TranslatedCollection::with_options(
        Vec::<i32>::new(),
        |x: &i32| x - 1,
        |x: &i32| x + 1,
        options,
    );
    assert!(wrapper.is_ok());
}

#[test]
fn with_options_without_check_accepts_anything() {
    let wrapper = TranslatedCollection::with_options(
        strings(&["A"]),
        lower,
        upper,
        WrapperOptions::default(),
    )
    .unwrap();
    assert!(wrapper.wrap_results());
    assert!(!wrapper.is_conforming());
}

// ============================================================================
// is_conforming
// ============================================================================

#[test]
fn is_conforming_true_for_conforming_collection() {
    assert!(letters(&["a", "b", "c"]).is_conforming());
}

#[test]
fn is_conforming_false_for_non_conforming_collection() {
    assert!(!letters(&["a", "B", "C"]).is_conforming());
}

#[test]
fn is_conforming_does_not_notify() {
    let wrapper = letters(&["a", "B"]);
    let (log, _) = record_events(&wrapper);
    let _ = wrapper.is_conforming();
    assert!(log.lock().unwrap().is_empty());
}

// ============================================================================
// make_conforming
// ============================================================================

#[test]
fn make_conforming_rewrites_in_order_with_one_misc_event() {
    let mut wrapper = letters(&["a", "B", "C"]);
    let (log, _) = record_events(&wrapper);

    wrapper.make_conforming().unwrap();

    assert_eq!(wrapper.collection(), &strings(&["a", "b", "c"]));
    assert_eq!(*log.lock().unwrap(), vec![ChangeEvent::Misc]);
}

#[test]
fn make_conforming_leaves_conforming_collection_alone() {
    let mut wrapper = letters(&["a", "b", "c"]);
    let before = wrapper.collection().clone();
    let (log, _) = record_events(&wrapper);

    wrapper.make_conforming().unwrap();

    assert_eq!(wrapper.collection(), &before);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn make_conforming_is_idempotent() {
    let mut wrapper = letters(&["X", "y", "Z"]);
    let (log, _) = record_events(&wrapper);

    wrapper.make_conforming().unwrap();
    let after_first = wrapper.collection().clone();
    wrapper.make_conforming().unwrap();

    assert_eq!(wrapper.collection(), &after_first);
    assert_eq!(log.lock().unwrap().len(), 1, "second call must not notify");
    assert!(wrapper.is_conforming());
}

#[test]
fn make_conforming_preserves_set_type() {
    let set: BTreeSet<String> = strings(&["a", "B", "C"]).into_iter().collect();
    let mut wrapper = TranslatedCollection::new(set, lower, upper);

    wrapper.make_conforming().unwrap();

    let expected: BTreeSet<String> = strings(&["a", "b", "c"]).into_iter().collect();
    assert_eq!(wrapper.collection(), &expected);
}

#[test]
fn make_conforming_on_set_collapses_translated_duplicates() {
    let set: BTreeSet<String> = strings(&["a", "A"]).into_iter().collect();
    let mut wrapper = TranslatedCollection::new(set, lower, upper);

    wrapper.make_conforming().unwrap();

    assert_eq!(wrapper.len(), 1);
    assert!(wrapper.is_conforming());
}

// ============================================================================
// WrapperOptions as configuration
// ============================================================================

#[test]
fn options_default_values() {
    let options = WrapperOptions::default();
    assert!(!options.check_conformance);
    assert!(options.wrap_results);
}

#[test]
fn options_deserialize_partial_document() {
    let options: WrapperOptions = serde_json::from_str(r#"{"wrap_results": false}"#).unwrap();
    assert_eq!(
        options,
        WrapperOptions {
            check_conformance: false,
            wrap_results: false,
        }
    );
}

#[test]
fn options_serialize_round_trip_fields() {
    let json = serde_json::to_value(WrapperOptions::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"check_conformance": false, "wrap_results": true})
    );
}
