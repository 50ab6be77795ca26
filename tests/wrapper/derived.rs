//! Bulk operations returning a derived collection.

use std::collections::BTreeSet;

use translated_collection::{Derived, TranslatedCollection};

use super::support::{letters, lower, record_events, strings, upper, Letters};

fn alphabet() -> Letters {
    letters(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"])
}

fn outward(derived: Derived<Vec<String>, String>) -> Vec<String> {
    derived
        .into_wrapped()
        .expect("derived results are wrapped by default")
        .to_vec()
}

// ============================================================================
// map / flat_map
// ============================================================================

#[test]
fn map_receives_outward_values_and_leaves_receiver_alone() {
    let mut wrapper = letters(&["a", "b", "c"]);
    wrapper.append("d".to_string()).unwrap();
    let (log, _) = record_events(&wrapper);

    let doubled = wrapper.map(|x| format!("{x}{x}"));

    assert_eq!(outward(doubled), strings(&["AA", "BB", "CC", "DD"]));
    assert_eq!(wrapper.collection(), &strings(&["a", "b", "c", "d"]));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn map_and_collect_agree() {
    let wrapper = alphabet();
    let tripled = |x: String| x.repeat(3);
    assert_eq!(outward(wrapper.map(tripled)), outward(wrapper.collect(tripled)));
    assert_eq!(outward(wrapper.map(tripled))[0], "AAA");
}

#[test]
fn map_stores_transform_results_without_inward_translation() {
    let wrapper = letters(&["a"]);
    let mapped = wrapper.map(|x| x + "x");
    assert_eq!(mapped.stored(), &strings(&["Ax"]));
}

#[test]
fn flat_map_concatenates_results() {
    let wrapper = letters(&["a", "b"]);
    let spread = wrapper.flat_map(|x| vec![x.clone(), x.to_lowercase()]);
    assert_eq!(spread.stored(), &strings(&["A", "a", "B", "b"]));
    assert_eq!(
        wrapper.collect_concat(|x| vec![x]).stored(),
        &strings(&["A", "B"])
    );
}

// ============================================================================
// filter / reject
// ============================================================================

#[test]
fn filter_evaluates_predicate_on_outward_values() {
    let wrapper = alphabet();
    let picked = wrapper.filter(|x| x.as_str() < "D");
    assert_eq!(picked.stored(), &strings(&["a", "b", "c"]));
}

#[test]
fn select_and_find_all_are_filter() {
    let wrapper = alphabet();
    // Every non-numeric string "parses" as zero, which is even.
    let even = |x: &String| x.parse::<i64>().unwrap_or(0) % 2 == 0;
    assert_eq!(outward(wrapper.select(even)), wrapper.to_vec());
    assert_eq!(outward(wrapper.find_all(even)), wrapper.to_vec());
}

#[test]
fn reject_returns_new_collection_and_keeps_receiver() {
    let wrapper = letters(&["a", "b", "c"]);
    let (log, _) = record_events(&wrapper);

    let rejected = wrapper.reject(|x| x == "B");

    let rejected = rejected.into_wrapped().unwrap();
    assert_ne!(rejected.id(), wrapper.id());
    assert_eq!(rejected.to_vec(), strings(&["A", "C"]));
    assert_eq!(wrapper.to_vec(), strings(&["A", "B", "C"]));
    assert!(log.lock().unwrap().is_empty());
}

// ============================================================================
// drop_while / take_while
// ============================================================================

#[test]
fn drop_while_evaluates_condition_on_outward_values() {
    let wrapper = alphabet();
    let rest = wrapper.drop_while(|x| x.as_str() < "C");
    assert_eq!(
        outward(rest),
        strings(&["C", "D", "E", "F", "G", "H", "I", "J", "K", "L"])
    );
}

#[test]
fn take_while_evaluates_condition_on_outward_values() {
    let wrapper = alphabet();
    // Stored values are lowercase, so a stored-form comparison would take none.
    let head = wrapper.take_while(|x| x.as_str() < "C");
    assert_eq!(outward(head), strings(&["A", "B"]));
}

// ============================================================================
// sorting
// ============================================================================

fn offset(values: Vec<i32>) -> TranslatedCollection<Vec<i32>, i32> {
    TranslatedCollection::new(values, |x: &i32| x - 1, |x: &i32| x + 1)
}

#[test]
fn sort_by_key_compares_outward_values() {
    let wrapper = offset(vec![0, -1, -2, -3, -4, -5]);
    assert_eq!(wrapper.to_vec(), vec![1, 0, -1, -2, -3, -4]);

    let sorted = wrapper.sort_by_key(|x| x.abs());

    assert_eq!(sorted.stored(), &vec![-1, 0, -2, -3, -4, -5]);
    assert_eq!(
        sorted.into_wrapped().unwrap().to_vec(),
        vec![0, 1, -1, -2, -3, -4]
    );
    assert_eq!(wrapper.collection(), &vec![0, -1, -2, -3, -4, -5]);
}

#[test]
fn sort_by_key_is_stable() {
    let wrapper = offset(vec![9, 1, 19, 11]);
    // Outward: 10, 2, 20, 12 — keyed by last digit: 0, 2, 0, 2.
    let sorted = wrapper.sort_by_key(|x| x % 10);
    assert_eq!(sorted.stored(), &vec![9, 19, 1, 11]);
}

#[test]
fn sort_by_uses_comparator_on_outward_values() {
    let wrapper = offset(vec![3, 1, 2]);
    let descending = wrapper.sort_by(|a, b| b.cmp(a));
    assert_eq!(descending.stored(), &vec![3, 2, 1]);
}

#[test]
fn sorted_orders_by_outward_form() {
    // Outward "A" sorts before "B"; the stored "B" would sort before "a".
    let wrapper = TranslatedCollection::new(
        strings(&["B", "a"]),
        |s: &String| s.clone(),
        |s: &String| s.to_uppercase(),
    );
    assert_eq!(wrapper.sorted().stored(), &strings(&["a", "B"]));
}

// ============================================================================
// Result wrapping
// ============================================================================

#[test]
fn derived_wrapper_shares_translations_and_settings() {
    let wrapper = letters(&["a", "b"]);
    let derived = wrapper.filter(|_| true).into_wrapped().unwrap();
    assert!(derived.wrap_results());
    assert_eq!(derived.translate_in(&"Z".to_string()), "z");
    assert_eq!(derived.observer_count(), 0);
}

#[test]
fn bare_results_when_wrapping_disabled() {
    let mut wrapper = letters(&["a", "b", "c"]);
    wrapper.set_wrap_results(false);

    let result = wrapper.filter(|x| x != "B");

    assert!(!result.is_wrapped());
    assert!(result.as_wrapped().is_none());
    assert_eq!(result.into_stored(), strings(&["a", "c"]));
}

#[test]
fn builder_can_disable_wrapping() {
    let wrapper = translated_collection::wrap(strings(&["a"]))
        .translations(lower, upper)
        .wrap_results(false)
        .build();
    assert!(matches!(wrapper.map(|x| x), Derived::Bare(_)));
}

#[test]
fn derived_results_keep_set_type() {
    let set: BTreeSet<String> = strings(&["a", "b", "c"]).into_iter().collect();
    let wrapper = TranslatedCollection::new(set, lower, upper);
    let derived = wrapper.reject(|x| x == "A");
    let expected: BTreeSet<String> = strings(&["b", "c"]).into_iter().collect();
    assert_eq!(derived.stored(), &expected);
}

// ============================================================================
// Lazy, closure-less forms never notify
// ============================================================================

#[test]
fn lazy_sequences_do_not_notify_when_pulled() {
    let wrapper = alphabet();
    let (log, _) = record_events(&wrapper);

    let lazy = wrapper.iter().filter(|x| x.as_str() > "F");
    let pulled: Vec<String> = lazy.clone().collect();
    let again: Vec<String> = lazy.collect();
    let _ = wrapper.iter().take_while(|x| x.as_str() < "C").count();
    let _ = wrapper.iter().skip_while(|x| x.as_str() < "C").count();
    let _ = wrapper.iter().map(|x| x + "!").last();

    assert_eq!(pulled, strings(&["G", "H", "I", "J", "K", "L"]));
    assert_eq!(pulled, again);
    assert!(log.lock().unwrap().is_empty());
}
