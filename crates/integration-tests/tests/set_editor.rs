//! Integration tests for the tag and size editors.
//!
//! The contract under test: the change callback fires only when membership
//! actually changed, and normalization happens before the membership test.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pawmart_client::services::{size_editor, tag_editor};
use pawmart_core::ProductSize;

fn call_counter() -> (Arc<AtomicUsize>, impl FnMut(&[String]) + Send + 'static) {
    let counter = Arc::new(AtomicUsize::new(0));
    let cloned = Arc::clone(&counter);
    (counter, move |_: &[String]| {
        cloned.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_tag_editor_full_session() {
    let (calls, listener) = call_counter();
    let mut tags = tag_editor(vec!["chew".to_owned()], listener);

    assert!(tags.add("squeaky".to_owned())); // fires
    assert!(!tags.add("chew".to_owned())); // duplicate, silent
    assert!(!tags.add(" chew ".to_owned())); // duplicate after trim, silent
    assert!(!tags.add("   ".to_owned())); // blank, rejected, silent
    assert!(tags.remove(&"chew".to_owned())); // fires
    assert!(!tags.remove(&"chew".to_owned())); // already gone, silent

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(tags.items(), ["squeaky"]);
}

#[test]
fn test_blank_input_leaves_tags_unchanged() {
    let (calls, listener) = call_counter();
    let mut tags = tag_editor(vec!["a".to_owned(), "b".to_owned()], listener);

    assert!(!tags.add("   ".to_owned()));

    assert_eq!(tags.items(), ["a", "b"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_size_editor_toggles_fixed_enum_members() {
    let observed = Arc::new(std::sync::Mutex::new(Vec::new()));
    let observed_clone = Arc::clone(&observed);
    let mut sizes = size_editor(vec![ProductSize::M], move |items: &[ProductSize]| {
        observed_clone
            .lock()
            .expect("lock poisoned")
            .push(items.to_vec());
    });

    assert!(!sizes.add(ProductSize::M)); // present, silent
    assert!(sizes.add(ProductSize::L)); // fires
    assert!(sizes.remove(&ProductSize::M)); // fires

    let snapshots = observed.lock().expect("lock poisoned");
    assert_eq!(
        *snapshots,
        vec![
            vec![ProductSize::M, ProductSize::L],
            vec![ProductSize::L],
        ]
    );
}
