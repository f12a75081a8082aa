//! Duplicate-free collection editor with change notifications.
//!
//! Form state for a product's tags and sizes is an ordered collection with
//! set semantics: adding an existing member is a no-op and must not notify,
//! so subscribers (state holders, re-render triggers) only run when
//! membership actually changed.

use pawmart_core::ProductSize;

/// Callback invoked with the full collection after every membership change.
type ChangeListener<T> = Box<dyn FnMut(&[T]) + Send>;

/// Optional normalizer applied to candidates before the membership test;
/// returning `None` rejects the candidate outright.
type Normalizer<T> = Box<dyn Fn(&T) -> Option<T> + Send>;

/// An ordered, duplicate-free collection with a change callback.
pub struct SetEditor<T> {
    items: Vec<T>,
    normalizer: Option<Normalizer<T>>,
    on_change: ChangeListener<T>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for SetEditor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SetEditor")
            .field("items", &self.items)
            .field("normalizer", &self.normalizer.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq + Clone> SetEditor<T> {
    /// Create an editor over the current collection.
    pub fn new(items: Vec<T>, on_change: impl FnMut(&[T]) + Send + 'static) -> Self {
        Self {
            items,
            normalizer: None,
            on_change: Box::new(on_change),
        }
    }

    /// Attach a normalizer applied to candidates before the membership
    /// test.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl Fn(&T) -> Option<T> + Send + 'static) -> Self {
        self.normalizer = Some(Box::new(normalizer));
        self
    }

    /// Add an item. Returns whether the collection changed; the callback
    /// fires only in that case.
    pub fn add(&mut self, item: T) -> bool {
        let item = match &self.normalizer {
            Some(normalize) => match normalize(&item) {
                Some(normalized) => normalized,
                None => return false,
            },
            None => item,
        };

        if self.items.contains(&item) {
            return false;
        }

        self.items.push(item);
        (self.on_change)(&self.items);
        true
    }

    /// Remove an item. Returns whether the collection changed; the callback
    /// fires only in that case.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(position) = self.items.iter().position(|existing| existing == item) else {
            return false;
        };

        self.items.remove(position);
        (self.on_change)(&self.items);
        true
    }

    /// Whether the item is currently a member.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// The current collection, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// Editor for free-text tags: candidates are trimmed and blank input is
/// rejected before the membership test.
pub fn tag_editor(
    tags: Vec<String>,
    on_change: impl FnMut(&[String]) + Send + 'static,
) -> SetEditor<String> {
    SetEditor::new(tags, on_change).with_normalizer(|tag: &String| {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// Editor for the fixed size enum: no normalization needed.
pub fn size_editor(
    sizes: Vec<ProductSize>,
    on_change: impl FnMut(&[ProductSize]) + Send + 'static,
) -> SetEditor<ProductSize> {
    SetEditor::new(sizes, on_change)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted<T: Clone>(counter: &Arc<AtomicUsize>) -> impl FnMut(&[T]) + Send + 'static {
        let counter = Arc::clone(counter);
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_add_new_item_fires_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut editor = SetEditor::new(vec!["a".to_owned()], counted(&calls));

        assert!(editor.add("b".to_owned()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(editor.items(), ["a", "b"]);
    }

    #[test]
    fn test_add_existing_item_never_fires_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut editor = SetEditor::new(vec!["a".to_owned()], counted(&calls));

        assert!(!editor.add("a".to_owned()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(editor.items(), ["a"]);
    }

    #[test]
    fn test_add_existing_after_normalization_never_fires_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut editor = tag_editor(vec!["chew".to_owned()], counted(&calls));

        // normalizes to "chew", which is already present
        assert!(!editor.add("  chew  ".to_owned()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut editor = tag_editor(vec!["chew".to_owned()], counted(&calls));

        assert!(!editor.add("   ".to_owned()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(editor.items(), ["chew"]);
    }

    #[test]
    fn test_tag_is_trimmed_before_insertion() {
        let mut editor = tag_editor(Vec::new(), |_| {});
        assert!(editor.add("  squeaky ".to_owned()));
        assert_eq!(editor.items(), ["squeaky"]);
    }

    #[test]
    fn test_remove_member_fires_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut editor = size_editor(vec![ProductSize::S, ProductSize::M], counted(&calls));

        assert!(editor.remove(&ProductSize::S));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(editor.items(), [ProductSize::M]);

        // removing again is a no-op
        assert!(!editor.remove(&ProductSize::S));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_size_editor_toggle_roundtrip() {
        let mut editor = size_editor(Vec::new(), |_| {});
        assert!(editor.add(ProductSize::Xl));
        assert!(editor.contains(&ProductSize::Xl));
        assert!(!editor.add(ProductSize::Xl));
        assert!(editor.remove(&ProductSize::Xl));
        assert!(!editor.contains(&ProductSize::Xl));
    }

    #[test]
    fn test_callback_observes_current_collection() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let mut editor = tag_editor(Vec::new(), move |items: &[String]| {
            seen_clone.lock().unwrap().push(items.to_vec());
        });

        editor.add("a".to_owned());
        editor.add("b".to_owned());

        let snapshots = seen.lock().unwrap();
        assert_eq!(*snapshots, vec![vec!["a".to_owned()], vec!["a".to_owned(), "b".to_owned()]]);
    }
}
