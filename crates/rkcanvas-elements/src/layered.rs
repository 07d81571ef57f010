//! Z-ordered element registry
//!
//! Elements are kept in a single ordered map keyed by `(layer, sequence)`.
//! The sequence number grows with every insertion, so elements on the same
//! layer keep their insertion order.

use crate::element::ElementRef;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Registry of canvas elements ordered by layer.
#[derive(Default)]
pub struct LayeredElements {
    entries: BTreeMap<(i32, u64), ElementRef>,
    next_seq: u64,
}

impl LayeredElements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `element` after every element with a lower or equal layer.
    pub fn add(&mut self, element: ElementRef) {
        let layer = element.borrow().layer();
        self.entries.insert((layer, self.next_seq), element);
        self.next_seq += 1;
    }

    /// Removes `element`, comparing by identity. Returns false if it was not
    /// registered.
    pub fn remove(&mut self, element: &ElementRef) -> bool {
        let key = self
            .entries
            .iter()
            .find(|(_, e)| Rc::ptr_eq(e, element))
            .map(|(key, _)| *key);

        match key {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    /// Traverses from the lowest layer up; the paint order.
    pub fn bottom_up(&self) -> impl DoubleEndedIterator<Item = &ElementRef> + '_ {
        self.entries.values()
    }

    /// Traverses from the highest layer down; the hit-test order.
    pub fn top_down(&self) -> impl Iterator<Item = &ElementRef> + '_ {
        self.entries.values().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for LayeredElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layers: Vec<i32> = self.entries.keys().map(|(layer, _)| *layer).collect();
        f.debug_struct("LayeredElements")
            .field("layers", &layers)
            .finish()
    }
}
