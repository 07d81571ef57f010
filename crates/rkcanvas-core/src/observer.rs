//! Observable values.
//!
//! [`Subject`] owns a value and a list of observers; [`SetSubject`] is the
//! set-valued specialisation that only notifies when membership actually
//! changes. Everything here is single-threaded: observers are plain boxed
//! closures invoked synchronously on the thread that mutates the subject.

use crate::error::{CanvasError, Result};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

/// Handle returned by `attach`, used to detach the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Obs({})", &self.0.to_string()[..8])
    }
}

type Observer<T> = Box<dyn Fn(&T)>;

/// A value with an ordered list of observers.
pub struct Subject<T> {
    observers: Vec<(ObserverId, Observer<T>)>,
    item: T,
}

impl<T> Subject<T> {
    pub fn new(item: T) -> Self {
        Self {
            observers: Vec::new(),
            item,
        }
    }

    /// Appends an observer. Observers are notified in attach order.
    pub fn attach<F>(&mut self, observer: F) -> ObserverId
    where
        F: Fn(&T) + 'static,
    {
        let id = ObserverId::new();
        self.observers.push((id, Box::new(observer)));
        tracing::debug!("Observer {} attached", id);
        id
    }

    /// Removes a previously attached observer.
    ///
    /// Returns [`CanvasError::NotFound`] if `id` is not attached.
    pub fn detach(&mut self, id: ObserverId) -> Result<()> {
        let idx = self
            .observers
            .iter()
            .position(|(oid, _)| *oid == id)
            .ok_or_else(|| CanvasError::not_found(format!("observer {id}")))?;
        self.observers.remove(idx);
        tracing::debug!("Observer {} detached", id);
        Ok(())
    }

    /// Calls every observer with the current value.
    pub fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.item);
        }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("item", &self.item)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A set whose observers fire exactly when its membership changes.
pub struct SetSubject<T> {
    subject: Subject<HashSet<T>>,
}

impl<T> SetSubject<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            subject: Subject::new(HashSet::new()),
        }
    }

    /// Creates a set pre-populated with `items`. No observers exist yet, so
    /// nothing is notified.
    pub fn with_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            subject: Subject::new(items.into_iter().collect()),
        }
    }

    pub fn attach<F>(&mut self, observer: F) -> ObserverId
    where
        F: Fn(&HashSet<T>) + 'static,
    {
        self.subject.attach(observer)
    }

    pub fn detach(&mut self, id: ObserverId) -> Result<()> {
        self.subject.detach(id)
    }

    pub fn item(&self) -> &HashSet<T> {
        self.subject.item()
    }

    /// Returns an owned copy of the current membership.
    pub fn item_copy(&self) -> HashSet<T> {
        self.subject.item().clone()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.subject.item.contains(item)
    }

    pub fn len(&self) -> usize {
        self.subject.item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subject.item.is_empty()
    }

    /// Replaces the whole set. Returns true if membership changed.
    pub fn replace(&mut self, items: HashSet<T>) -> bool {
        let changed = self.subject.item != items;
        self.subject.item = items;
        if changed {
            self.subject.notify();
        }
        changed
    }

    /// Adds `item`. Returns true if it was not already present.
    pub fn add(&mut self, item: T) -> bool {
        let changed = self.subject.item.insert(item);
        if changed {
            self.subject.notify();
        }
        changed
    }

    /// Removes `item`.
    ///
    /// Returns [`CanvasError::NotFound`] if it is not a member; observers are
    /// not notified in that case.
    pub fn remove(&mut self, item: &T) -> Result<()> {
        if !self.subject.item.remove(item) {
            return Err(CanvasError::not_found("set member"));
        }
        self.subject.notify();
        Ok(())
    }

    pub fn observer_count(&self) -> usize {
        self.subject.observer_count()
    }
}

impl<T> Default for SetSubject<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SetSubject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetSubject")
            .field("item", &self.subject.item)
            .field("observers", &self.subject.observers.len())
            .finish()
    }
}
