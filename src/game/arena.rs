//! Ordered entity storage with deferred removal.
//!
//! Systems flag entries while scanning; `compact` drops them afterwards, so
//! nothing is removed from the collection while it is being iterated.

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    doomed: bool,
}

/// Insertion-ordered container of live entities.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) {
        self.slots.push(Slot {
            value,
            doomed: false,
        });
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|s| &s.value)
    }

    /// Most recently pushed entity that is still stored.
    pub fn last(&self) -> Option<&T> {
        self.slots.last().map(|s| &s.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().map(|s| &s.value)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().map(|s| &mut s.value)
    }

    /// Visit every entry mutably; entries for which `f` returns `true` are
    /// flagged for removal.
    pub fn update_and_mark<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        for slot in &mut self.slots {
            if f(&mut slot.value) {
                slot.doomed = true;
            }
        }
    }

    /// Drop flagged entries, keeping the order of the rest. Returns how many
    /// were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| !s.doomed);
        before - self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
