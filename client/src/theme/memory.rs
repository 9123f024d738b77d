//! In-process theme capabilities with access counters.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::ThemeError;
use super::resolver::{ColorSchemeQuery, PreferenceStore, ThemeTarget};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Map-backed preference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose every access fails, like disabled browser storage.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    /// Current value without counting as a read.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        self.reads.set(self.reads.get() + 1);
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Attribute map standing in for the document root.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    attributes: RefCell<HashMap<String, String>>,
    detached: bool,
    mutations: Cell<usize>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target whose updates all fail, like a page without a document root.
    pub fn detached() -> Self {
        Self { detached: true, ..Self::default() }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Number of set/remove calls received.
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }
}

impl ThemeTarget for MemoryTarget {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        if self.detached {
            return Err(ThemeError::DocumentUnavailable);
        }
        self.mutations.set(self.mutations.get() + 1);
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), ThemeError> {
        if self.detached {
            return Err(ThemeError::DocumentUnavailable);
        }
        self.mutations.set(self.mutations.get() + 1);
        self.attributes.borrow_mut().remove(name);
        Ok(())
    }
}

/// Constant color-scheme signal.
#[derive(Debug, Default)]
pub struct FixedScheme {
    prefers_dark: bool,
    queries: Cell<usize>,
}

impl FixedScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark, queries: Cell::new(0) }
    }

    pub fn dark() -> Self {
        Self::new(true)
    }

    pub fn light() -> Self {
        Self::new(false)
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.prefers_dark
    }
}
