//! Keyed collections (Map).

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::brand::ClassDef;
use crate::key::MapKey;
use crate::value::Value;

/// An insertion-ordered map keyed under SameValueZero.
pub struct MapVal {
    class: Option<Rc<ClassDef>>,
    entries: RefCell<IndexMap<MapKey, Value>>,
}

impl MapVal {
    pub fn new() -> Rc<MapVal> {
        Rc::new(MapVal {
            class: None,
            entries: RefCell::new(IndexMap::new()),
        })
    }

    pub fn with_class(class: Rc<ClassDef>) -> Rc<MapVal> {
        Rc::new(MapVal {
            class: Some(class),
            entries: RefCell::new(IndexMap::new()),
        })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Rc<MapVal>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let map = MapVal::new();
        for (key, value) in pairs {
            map.set(key, value);
        }
        map
    }

    pub fn class(&self) -> Option<&Rc<ClassDef>> {
        self.class.as_ref()
    }

    /// Inserts or overwrites; an overwrite keeps the entry's position, like
    /// the native container.
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Value>) {
        self.entries
            .borrow_mut()
            .insert(MapKey(key.into()), value.into());
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.entries.borrow().get(&MapKey(key.clone())).cloned()
    }

    pub fn has(&self, key: &Value) -> bool {
        self.entries.borrow().contains_key(&MapKey(key.clone()))
    }

    pub fn delete(&self, key: &Value) -> bool {
        self.entries
            .borrow_mut()
            .shift_remove(&MapKey(key.clone()))
            .is_some()
    }

    pub fn size(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn entries(&self) -> Ref<'_, IndexMap<MapKey, Value>> {
        self.entries.borrow()
    }
}
