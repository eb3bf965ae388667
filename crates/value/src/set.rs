//! Unordered-membership collections (Set).

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexSet;

use crate::brand::ClassDef;
use crate::key::MapKey;
use crate::value::Value;

/// An insertion-ordered set with SameValueZero membership.
pub struct SetVal {
    class: Option<Rc<ClassDef>>,
    members: RefCell<IndexSet<MapKey>>,
}

impl SetVal {
    pub fn new() -> Rc<SetVal> {
        Rc::new(SetVal {
            class: None,
            members: RefCell::new(IndexSet::new()),
        })
    }

    pub fn with_class(class: Rc<ClassDef>) -> Rc<SetVal> {
        Rc::new(SetVal {
            class: Some(class),
            members: RefCell::new(IndexSet::new()),
        })
    }

    pub fn from_values<I, V>(values: I) -> Rc<SetVal>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let set = SetVal::new();
        for value in values {
            set.add(value);
        }
        set
    }

    pub fn class(&self) -> Option<&Rc<ClassDef>> {
        self.class.as_ref()
    }

    pub fn add(&self, value: impl Into<Value>) {
        self.members.borrow_mut().insert(MapKey(value.into()));
    }

    pub fn has(&self, value: &Value) -> bool {
        self.members.borrow().contains(&MapKey(value.clone()))
    }

    pub fn delete(&self, value: &Value) -> bool {
        self.members
            .borrow_mut()
            .shift_remove(&MapKey(value.clone()))
    }

    pub fn size(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    pub fn members(&self) -> Ref<'_, IndexSet<MapKey>> {
        self.members.borrow()
    }
}
