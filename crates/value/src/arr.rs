//! Arrays.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::brand::ClassDef;
use crate::value::Value;

/// A dense array. Sparse writes pad the gap with `Undefined`: a hole and an
/// explicit `Undefined` slot are the same thing in this model.
pub struct Arr {
    class: Option<Rc<ClassDef>>,
    items: RefCell<Vec<Value>>,
}

impl Arr {
    pub fn new() -> Rc<Arr> {
        Rc::new(Arr {
            class: None,
            items: RefCell::new(Vec::new()),
        })
    }

    pub fn with_class(class: Rc<ClassDef>) -> Rc<Arr> {
        Rc::new(Arr {
            class: Some(class),
            items: RefCell::new(Vec::new()),
        })
    }

    pub fn from_values<I, V>(values: I) -> Rc<Arr>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let arr = Arr::new();
        for value in values {
            arr.push(value);
        }
        arr
    }

    /// An array of `len` undefined slots.
    pub fn with_len(len: usize) -> Rc<Arr> {
        let arr = Arr::new();
        arr.items.borrow_mut().resize(len, Value::Undefined);
        arr
    }

    pub fn class(&self) -> Option<&Rc<ClassDef>> {
        self.class.as_ref()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.items.borrow_mut().push(value.into());
    }

    /// Writes `index`, growing the array with `Undefined` when needed.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut items = self.items.borrow_mut();
        if index >= items.len() {
            items.resize(index + 1, Value::Undefined);
        }
        items[index] = value.into();
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.borrow().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.items.borrow()
    }
}
