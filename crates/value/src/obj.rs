//! Plain and class-branded objects.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::brand::ClassDef;
use crate::value::{Sym, Value};

/// An object: insertion-ordered string-keyed properties, an independent set
/// of symbol-keyed properties, and an optional constructor brand (`None`
/// models a plain literal).
pub struct Obj {
    class: Option<Rc<ClassDef>>,
    props: RefCell<IndexMap<Rc<str>, Value>>,
    sym_props: RefCell<Vec<(Rc<Sym>, Value)>>,
}

impl Obj {
    pub fn new() -> Rc<Obj> {
        Rc::new(Obj {
            class: None,
            props: RefCell::new(IndexMap::new()),
            sym_props: RefCell::new(Vec::new()),
        })
    }

    pub fn with_class(class: Rc<ClassDef>) -> Rc<Obj> {
        Rc::new(Obj {
            class: Some(class),
            props: RefCell::new(IndexMap::new()),
            sym_props: RefCell::new(Vec::new()),
        })
    }

    /// Builds a plain object from `(key, value)` pairs, preserving order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Rc<Obj>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let obj = Obj::new();
        for (key, value) in pairs {
            obj.set(key.as_ref(), value);
        }
        obj
    }

    pub fn class(&self) -> Option<&Rc<ClassDef>> {
        self.class.as_ref()
    }

    pub fn set(&self, key: &str, value: impl Into<Value>) {
        self.props.borrow_mut().insert(Rc::from(key), value.into());
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.props.borrow().get(key).cloned()
    }

    pub fn has(&self, key: &str) -> bool {
        self.props.borrow().contains_key(key)
    }

    pub fn delete(&self, key: &str) -> bool {
        self.props.borrow_mut().shift_remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.props.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.borrow().is_empty()
    }

    pub fn props(&self) -> Ref<'_, IndexMap<Rc<str>, Value>> {
        self.props.borrow()
    }

    pub fn set_symbol(&self, key: &Rc<Sym>, value: impl Into<Value>) {
        let mut sym_props = self.sym_props.borrow_mut();
        match sym_props.iter_mut().find(|(k, _)| Rc::ptr_eq(k, key)) {
            Some(slot) => slot.1 = value.into(),
            None => sym_props.push((key.clone(), value.into())),
        }
    }

    pub fn get_symbol(&self, key: &Rc<Sym>) -> Option<Value> {
        self.sym_props
            .borrow()
            .iter()
            .find(|(k, _)| Rc::ptr_eq(k, key))
            .map(|(_, v)| v.clone())
    }

    pub fn sym_props(&self) -> Ref<'_, Vec<(Rc<Sym>, Value)>> {
        self.sym_props.borrow()
    }
}
