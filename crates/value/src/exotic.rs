//! Exotic host objects.

use std::rc::Rc;

use crate::brand::ClassDef;
use crate::value::Value;

/// A host object no comparison rule understands. It carries only what the
/// coercion fallback can use: a structural tag, an optional
/// conversion-to-primitive result, and an optional textual conversion.
/// `None` in a conversion slot means the conversion returns the object
/// itself and is uninformative.
pub struct Exotic {
    class: Option<Rc<ClassDef>>,
    tag: Rc<str>,
    value_of: Option<Value>,
    to_str: Option<Rc<str>>,
}

impl Exotic {
    pub fn new(
        class: Option<Rc<ClassDef>>,
        tag: &str,
        value_of: Option<Value>,
        to_str: Option<&str>,
    ) -> Rc<Exotic> {
        Rc::new(Exotic {
            class,
            tag: Rc::from(tag),
            value_of,
            to_str: to_str.map(Rc::from),
        })
    }

    /// An exotic with no usable conversion at all.
    pub fn opaque(tag: &str) -> Rc<Exotic> {
        Exotic::new(None, tag, None, None)
    }

    pub fn with_value(tag: &str, value_of: Value) -> Rc<Exotic> {
        Exotic::new(None, tag, Some(value_of), None)
    }

    pub fn with_text(tag: &str, text: &str) -> Rc<Exotic> {
        Exotic::new(None, tag, None, Some(text))
    }

    pub fn class(&self) -> Option<&Rc<ClassDef>> {
        self.class.as_ref()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value_of(&self) -> Option<&Value> {
        self.value_of.as_ref()
    }

    pub fn to_str(&self) -> Option<&str> {
        self.to_str.as_deref()
    }
}
