//! The type classifier.

use std::rc::Rc;

use dynval::{Boxed, ClassDef, Value};

/// Comparison strategy resolved per pair of composite values. Raw buffers
/// normalize to `View` so one rule covers directly-viewed and
/// buffer-wrapped binary data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Object,
    Array,
    Map,
    Set,
    View,
    Date,
    Pattern,
    BoxedBool,
    BoxedStr,
    BoxedNumber,
    BoxedBigInt,
    Error,
    Node,
    Exotic,
}

/// Derives the pair's comparison kind, or `None` when the pair is unequal
/// on sight. Default mode enforces constructor discipline on the branded
/// kinds; cross-realm mode classifies by structural tag instead, which for
/// same-variant pairs agrees by construction.
pub(crate) fn classify(target: &Value, source: &Value, cross_realm: bool) -> Option<Kind> {
    match (target, source) {
        (Value::Object(a), Value::Object(b)) => {
            if cross_realm || same_class(a.class(), b.class()) {
                return Some(Kind::Object);
            }
            // An own property literally named `constructor` means the brand
            // cannot be trusted; classification falls back to the
            // structural tag, and both sides are tagged Object.
            if a.has("constructor") || b.has("constructor") {
                return Some(Kind::Object);
            }
            None
        }
        (Value::Array(a), Value::Array(b)) => {
            branded(a.class(), b.class(), cross_realm, Kind::Array)
        }
        (Value::Map(a), Value::Map(b)) => branded(a.class(), b.class(), cross_realm, Kind::Map),
        (Value::Set(a), Value::Set(b)) => branded(a.class(), b.class(), cross_realm, Kind::Set),
        (Value::Date(_), Value::Date(_)) => Some(Kind::Date),
        (Value::Pattern(_), Value::Pattern(_)) => Some(Kind::Pattern),
        (Value::Boxed(a), Value::Boxed(b)) => match (a.as_ref(), b.as_ref()) {
            (Boxed::Bool(_), Boxed::Bool(_)) => Some(Kind::BoxedBool),
            (Boxed::Str(_), Boxed::Str(_)) => Some(Kind::BoxedStr),
            (Boxed::Number(_), Boxed::Number(_)) => Some(Kind::BoxedNumber),
            (Boxed::BigInt(_), Boxed::BigInt(_)) => Some(Kind::BoxedBigInt),
            _ => None,
        },
        (Value::Error(_), Value::Error(_)) => Some(Kind::Error),
        (Value::Buffer(a), Value::Buffer(b)) => {
            (a.is_shared() == b.is_shared()).then_some(Kind::View)
        }
        (Value::View(a), Value::View(b)) => (a.kind() == b.kind()).then_some(Kind::View),
        (Value::Node(_), Value::Node(_)) => Some(Kind::Node),
        (Value::Exotic(a), Value::Exotic(b)) => {
            if !cross_realm && !same_class(a.class(), b.class()) {
                return None;
            }
            (a.tag() == b.tag()).then_some(Kind::Exotic)
        }
        _ => None,
    }
}

fn same_class(a: Option<&Rc<ClassDef>>, b: Option<&Rc<ClassDef>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

fn branded(
    a: Option<&Rc<ClassDef>>,
    b: Option<&Rc<ClassDef>>,
    cross_realm: bool,
    kind: Kind,
) -> Option<Kind> {
    (cross_realm || same_class(a, b)).then_some(kind)
}
