//! The [`Value`] union and its identity predicates.

use std::fmt;
use std::rc::Rc;

use crate::arr::Arr;
use crate::binary::{BufView, ByteBuf};
use crate::boxed::Boxed;
use crate::date::DateVal;
use crate::error_value::ErrVal;
use crate::exotic::Exotic;
use crate::map::MapVal;
use crate::node::ElemNode;
use crate::obj::Obj;
use crate::pattern::Pattern;
use crate::set::SetVal;

/// An identity primitive: two symbols are the same value only when they are
/// the same allocation. The description is informational.
pub struct Sym {
    description: Option<Rc<str>>,
}

impl Sym {
    pub fn new(description: &str) -> Rc<Sym> {
        Rc::new(Sym {
            description: Some(Rc::from(description)),
        })
    }

    pub fn anonymous() -> Rc<Sym> {
        Rc::new(Sym { description: None })
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A function value. Identity is the allocation; `source` carries the
/// textual form for the optional source-text comparison mode.
pub struct Func {
    source: Rc<str>,
}

impl Func {
    pub fn new(source: &str) -> Rc<Func> {
        Rc::new(Func {
            source: Rc::from(source),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A dynamically typed value.
///
/// Primitives carry their payload inline; composites are `Rc`-shared cells
/// with reference identity. `Clone` is shallow: cloning a composite clones
/// the handle, not the cell.
#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    Str(Rc<str>),
    Symbol(Rc<Sym>),
    Function(Rc<Func>),
    Object(Rc<Obj>),
    Array(Rc<Arr>),
    Map(Rc<MapVal>),
    Set(Rc<SetVal>),
    Date(Rc<DateVal>),
    Pattern(Rc<Pattern>),
    Boxed(Rc<Boxed>),
    Error(Rc<ErrVal>),
    Buffer(Rc<ByteBuf>),
    View(Rc<BufView>),
    Node(Rc<ElemNode>),
    Exotic(Rc<Exotic>),
}

impl Value {
    /// Strict identity: primitives by value (IEEE semantics, so `NaN` is
    /// unequal to itself and `0` equals `-0`), strings by content, symbols,
    /// functions and composites by allocation.
    pub fn is(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::Pattern(a), Value::Pattern(b)) => Rc::ptr_eq(a, b),
            (Value::Boxed(a), Value::Boxed(b)) => Rc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Rc::ptr_eq(a, b),
            (Value::Buffer(a), Value::Buffer(b)) => Rc::ptr_eq(a, b),
            (Value::View(a), Value::View(b)) => Rc::ptr_eq(a, b),
            (Value::Node(a), Value::Node(b)) => Rc::ptr_eq(a, b),
            (Value::Exotic(a), Value::Exotic(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// [`Value::is`] with `NaN` treated as equal to itself. This is the key
    /// equality of [`MapVal`] and [`SetVal`].
    pub fn same_value_zero(&self, other: &Value) -> bool {
        if let (Value::Number(a), Value::Number(b)) = (self, other) {
            return a == b || (a.is_nan() && b.is_nan());
        }
        self.is(other)
    }

    /// True for the `Rc`-celled object-like variants. Symbols and functions
    /// count as primitives here: they have identity but no structure.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Value::Object(_)
                | Value::Array(_)
                | Value::Map(_)
                | Value::Set(_)
                | Value::Date(_)
                | Value::Pattern(_)
                | Value::Boxed(_)
                | Value::Error(_)
                | Value::Buffer(_)
                | Value::View(_)
                | Value::Node(_)
                | Value::Exotic(_)
        )
    }

    /// Identity key of a composite: the address of its cell. `None` for
    /// primitives.
    pub fn address(&self) -> Option<usize> {
        match self {
            Value::Object(c) => Some(Rc::as_ptr(c) as usize),
            Value::Array(c) => Some(Rc::as_ptr(c) as usize),
            Value::Map(c) => Some(Rc::as_ptr(c) as usize),
            Value::Set(c) => Some(Rc::as_ptr(c) as usize),
            Value::Date(c) => Some(Rc::as_ptr(c) as usize),
            Value::Pattern(c) => Some(Rc::as_ptr(c) as usize),
            Value::Boxed(c) => Some(Rc::as_ptr(c) as usize),
            Value::Error(c) => Some(Rc::as_ptr(c) as usize),
            Value::Buffer(c) => Some(Rc::as_ptr(c) as usize),
            Value::View(c) => Some(Rc::as_ptr(c) as usize),
            Value::Node(c) => Some(Rc::as_ptr(c) as usize),
            Value::Exotic(c) => Some(Rc::as_ptr(c) as usize),
            _ => None,
        }
    }

    /// Structural tag of the value, the cross-realm classification key.
    /// Exotics report their own tag.
    pub fn type_tag(&self) -> &str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::BigInt(_) => "BigInt",
            Value::Str(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::Object(_) => "Object",
            Value::Array(_) => "Array",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
            Value::Date(_) => "Date",
            Value::Pattern(_) => "RegExp",
            Value::Boxed(b) => b.type_tag(),
            Value::Error(_) => "Error",
            Value::Buffer(b) => {
                if b.is_shared() {
                    "SharedArrayBuffer"
                } else {
                    "ArrayBuffer"
                }
            }
            Value::View(v) => v.kind().type_tag(),
            Value::Node(_) => "Object",
            Value::Exotic(e) => e.tag(),
        }
    }

    pub fn str(text: &str) -> Value {
        Value::Str(Rc::from(text))
    }

    pub fn symbol(description: &str) -> Value {
        Value::Symbol(Sym::new(description))
    }

    pub fn function(source: &str) -> Value {
        Value::Function(Func::new(source))
    }

    pub fn date(ms: f64) -> Value {
        Value::Date(DateVal::new(ms))
    }

    pub fn boxed_bool(value: bool) -> Value {
        Value::Boxed(Rc::new(Boxed::Bool(value)))
    }

    pub fn boxed_str(value: &str) -> Value {
        Value::Boxed(Rc::new(Boxed::Str(Rc::from(value))))
    }

    pub fn boxed_number(value: f64) -> Value {
        Value::Boxed(Rc::new(Boxed::Number(value)))
    }

    pub fn boxed_bigint(value: i128) -> Value {
        Value::Boxed(Rc::new(Boxed::BigInt(value)))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Value {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::str(value)
    }
}

impl From<Rc<Obj>> for Value {
    fn from(cell: Rc<Obj>) -> Value {
        Value::Object(cell)
    }
}

impl From<Rc<Arr>> for Value {
    fn from(cell: Rc<Arr>) -> Value {
        Value::Array(cell)
    }
}

impl From<Rc<MapVal>> for Value {
    fn from(cell: Rc<MapVal>) -> Value {
        Value::Map(cell)
    }
}

impl From<Rc<SetVal>> for Value {
    fn from(cell: Rc<SetVal>) -> Value {
        Value::Set(cell)
    }
}

impl From<Rc<DateVal>> for Value {
    fn from(cell: Rc<DateVal>) -> Value {
        Value::Date(cell)
    }
}

impl From<Rc<Pattern>> for Value {
    fn from(cell: Rc<Pattern>) -> Value {
        Value::Pattern(cell)
    }
}

impl From<Rc<ErrVal>> for Value {
    fn from(cell: Rc<ErrVal>) -> Value {
        Value::Error(cell)
    }
}

impl From<Rc<ByteBuf>> for Value {
    fn from(cell: Rc<ByteBuf>) -> Value {
        Value::Buffer(cell)
    }
}

impl From<Rc<BufView>> for Value {
    fn from(cell: Rc<BufView>) -> Value {
        Value::View(cell)
    }
}

impl From<Rc<ElemNode>> for Value {
    fn from(cell: Rc<ElemNode>) -> Value {
        Value::Node(cell)
    }
}

impl From<Rc<Exotic>> for Value {
    fn from(cell: Rc<Exotic>) -> Value {
        Value::Exotic(cell)
    }
}

// Values form arbitrary graphs, so Debug prints composites shallowly
// (tag + cell address) instead of descending into children.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::BigInt(i) => write!(f, "{i}n"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, "Symbol({})", s.description().unwrap_or("")),
            Value::Function(c) => write!(f, "Function@{:x}", Rc::as_ptr(c) as usize),
            other => write!(
                f,
                "{}@{:x}",
                other.type_tag(),
                other.address().unwrap_or_default()
            ),
        }
    }
}
