//! Deep structural cloning.

use std::collections::HashMap;
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
use crate::set::SetVal;
use crate::value::Value;

impl Value {
    /// Structural copy with fresh identities. Sharing is preserved through a
    /// clone map keyed on cell identity, so a child reached twice clones
    /// once and cycles come out as cycles. Identity primitives (symbols,
    /// functions) are shared rather than copied, and class brands stay
    /// shared so branded clones keep their nominal type.
    ///
    /// Slots that are *identity*-compared downstream (error causes,
    /// composite map keys) still get structurally fresh copies; callers who
    /// need those to stay interchangeable should keep them primitive.
    pub fn deep_clone(&self) -> Value {
        clone_value(self, &mut HashMap::new())
    }
}

fn clone_value(value: &Value, seen: &mut HashMap<usize, Value>) -> Value {
    if let Some(addr) = value.address() {
        if let Some(done) = seen.get(&addr) {
            return done.clone();
        }
    }
    match value {
        Value::Object(cell) => {
            let out = match cell.class() {
                Some(class) => Obj::with_class(class.clone()),
                None => Obj::new(),
            };
            seen.insert(Rc::as_ptr(cell) as usize, Value::Object(out.clone()));
            for (key, child) in cell.props().iter() {
                out.set(key, clone_value(child, seen));
            }
            for (sym, child) in cell.sym_props().iter() {
                out.set_symbol(sym, clone_value(child, seen));
            }
            Value::Object(out)
        }
        Value::Array(cell) => {
            let out = match cell.class() {
                Some(class) => Arr::with_class(class.clone()),
                None => Arr::new(),
            };
            seen.insert(Rc::as_ptr(cell) as usize, Value::Array(out.clone()));
            for child in cell.items().iter() {
                out.push(clone_value(child, seen));
            }
            Value::Array(out)
        }
        Value::Map(cell) => {
            let out = match cell.class() {
                Some(class) => MapVal::with_class(class.clone()),
                None => MapVal::new(),
            };
            seen.insert(Rc::as_ptr(cell) as usize, Value::Map(out.clone()));
            for (key, child) in cell.entries().iter() {
                out.set(clone_value(&key.0, seen), clone_value(child, seen));
            }
            Value::Map(out)
        }
        Value::Set(cell) => {
            let out = match cell.class() {
                Some(class) => SetVal::with_class(class.clone()),
                None => SetVal::new(),
            };
            seen.insert(Rc::as_ptr(cell) as usize, Value::Set(out.clone()));
            for member in cell.members().iter() {
                out.add(clone_value(&member.0, seen));
            }
            Value::Set(out)
        }
        Value::Date(cell) => {
            let out = Value::Date(DateVal::new(cell.time()));
            seen.insert(Rc::as_ptr(cell) as usize, out.clone());
            out
        }
        Value::Pattern(cell) => {
            let out = Value::Pattern(cell.duplicate());
            seen.insert(Rc::as_ptr(cell) as usize, out.clone());
            out
        }
        Value::Boxed(cell) => {
            let out = Value::Boxed(Rc::new(Boxed::clone(cell)));
            seen.insert(Rc::as_ptr(cell) as usize, out.clone());
            out
        }
        Value::Error(cell) => {
            let cause = clone_value(cell.cause(), seen);
            let out = Value::Error(ErrVal::with_cause(cell.name(), cell.message(), cause));
            seen.insert(Rc::as_ptr(cell) as usize, out.clone());
            out
        }
        Value::Buffer(cell) => Value::Buffer(clone_buf(cell, seen)),
        Value::View(cell) => {
            let buf = clone_buf(cell.buf(), seen);
            let out = Value::View(BufView::new(
                cell.kind(),
                &buf,
                cell.byte_offset(),
                cell.byte_length(),
            ));
            seen.insert(Rc::as_ptr(cell) as usize, out.clone());
            out
        }
        Value::Node(cell) => {
            // Node slots are immutable, so the clone cannot be registered
            // before its children; a cycle through a node unrolls one extra
            // layer and still terminates via the composites along the path.
            let out = Value::Node(ElemNode::new(
                clone_value(cell.ty(), seen),
                clone_value(cell.key(), seen),
                clone_value(cell.reference(), seen),
                clone_value(cell.props(), seen),
            ));
            seen.insert(Rc::as_ptr(cell) as usize, out.clone());
            out
        }
        Value::Exotic(cell) => {
            let value_of = cell.value_of().map(|inner| clone_value(inner, seen));
            let out = Value::Exotic(Exotic::new(
                cell.class().cloned(),
                cell.tag(),
                value_of,
                cell.to_str(),
            ));
            seen.insert(Rc::as_ptr(cell) as usize, out.clone());
            out
        }
        primitive => primitive.clone(),
    }
}

/// Buffers go through the clone map too, so views sharing a buffer keep
/// sharing its clone.
fn clone_buf(buf: &Rc<ByteBuf>, seen: &mut HashMap<usize, Value>) -> Rc<ByteBuf> {
    let addr = Rc::as_ptr(buf) as usize;
    if let Some(Value::Buffer(done)) = seen.get(&addr) {
        return done.clone();
    }
    let bytes = buf.bytes().clone();
    let out = if buf.is_shared() {
        ByteBuf::shared_from_bytes(bytes)
    } else {
        ByteBuf::from_bytes(bytes)
    };
    seen.insert(addr, Value::Buffer(out.clone()));
    out
}
