//! The recursive evaluator.

use std::cell::Ref;
use std::rc::Rc;

use dynval::{
    Arr, Boxed, DateVal, ElemNode, ErrVal, Exotic, MapVal, Obj, Pattern, SetVal, Value,
};

use crate::cache::VisitCache;
use crate::error::EqualError;
use crate::kind::{classify, Kind};
use crate::options::{Options, PropScan};
use crate::set_match::match_unordered;

/// Shape-size bound under which `PropScan::Auto` walks entries in order
/// instead of iterating indices tail-first.
const SMALL_SHAPE_LEN: usize = 20;

/// A configured comparison engine. Construction fixes the option set and
/// the property enumeration strategy; the instance is then reusable across
/// any number of calls.
pub struct Engine {
    options: Options,
    scan: PropScan,
}

impl Engine {
    pub fn new(options: Options) -> Engine {
        Engine {
            options,
            scan: PropScan::Auto,
        }
    }

    pub fn with_scan(options: Options, scan: PropScan) -> Engine {
        Engine { options, scan }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn scan(&self) -> PropScan {
        self.scan
    }

    /// Compares two values, allocating a scratch visitation cache for the
    /// call when `circular` is set.
    pub fn equals(&self, target: &Value, source: &Value) -> Result<bool, EqualError> {
        let mut cache = VisitCache::new();
        self.equals_cached(target, source, &mut cache)
    }

    /// Compares two values against a caller-owned cache. The cache is only
    /// consulted when `circular` is set; reusing one across unrelated calls
    /// trades correctness for reuse and is the caller's risk.
    pub fn equals_cached(
        &self,
        target: &Value,
        source: &Value,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        if target.is(source) {
            return Ok(true);
        }
        self.eval(target, source, cache)
    }

    pub(crate) fn eval(
        &self,
        target: &Value,
        source: &Value,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        if !target.is_composite() || !source.is_composite() {
            if self.options.tree_node {
                if let (Value::Function(a), Value::Function(b)) = (target, source) {
                    return Ok(a.source() == b.source());
                }
            }
            return Ok(target.same_value_zero(source));
        }
        let kind = match classify(target, source, self.options.cross_realm) {
            Some(kind) => kind,
            None => return Ok(false),
        };
        if self.options.tree_node && kind == Kind::Node {
            if let (Value::Node(a), Value::Node(b)) = (target, source) {
                return self.node_fast(a, b, cache);
            }
        }
        if self.options.circular {
            if let (Some(target_addr), Some(source_addr)) = (target.address(), source.address()) {
                if let Some(counterpart) = cache.counterpart(target_addr) {
                    return Ok(counterpart == source_addr);
                }
                if let Some(counterpart) = cache.counterpart(source_addr) {
                    return Ok(counterpart == target_addr);
                }
                cache.pair(target_addr, source_addr);
            }
        }
        match (kind, target, source) {
            (Kind::Object, Value::Object(a), Value::Object(b)) => self.object_eq(a, b, cache),
            (Kind::Array, Value::Array(a), Value::Array(b)) => self.array_eq(a, b, cache),
            (Kind::Map, Value::Map(a), Value::Map(b)) => self.map_eq(a, b, cache),
            (Kind::Set, Value::Set(a), Value::Set(b)) => self.set_eq(a, b, cache),
            (Kind::View, _, _) => Ok(view_eq(target, source)),
            (Kind::Date, Value::Date(a), Value::Date(b)) => Ok(date_eq(a, b)),
            (Kind::Pattern, Value::Pattern(a), Value::Pattern(b)) => Ok(pattern_eq(a, b)),
            (
                Kind::BoxedBool | Kind::BoxedStr | Kind::BoxedNumber | Kind::BoxedBigInt,
                Value::Boxed(a),
                Value::Boxed(b),
            ) => Ok(boxed_eq(a, b)),
            (Kind::Error, Value::Error(a), Value::Error(b)) => Ok(error_eq(a, b)),
            (Kind::Node, Value::Node(a), Value::Node(b)) => self.node_walk(a, b, cache),
            (Kind::Exotic, Value::Exotic(a), Value::Exotic(b)) => self.exotic_eq(a, b, cache),
            // classify only returns a kind when the variants agree.
            _ => Ok(false),
        }
    }

    fn object_eq(&self, a: &Rc<Obj>, b: &Rc<Obj>, cache: &mut VisitCache) -> Result<bool, EqualError> {
        let a_props = a.props();
        let b_props = b.props();
        if a_props.len() != b_props.len() {
            return Ok(false);
        }
        let forward = match self.scan {
            PropScan::Forward => true,
            PropScan::Reverse => false,
            PropScan::Auto => a_props.len() < SMALL_SHAPE_LEN,
        };
        if forward {
            for (key, target_value) in a_props.iter() {
                let Some(source_value) = b_props.get(&**key) else {
                    return Ok(false);
                };
                if target_value.is(source_value) {
                    continue;
                }
                if !self.eval(target_value, source_value, cache)? {
                    return Ok(false);
                }
            }
        } else {
            for index in (0..a_props.len()).rev() {
                let Some((key, target_value)) = a_props.get_index(index) else {
                    return Ok(false);
                };
                let Some(source_value) = b_props.get(&**key) else {
                    return Ok(false);
                };
                if target_value.is(source_value) {
                    continue;
                }
                if !self.eval(target_value, source_value, cache)? {
                    return Ok(false);
                }
            }
        }
        if self.options.include_symbol_keys {
            return self.symbol_props_eq(a, b, cache);
        }
        Ok(true)
    }

    /// Additive symbol-keyed walk, run only after the string-keyed walk
    /// succeeded.
    fn symbol_props_eq(
        &self,
        a: &Rc<Obj>,
        b: &Rc<Obj>,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        let a_syms = a.sym_props();
        let b_syms = b.sym_props();
        if a_syms.len() != b_syms.len() {
            return Ok(false);
        }
        for (sym, target_value) in a_syms.iter().rev() {
            let Some((_, source_value)) = b_syms.iter().find(|(key, _)| Rc::ptr_eq(key, sym))
            else {
                return Ok(false);
            };
            if target_value.is(source_value) {
                continue;
            }
            if !self.eval(target_value, source_value, cache)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn array_eq(&self, a: &Rc<Arr>, b: &Rc<Arr>, cache: &mut VisitCache) -> Result<bool, EqualError> {
        let a_items = a.items();
        let b_items = b.items();
        if a_items.len() != b_items.len() {
            return Ok(false);
        }
        for index in (0..a_items.len()).rev() {
            let target_value = &a_items[index];
            let source_value = &b_items[index];
            if target_value.is(source_value) {
                continue;
            }
            if !self.eval(target_value, source_value, cache)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn map_eq(
        &self,
        a: &Rc<MapVal>,
        b: &Rc<MapVal>,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        let a_entries = a.entries();
        let b_entries = b.entries();
        if a_entries.len() != b_entries.len() {
            return Ok(false);
        }
        // Keys match under the container's native SameValueZero equality;
        // only values are compared recursively.
        for (key, target_value) in a_entries.iter() {
            let Some(source_value) = b_entries.get(key) else {
                return Ok(false);
            };
            if target_value.is(source_value) {
                continue;
            }
            if !self.eval(target_value, source_value, cache)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn set_eq(
        &self,
        a: &Rc<SetVal>,
        b: &Rc<SetVal>,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        let a_members = a.members();
        let b_members = b.members();
        if a_members.len() != b_members.len() {
            return Ok(false);
        }
        let mut pending: Vec<&Value> = Vec::new();
        for member in a_members.iter() {
            if b_members.contains(member) {
                continue;
            }
            // A primitive that fails direct membership has no looser
            // equality to fall back on.
            if !member.0.is_composite() {
                return Ok(false);
            }
            pending.push(&member.0);
        }
        if pending.is_empty() {
            return Ok(true);
        }
        let candidates: Vec<&Value> = b_members
            .iter()
            .map(|member| &member.0)
            .filter(|value| value.is_composite())
            .collect();
        if pending.len() != candidates.len() {
            return Ok(false);
        }
        if pending.len() == 1 {
            return self.eval(pending[0], candidates[0], cache);
        }
        match_unordered(self, &pending, candidates, cache)
    }

    /// Tree-node fast path: `ty`/`key`/`reference` by identity, recursion
    /// only into the props payload.
    fn node_fast(
        &self,
        a: &Rc<ElemNode>,
        b: &Rc<ElemNode>,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        if !a.ty().is(b.ty()) || !a.key().is(b.key()) || !a.reference().is(b.reference()) {
            return Ok(false);
        }
        if a.props().is(b.props()) {
            return Ok(true);
        }
        self.eval(a.props(), b.props(), cache)
    }

    /// Generic node walk used when the fast path is disabled: all four
    /// slots compare recursively.
    fn node_walk(
        &self,
        a: &Rc<ElemNode>,
        b: &Rc<ElemNode>,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        let slots = [
            (a.ty(), b.ty()),
            (a.key(), b.key()),
            (a.reference(), b.reference()),
            (a.props(), b.props()),
        ];
        for (target_value, source_value) in slots {
            if target_value.is(source_value) {
                continue;
            }
            if !self.eval(target_value, source_value, cache)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn exotic_eq(
        &self,
        a: &Rc<Exotic>,
        b: &Rc<Exotic>,
        cache: &mut VisitCache,
    ) -> Result<bool, EqualError> {
        if self.options.coercion_fallback {
            if let (Some(target_value), Some(source_value)) = (a.value_of(), b.value_of()) {
                if target_value.is(source_value) {
                    return Ok(true);
                }
                return self.eval(target_value, source_value, cache);
            }
            if let (Some(target_text), Some(source_text)) = (a.to_str(), b.to_str()) {
                return Ok(target_text == source_text);
            }
        }
        Err(EqualError::IncomparableType(a.tag().to_string()))
    }
}

/// Byte range a binary value exposes for comparison: a view's window, or a
/// raw buffer reinterpreted whole.
fn viewed_bytes(value: &Value) -> Option<Ref<'_, [u8]>> {
    match value {
        Value::Buffer(buf) => Some(Ref::map(buf.bytes(), Vec::as_slice)),
        Value::View(view) => Some(view.bytes()),
        _ => None,
    }
}

fn view_eq(target: &Value, source: &Value) -> bool {
    match (viewed_bytes(target), viewed_bytes(source)) {
        (Some(a), Some(b)) => a.len() == b.len() && *a == *b,
        _ => false,
    }
}

fn date_eq(a: &Rc<DateVal>, b: &Rc<DateVal>) -> bool {
    let (target_time, source_time) = (a.time(), b.time());
    target_time == source_time || (target_time.is_nan() && source_time.is_nan())
}

fn pattern_eq(a: &Rc<Pattern>, b: &Rc<Pattern>) -> bool {
    a.source() == b.source() && a.flags() == b.flags() && a.last_index() == b.last_index()
}

fn boxed_eq(a: &Rc<Boxed>, b: &Rc<Boxed>) -> bool {
    match (a.as_ref(), b.as_ref()) {
        (Boxed::Bool(x), Boxed::Bool(y)) => x == y,
        (Boxed::Str(x), Boxed::Str(y)) => x == y,
        (Boxed::Number(x), Boxed::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Boxed::BigInt(x), Boxed::BigInt(y)) => x == y,
        _ => false,
    }
}

/// Shallow field comparison; `cause` is strict identity, never recursion.
fn error_eq(a: &Rc<ErrVal>, b: &Rc<ErrVal>) -> bool {
    a.name() == b.name() && a.message() == b.message() && a.cause().is(b.cause())
}
