//! Tree nodes (UI elements).

use std::rc::Rc;

use crate::value::Value;

/// A tree node: element type, reconciliation key, attached reference, and
/// the props payload. The first three are identity-compared by the fast
/// path; `props` is the only slot that gets walked.
pub struct ElemNode {
    ty: Value,
    key: Value,
    reference: Value,
    props: Value,
}

impl ElemNode {
    pub fn new(ty: Value, key: Value, reference: Value, props: Value) -> Rc<ElemNode> {
        Rc::new(ElemNode {
            ty,
            key,
            reference,
            props,
        })
    }

    pub fn ty(&self) -> &Value {
        &self.ty
    }

    pub fn key(&self) -> &Value {
        &self.key
    }

    pub fn reference(&self) -> &Value {
        &self.reference
    }

    pub fn props(&self) -> &Value {
        &self.props
    }
}
