//! Error objects.

use std::rc::Rc;

use crate::value::Value;

/// An error value: `name`, `message`, and an optional `cause` payload
/// (`Undefined` when absent). Stack traces are not part of the model.
pub struct ErrVal {
    name: Rc<str>,
    message: Rc<str>,
    cause: Value,
}

impl ErrVal {
    pub fn new(name: &str, message: &str) -> Rc<ErrVal> {
        ErrVal::with_cause(name, message, Value::Undefined)
    }

    pub fn with_cause(name: &str, message: &str, cause: Value) -> Rc<ErrVal> {
        Rc::new(ErrVal {
            name: Rc::from(name),
            message: Rc::from(message),
            cause,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> &Value {
        &self.cause
    }
}
