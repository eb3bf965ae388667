//! Interop with `serde_json` trees.

use crate::arr::Arr;
use crate::obj::Obj;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        Value::from(&json)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::str(s),
            serde_json::Value::Array(items) => {
                let arr = Arr::new();
                for item in items {
                    arr.push(Value::from(item));
                }
                Value::Array(arr)
            }
            serde_json::Value::Object(fields) => {
                let obj = Obj::new();
                for (key, child) in fields {
                    obj.set(key, Value::from(child));
                }
                Value::Object(obj)
            }
        }
    }
}
