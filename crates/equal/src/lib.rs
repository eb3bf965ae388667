//! dynval-equal - configurable deep structural equality over [`dynval`]
//! values.
//!
//! The engine decides whether two values are recursively equivalent under a
//! configurable relation: strict identity at the leaves (with `NaN`
//! self-equality), per-kind structural rules for composites, an
//! identity-keyed visitation cache for cyclic graphs, and a greedy bijection
//! search for set members that have no canonical order.
//!
//! ```
//! use dynval::Value;
//! use dynval_equal::{equals, equals_with, Options};
//! use serde_json::json;
//!
//! let a = Value::from(json!({"user": {"id": 1, "tags": ["x", "y"]}}));
//! let b = Value::from(json!({"user": {"id": 1, "tags": ["x", "y"]}}));
//! assert!(equals(&a, &b).unwrap());
//!
//! let options = Options::default().circular(true);
//! assert!(equals_with(&a, &b, options).unwrap());
//! ```
//!
//! Cyclic inputs need `circular`; the cache then guarantees termination and
//! transitive consistency:
//!
//! ```
//! use dynval::{Obj, Value};
//! use dynval_equal::{equals_with, Options};
//!
//! let a = Obj::new();
//! a.set("self", Value::Object(a.clone()));
//! let b = Obj::new();
//! b.set("self", Value::Object(b.clone()));
//! let options = Options::default().circular(true);
//! assert!(equals_with(&Value::Object(a), &Value::Object(b), options).unwrap());
//! ```

mod cache;
mod engine;
mod error;
mod kind;
mod options;
mod set_match;

pub use cache::VisitCache;
pub use engine::Engine;
pub use error::EqualError;
pub use options::{Options, PropScan};

use dynval::Value;

/// Compares two values under the default relation (every switch off).
pub fn equals(target: &Value, source: &Value) -> Result<bool, EqualError> {
    equals_with(target, source, Options::default())
}

/// Compares two values under `options`, allocating a fresh visitation cache
/// when `circular` is set.
pub fn equals_with(target: &Value, source: &Value, options: Options) -> Result<bool, EqualError> {
    Engine::new(options).equals(target, source)
}
