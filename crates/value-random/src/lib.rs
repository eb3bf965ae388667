//! dynval-random - seeded random [`Value`] generation.
//!
//! Feeds the test and benchmark harnesses of the sibling crates with
//! arbitrary value trees. Generation is driven entirely by the caller's
//! `Rng`, so a seeded generator reproduces the same shape every run.
//!
//! Generated values are acyclic, and slots the equality engine compares by
//! identity (map keys, error causes) stay primitive, so every generated
//! value is deep-equal to its [`Value::deep_clone`].

use rand::distributions::Alphanumeric;
use rand::Rng;

use dynval::{Arr, BufView, ByteBuf, DateVal, MapVal, Obj, Pattern, SetVal, Value, ViewKind};

/// Bounds and kind mix of the generated trees.
#[derive(Clone, Copy, Debug)]
pub struct GenOptions {
    /// Maximum nesting depth; levels at the bound generate scalars only.
    pub max_depth: usize,
    /// Maximum child count of any one container.
    pub max_width: usize,
    /// When false, only plain JSON kinds (null/bool/number/string/array/
    /// object) are generated; when true, the full model is in play.
    pub extended: bool,
}

impl Default for GenOptions {
    fn default() -> GenOptions {
        GenOptions {
            max_depth: 4,
            max_width: 6,
            extended: true,
        }
    }
}

/// Generates a random value over the full model.
pub fn random_value<R: Rng>(rng: &mut R, options: &GenOptions) -> Value {
    gen_value(rng, options, 0)
}

/// Generates a random plain-data value (JSON kinds only), whatever the
/// option set says.
pub fn random_json<R: Rng>(rng: &mut R, options: &GenOptions) -> Value {
    let plain = GenOptions {
        extended: false,
        ..*options
    };
    gen_value(rng, &plain, 0)
}

fn gen_value<R: Rng>(rng: &mut R, options: &GenOptions, depth: usize) -> Value {
    if depth >= options.max_depth {
        return gen_scalar(rng, options.extended);
    }
    let roll = rng.gen_range(0..100u32);
    if !options.extended {
        return match roll {
            0..=54 => gen_scalar(rng, false),
            55..=79 => gen_object(rng, options, depth),
            _ => gen_array(rng, options, depth),
        };
    }
    match roll {
        0..=44 => gen_scalar(rng, true),
        45..=59 => gen_object(rng, options, depth),
        60..=69 => gen_array(rng, options, depth),
        70..=75 => gen_map(rng, options, depth),
        76..=81 => gen_set(rng, options, depth),
        82..=85 => gen_date(rng),
        86..=89 => gen_boxed(rng),
        90..=94 => gen_binary(rng),
        _ => gen_pattern(rng),
    }
}

fn gen_scalar<R: Rng>(rng: &mut R, extended: bool) -> Value {
    match rng.gen_range(0..8u32) {
        0 => Value::Undefined,
        1 => Value::Null,
        2 => Value::Bool(rng.gen()),
        3 | 4 => Value::Number(gen_number(rng)),
        5 if extended => Value::BigInt(rng.gen::<i64>() as i128),
        _ => Value::str(&gen_string(rng)),
    }
}

fn gen_number<R: Rng>(rng: &mut R) -> f64 {
    match rng.gen_range(0..6u32) {
        0 => 0.0,
        1 => -0.0,
        2 => f64::NAN,
        3 => rng.gen_range(-1000..1000) as f64,
        _ => rng.gen::<f64>() * 1e6,
    }
}

fn gen_string<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(0..8usize);
    (0..len)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

fn gen_object<R: Rng>(rng: &mut R, options: &GenOptions, depth: usize) -> Value {
    let obj = Obj::new();
    let width = rng.gen_range(0..=options.max_width);
    for index in 0..width {
        let key = format!("{}{}", gen_string(rng), index);
        obj.set(&key, gen_value(rng, options, depth + 1));
    }
    Value::Object(obj)
}

fn gen_array<R: Rng>(rng: &mut R, options: &GenOptions, depth: usize) -> Value {
    let arr = Arr::new();
    let width = rng.gen_range(0..=options.max_width);
    for _ in 0..width {
        arr.push(gen_value(rng, options, depth + 1));
    }
    Value::Array(arr)
}

// Map keys stay primitive: composite keys only ever match by identity, so
// a structural copy of such a map would stop being equal to the original.
fn gen_map<R: Rng>(rng: &mut R, options: &GenOptions, depth: usize) -> Value {
    let map = MapVal::new();
    let width = rng.gen_range(0..=options.max_width);
    for _ in 0..width {
        map.set(gen_scalar(rng, true), gen_value(rng, options, depth + 1));
    }
    Value::Map(map)
}

fn gen_set<R: Rng>(rng: &mut R, options: &GenOptions, depth: usize) -> Value {
    let set = SetVal::new();
    let width = rng.gen_range(0..=options.max_width);
    for _ in 0..width {
        set.add(gen_value(rng, options, depth + 1));
    }
    Value::Set(set)
}

fn gen_date<R: Rng>(rng: &mut R) -> Value {
    if rng.gen_range(0..8u32) == 0 {
        return Value::Date(DateVal::invalid());
    }
    Value::Date(DateVal::new(rng.gen_range(0..2_000_000_000_000i64) as f64))
}

fn gen_boxed<R: Rng>(rng: &mut R) -> Value {
    match rng.gen_range(0..4u32) {
        0 => Value::boxed_bool(rng.gen()),
        1 => Value::boxed_str(&gen_string(rng)),
        2 => Value::boxed_number(gen_number(rng)),
        _ => Value::boxed_bigint(rng.gen::<i64>() as i128),
    }
}

fn gen_binary<R: Rng>(rng: &mut R) -> Value {
    let len = rng.gen_range(0..12usize);
    let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
    if rng.gen() {
        return Value::Buffer(ByteBuf::from_bytes(bytes));
    }
    let kind = match rng.gen_range(0..4u32) {
        0 => ViewKind::Uint8,
        1 => ViewKind::Int8,
        2 => ViewKind::Float64,
        _ => ViewKind::DataView,
    };
    Value::View(BufView::of_bytes(kind, bytes))
}

fn gen_pattern<R: Rng>(rng: &mut R) -> Value {
    const SOURCES: [&str; 4] = ["[a-z]+", "foo|bar", "x.*y", "[0-9]{2,4}"];
    const FLAGS: [&str; 4] = ["", "i", "gi", "im"];
    let source = SOURCES[rng.gen_range(0..SOURCES.len())];
    let flags = FLAGS[rng.gen_range(0..FLAGS.len())];
    match Pattern::new(source, flags) {
        Ok(pattern) => Value::Pattern(pattern),
        Err(_) => Value::Null,
    }
}
