//! Record types and definitions shared by the integration tests
//!
//! The records cover scalar fields, collections, nested built records,
//! embedded structs and private fields.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fixture_forge::{deferred, identity_sequencer, sequenced_by, Record, Registry, Schema};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Builtin {
    pub boolean: bool,
    pub string: String,
    pub int: i64,
    pub int8: i8,
    pub int32: i32,
    pub uint: u64,
    pub uint8: u8,
    pub usize: usize,
    pub byte: u8,
    pub rune: char,
    pub float32: f32,
    pub float64: f64,
}

impl Record for Builtin {
    fn schema() -> Schema<Self> {
        Schema::new()
            .field("Bool", |r: &mut Builtin, v: bool| r.boolean = v)
            .field("String", |r: &mut Builtin, v: String| r.string = v)
            .field("Int", |r: &mut Builtin, v: i64| r.int = v)
            .field("Int8", |r: &mut Builtin, v: i8| r.int8 = v)
            .field("Int32", |r: &mut Builtin, v: i32| r.int32 = v)
            .field("Uint", |r: &mut Builtin, v: u64| r.uint = v)
            .field("Uint8", |r: &mut Builtin, v: u8| r.uint8 = v)
            .field("Usize", |r: &mut Builtin, v: usize| r.usize = v)
            .field("Byte", |r: &mut Builtin, v: u8| r.byte = v)
            .field("Rune", |r: &mut Builtin, v: char| r.rune = v)
            .field("Float32", |r: &mut Builtin, v: f32| r.float32 = v)
            .field("Float64", |r: &mut Builtin, v: f64| r.float64 = v)
    }
}

#[derive(Debug, Default)]
pub struct Unexported {
    secret: String,
}

impl Record for Unexported {
    fn schema() -> Schema<Self> {
        Schema::new().private("secret")
    }
}

#[derive(Debug, Default)]
pub struct Slice {
    pub ints: Vec<i32>,
}

impl Record for Slice {
    fn schema() -> Schema<Self> {
        Schema::new().field("Ints", |r: &mut Slice, v: Vec<i32>| r.ints = v)
    }
}

#[derive(Debug, Default)]
pub struct Map {
    pub strings: HashMap<String, String>,
}

impl Record for Map {
    fn schema() -> Schema<Self> {
        Schema::new().field("Strings", |r: &mut Map, v: HashMap<String, String>| {
            r.strings = v
        })
    }
}

/// Holds another record, typically one produced by a previous build
#[derive(Debug, Default)]
pub struct Nested {
    pub bin: Option<Box<Builtin>>,
}

impl Record for Nested {
    fn schema() -> Schema<Self> {
        Schema::new().field("Bin", |r: &mut Nested, v: Box<Builtin>| r.bin = Some(v))
    }
}

/// Exposes the embedded record's `Int` field under its own name
#[derive(Debug, Default)]
pub struct Embedded {
    pub builtin: Builtin,
    pub label: String,
}

impl Record for Embedded {
    fn schema() -> Schema<Self> {
        Schema::new()
            .field("Int", |r: &mut Embedded, v: i64| r.builtin.int = v)
            .field("Label", |r: &mut Embedded, v: String| r.label = v)
    }
}

#[derive(Debug, Default)]
pub struct Lazily {
    pub token: String,
}

impl Record for Lazily {
    fn schema() -> Schema<Self> {
        Schema::new().field("Token", |r: &mut Lazily, v: String| r.token = v)
    }
}

/// Registry populated with the shared definitions, plus a handle on the
/// number of times the `lazily` callback has run
pub fn registry() -> (Registry, Arc<AtomicUsize>) {
    let mut registry = Registry::new();
    let lazy_calls = Arc::new(AtomicUsize::new(0));

    registry
        .define::<Builtin, _>("builtin", |f| {
            f.set("Bool", true)
                .set("String", "string".to_string())
                .set("Int", 1i64)
                .set("Int8", 8i8)
                .set("Int32", 32i32)
                .set("Uint", 1u64)
                .set("Uint8", 8u8)
                .set("Usize", std::mem::size_of::<Vec<i32>>())
                .set("Rune", '⌘')
                .set("Float32", 32.0f32)
                .set("Float64", 64.0f64);
            let first_byte = f
                .value_of::<String>("String")
                .map(|s| s.as_bytes()[0])
                .unwrap_or_default();
            f.set("Byte", first_byte);
        })
        .unwrap();

    registry
        .define::<Unexported, _>("unexported", |f| {
            f.set("secret", "boom!".to_string());
        })
        .unwrap();

    registry
        .define::<Slice, _>("slice", |f| {
            f.set("Ints", vec![1, 2, 3]);
        })
        .unwrap();

    registry
        .define::<Map, _>("map", |f| {
            let strings = HashMap::from([("key".to_string(), "value".to_string())]);
            f.set("Strings", strings);
        })
        .unwrap();

    registry
        .define::<Nested, _>("nested", |f| {
            f.set(
                "Bin",
                Box::new(Builtin {
                    int: 1,
                    ..Builtin::default()
                }),
            );
        })
        .unwrap();

    registry
        .define::<Embedded, _>("embedded", |f| {
            f.set("Int", 1i64);
        })
        .unwrap();

    registry
        .define::<Builtin, _>("sequenced", |f| {
            f.set("Uint", sequenced_by(identity_sequencer))
                .set("String", sequenced_by(|n| format!("string {n}")));
        })
        .unwrap();

    let calls = Arc::clone(&lazy_calls);
    registry
        .define::<Lazily, _>("lazily", move |f| {
            f.set(
                "Token",
                deferred(move || {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    format!("token-{n}")
                }),
            );
        })
        .unwrap();

    (registry, lazy_calls)
}
