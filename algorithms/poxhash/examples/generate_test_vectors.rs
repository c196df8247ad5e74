//! Generator for PoxHash test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Includes Empty, Small, Large, and specific boundary conditions, for both
//! generations.
#![allow(clippy::unwrap_used)]
use poxhash::{hash_with_variant, Base, PoxVariant};
use serde_json::{json, Map, Value};

/// `(name, input label)` pairs. Labels in capitals expand to generated data.
const CASES: [(&str, &str); 8] = [
    ("golden", "abcde"),
    ("empty", ""),
    ("small", "PoxHash"),
    ("sentence", "Hello, World!"),
    ("exact_64_zero", "EXACT_64_ZERO"),
    ("unaligned_63", "UNALIGNED_63_TWO"),
    ("medium_128", "MEDIUM_128_A"),
    ("large", "LARGE_1KB"),
];

fn expand(label: &str) -> Vec<u8> {
    match label {
        "LARGE_1KB" => vec![0x41u8; 1024],
        "MEDIUM_128_A" => vec![0x41u8; 128],
        "EXACT_64_ZERO" => vec![0x00u8; 64],
        "UNALIGNED_63_TWO" => vec![0x02u8; 63],
        val => val.as_bytes().to_vec(),
    }
}

fn main() {
    let mut vectors = Vec::new();

    for variant in [PoxVariant::Extended, PoxVariant::Classic] {
        for (name, label) in CASES {
            let digest = hash_with_variant(&expand(label), variant);

            let mut entry = Map::new();
            entry.insert("name".into(), json!(format!("{variant}_{name}")));
            entry.insert("variant".into(), json!(variant.name()));
            entry.insert("input".into(), json!(label));
            for base in Base::ALL {
                entry.insert(format!("{base}digest"), json!(digest.digest(base)));
            }
            entry.insert("bytes".into(), json!(digest.bytes));
            entry.insert("words".into(), json!(digest.words));
            entry.insert("doubles".into(), json!(digest.doubles));
            entry.insert("quad".into(), json!(digest.quad));
            vectors.push(Value::Object(entry));
        }
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
