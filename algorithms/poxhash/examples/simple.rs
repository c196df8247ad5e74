//! PoxHash Basic Example
//!
//! Minimal usage: `let digest = poxhash::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

use poxhash::{Base, PoxVariant};

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let digest = poxhash::hash(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {digest}");

    // Every base, and the classic generation for comparison
    for base in Base::ALL {
        println!("  {base}: {}", digest.digest(base));
    }
    let classic = poxhash::hash_with_variant(data, PoxVariant::Classic);
    println!("Classic: {classic} (bytes {})", hex::encode(classic.bytes));
}
