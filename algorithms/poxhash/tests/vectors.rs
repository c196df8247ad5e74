//! Official Test Vectors for PoxHash
//!
//! Verifies both generations against the canonical JSON test vectors, every
//! view of the digest included.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use poxhash::{hash_with_variant, Base, PoxVariant};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    name: String,
    variant: String,
    input: String,
    sexdigest: String,
    vigdigest: String,
    hexdigest: String,
    tetdigest: String,
    duodigest: String,
    octdigest: String,
    sendigest: String,
    bindigest: String,
    bytes: [u8; 8],
    words: [u16; 4],
    doubles: [u32; 2],
    quad: u64,
}

impl Vector {
    fn expected(&self, base: Base) -> &str {
        match base {
            Base::Sexagesimal => &self.sexdigest,
            Base::Vigesimal => &self.vigdigest,
            Base::Hexadecimal => &self.hexdigest,
            Base::Tetradecimal => &self.tetdigest,
            Base::Duodecimal => &self.duodigest,
            Base::Octal => &self.octdigest,
            Base::Senary => &self.sendigest,
            Base::Binary => &self.bindigest,
        }
    }
}

#[derive(Deserialize)]
struct TestVectors {
    vectors: Vec<Vector>,
}

fn load_vectors() -> Vec<Vector> {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    let data: TestVectors = serde_json::from_reader(reader).expect("Failed to parse JSON");
    data.vectors
}

fn input_bytes(input: &str) -> Vec<u8> {
    match input {
        "LARGE_1KB" => vec![b'A'; 1024],
        "MEDIUM_128_A" => vec![b'A'; 128],
        "EXACT_64_ZERO" => vec![0u8; 64],
        "UNALIGNED_63_TWO" => vec![2u8; 63],
        val => val.as_bytes().to_vec(),
    }
}

#[test]
fn test_official_vectors() {
    println!("\n=== Verifying Official Test Vectors ===");

    for vector in load_vectors() {
        let variant: PoxVariant = vector.variant.parse().unwrap();
        let digest = hash_with_variant(&input_bytes(&vector.input), variant);

        for base in Base::ALL {
            assert_eq!(
                digest.digest(base),
                vector.expected(base),
                "Vector Mismatched: {} ({base})",
                vector.name
            );
        }
        assert_eq!(digest.bytes, vector.bytes, "bytes: {}", vector.name);
        assert_eq!(digest.words, vector.words, "words: {}", vector.name);
        assert_eq!(digest.doubles, vector.doubles, "doubles: {}", vector.name);
        assert_eq!(digest.quad, vector.quad, "quad: {}", vector.name);
        let be_words = digest.words.map(u16::to_be_bytes).concat();
        assert_eq!(hex::encode_upper(be_words), vector.hexdigest, "hex: {}", vector.name);

        println!("✅ {:<24} | {}", vector.name, digest.hexdigest);
    }
    println!("=======================================\n");
}

#[test]
fn test_both_generations_covered() {
    let vectors = load_vectors();
    for variant in PoxVariant::ALL {
        let count = vectors.iter().filter(|v| v.variant == variant.name()).count();
        assert!(count >= 8, "too few {variant} vectors: {count}");
    }
}

#[test]
fn test_golden_fixture() {
    let digest = poxhash::hash(b"abcde");
    assert_eq!(digest.words, [24698, 45414, 11618, 41970]);
    assert_eq!(digest.hexdigest, "607AB1662D62A3F2");
    assert_eq!(digest.sexdigest, "6pcCas3DcBdU");
    assert_eq!(digest.quad, 11_813_554_674_452_553_850);
}
