//! Tests for Huffman code construction
//!
//! Both constructions are checked for optimality against known weighted
//! lengths, prefix-freeness, and lossless encode/decode.

use rust_indexed_heaps::huffman::{HuffmanCode, HuffmanCoder, HuffmanError};
use std::hash::Hash;

fn coder<S: Eq + Hash + Clone>(weights: &[(S, u64)]) -> HuffmanCoder<S, u64> {
    let mut coder = HuffmanCoder::new();
    for (symbol, weight) in weights {
        coder.add_symbol(symbol.clone(), *weight).unwrap();
    }
    coder
}

fn assert_prefix_free<S: Eq + Hash + Clone>(code: &HuffmanCode<S, u64>) {
    let words: Vec<&str> = code.codes().values().map(String::as_str).collect();
    for (i, a) in words.iter().enumerate() {
        assert!(a.chars().all(|c| c == '0' || c == '1'));
        for (j, b) in words.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
            }
        }
    }
}

/// Kraft equality holds for every complete binary code tree
fn kraft_sum<S: Eq + Hash + Clone>(code: &HuffmanCode<S, u64>) -> f64 {
    code.codes()
        .values()
        .map(|w| 0.5f64.powi(w.len() as i32))
        .sum()
}

#[test]
fn test_two_symbols() {
    let c = coder(&[("x", 3), ("y", 9)]);
    for code in [c.encoding_rule().unwrap(), c.encoding_rule_with_queues().unwrap()] {
        assert_eq!(code.max_code_len(), Some(1));
        assert_eq!(code.min_code_len(), Some(1));
        assert_eq!(code.weighted_length(), Some(12));
        assert_ne!(code.code(&"x"), code.code(&"y"));
    }
}

#[test]
fn test_equal_weights_balanced() {
    let symbols: Vec<(u8, u64)> = (0..8).map(|s| (s, 1)).collect();
    let code = coder(&symbols).encoding_rule().unwrap();
    assert_eq!(code.max_code_len(), Some(3));
    assert_eq!(code.min_code_len(), Some(3));
    assert_eq!(code.weighted_length(), Some(24));
}

#[test]
fn test_fibonacci_weights_skewed() {
    // Fibonacci weights force a fully skewed tree
    let mut fib = vec![1u64, 1];
    while fib.len() < 20 {
        let next = fib[fib.len() - 1] + fib[fib.len() - 2];
        fib.push(next);
    }
    let symbols: Vec<(usize, u64)> = fib.iter().copied().enumerate().collect();
    let c = coder(&symbols);

    let by_heap = c.encoding_rule().unwrap();
    let by_queues = c.encoding_rule_with_queues().unwrap();
    assert_eq!(by_heap.max_code_len(), Some(19));
    assert_eq!(by_heap.min_code_len(), Some(1));
    assert_eq!(by_heap.weighted_length(), by_queues.weighted_length());
    assert_prefix_free(&by_heap);
    assert_prefix_free(&by_queues);
}

#[test]
fn test_kraft_equality() {
    let c = coder(&[
        ('e', 127),
        ('t', 91),
        ('a', 82),
        ('o', 75),
        ('i', 70),
        ('n', 67),
        ('s', 63),
        ('h', 61),
        ('r', 60),
        ('z', 1),
    ]);
    let code = c.encoding_rule().unwrap();
    assert!((kraft_sum(&code) - 1.0).abs() < 1e-12);
    assert!((kraft_sum(&c.encoding_rule_with_queues().unwrap()) - 1.0).abs() < 1e-12);
}

#[test]
fn test_float_weights() {
    let mut coder = HuffmanCoder::new();
    for (symbol, weight) in [("a", 0.5), ("b", 0.25), ("c", 0.125), ("d", 0.125)] {
        coder.add_symbol(symbol, weight).unwrap();
    }
    let code = coder.encoding_rule().unwrap();
    assert_eq!(code.code(&"a").map(str::len), Some(1));
    assert_eq!(code.code(&"b").map(str::len), Some(2));
    assert_eq!(code.code(&"c").map(str::len), Some(3));
    assert_eq!(code.weighted_length(), Some(1.75));
}

#[test]
fn test_roundtrip_text() {
    let text = "abracadabra alakazam";
    let mut counts = std::collections::BTreeMap::new();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0u64) += 1;
    }
    let weights: Vec<(char, u64)> = counts.into_iter().collect();
    let code = coder(&weights).encoding_rule().unwrap();

    let symbols: Vec<char> = text.chars().collect();
    let bits = code.encode(&symbols).unwrap();
    assert_eq!(bits.len() as u64, code.weighted_length().unwrap());
    let decoded: String = code.decode(&bits).unwrap().into_iter().collect();
    assert_eq!(decoded, text);
}

#[test]
fn test_errors() {
    let mut c = coder(&[('a', 1), ('b', 2), ('c', 3)]);
    assert_eq!(c.add_symbol('b', 5), Err(HuffmanError::DuplicateSymbol));

    let code = c.encoding_rule().unwrap();
    assert_eq!(code.encode(&['q']), Err(HuffmanError::UnknownSymbol));
    assert_eq!(code.decode("01x"), Err(HuffmanError::InvalidCode));
    assert_eq!(
        HuffmanError::UnknownSymbol.to_string(),
        "symbol has no code"
    );
}

#[test]
fn test_weight_overflow_reported() {
    let mut c: HuffmanCoder<char, u8> = HuffmanCoder::new();
    c.add_symbol('a', 200).unwrap();
    c.add_symbol('b', 100).unwrap();
    assert_eq!(c.encoding_rule().err(), Some(HuffmanError::WeightOverflow));
    assert_eq!(
        c.encoding_rule_with_queues().err(),
        Some(HuffmanError::WeightOverflow)
    );

    // The same weights in a wider type build normally
    let wide = coder(&[('a', 200), ('b', 100)]);
    assert_eq!(wide.encoding_rule().unwrap().weighted_length(), Some(300));
}

#[test]
fn test_non_finite_weights_rejected() {
    let mut c = HuffmanCoder::new();
    for weight in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert_eq!(c.add_symbol("x", weight), Err(HuffmanError::InvalidWeight));
    }
    c.add_symbol("x", 1.0).unwrap();
    c.add_symbol("y", f64::MAX).unwrap();
    // Finite weights whose sum is infinite are caught at merge time
    c.add_symbol("z", f64::MAX).unwrap();
    assert_eq!(c.encoding_rule().err(), Some(HuffmanError::WeightOverflow));
}
