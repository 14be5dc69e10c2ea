//! Huffman prefix codes built with the indexed heap
//!
//! [`HuffmanCoder`] collects unique symbols with their weights and builds an
//! optimal prefix code. The heap construction heapifies all leaves once, then
//! repeatedly takes the two lightest trees and inserts their merge until one
//! tree remains. Left edges are labelled `0`, right edges `1`.
//!
//! A second construction, [`HuffmanCoder::encoding_rule_with_queues`], sorts
//! the leaves and merges from two FIFO queues. Ties may be broken differently,
//! but both codes have the same weighted length.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::huffman::HuffmanCoder;
//!
//! let mut coder = HuffmanCoder::new();
//! coder.add_symbol('a', 60).unwrap();
//! coder.add_symbol('b', 20).unwrap();
//! coder.add_symbol('c', 10).unwrap();
//! coder.add_symbol('d', 10).unwrap();
//!
//! let code = coder.encoding_rule().unwrap();
//! assert_eq!(code.code(&'a').map(str::len), Some(1));
//!
//! let bits = code.encode(&['a', 'c', 'b']).unwrap();
//! assert_eq!(code.decode(&bits).unwrap(), vec!['a', 'c', 'b']);
//! ```

use crate::element::Tracked;
use crate::indexed::IndexedBinaryHeap;
use crate::traits::HeapError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

/// Trait for symbol weights
///
/// Weights only need a partial order so floating-point frequencies work.
/// Merging two subtrees adds their weights with [`Weight::checked_add`], so a
/// sum the type cannot hold is reported instead of wrapping.
pub trait Weight: Copy + PartialOrd {
    /// Returns false for weights that cannot take part in a code (NaN, infinities)
    fn is_valid(self) -> bool;

    /// Adds two weights, or returns `None` if the sum is not representable
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn is_valid(self) -> bool {
                    true
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn is_valid(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// Error type for Huffman coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanError {
    /// The symbol was already registered
    DuplicateSymbol,
    /// The weight is NaN or infinite
    InvalidWeight,
    /// Two subtree weights sum past what the weight type can hold
    WeightOverflow,
    /// The symbol has no code
    UnknownSymbol,
    /// The bit string is not a sequence of complete codewords
    InvalidCode,
    /// The underlying heap rejected an operation
    Heap(HeapError),
}

impl fmt::Display for HuffmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuffmanError::DuplicateSymbol => write!(f, "symbol is already registered"),
            HuffmanError::InvalidWeight => write!(f, "weight must be finite"),
            HuffmanError::WeightOverflow => {
                write!(f, "combined weight overflows the weight type")
            }
            HuffmanError::UnknownSymbol => write!(f, "symbol has no code"),
            HuffmanError::InvalidCode => write!(f, "bits do not decode to whole symbols"),
            HuffmanError::Heap(e) => write!(f, "heap error: {}", e),
        }
    }
}

impl std::error::Error for HuffmanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HuffmanError::Heap(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HeapError> for HuffmanError {
    fn from(e: HeapError) -> Self {
        HuffmanError::Heap(e)
    }
}

/// Code tree: leaves carry symbols, internal nodes carry the summed weight
#[derive(Debug, Clone)]
enum Tree<S, W> {
    Leaf {
        symbol: S,
        weight: W,
    },
    Node {
        left: Box<Tree<S, W>>,
        right: Box<Tree<S, W>>,
        weight: W,
    },
}

impl<S, W: Weight> Tree<S, W> {
    fn weight(&self) -> W {
        match self {
            Tree::Leaf { weight, .. } | Tree::Node { weight, .. } => *weight,
        }
    }

    fn merge(left: Self, right: Self) -> Result<Self, HuffmanError> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(HuffmanError::WeightOverflow)?;
        Ok(Tree::Node {
            left: Box::new(left),
            right: Box::new(right),
            weight,
        })
    }

    fn by_weight(a: &Self, b: &Self) -> Ordering {
        a.weight()
            .partial_cmp(&b.weight())
            .unwrap_or(Ordering::Equal)
    }
}

/// Collects symbols and their weights, then builds a [`HuffmanCode`]
#[derive(Debug, Clone)]
pub struct HuffmanCoder<S, W> {
    leaves: Vec<(S, W)>,
    seen: FxHashSet<S>,
}

impl<S, W> HuffmanCoder<S, W>
where
    S: Eq + Hash + Clone,
    W: Weight,
{
    /// Creates a coder with no symbols
    pub fn new() -> Self {
        HuffmanCoder {
            leaves: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Registers a new unique symbol with the given weight
    ///
    /// # Errors
    /// Returns `HuffmanError::DuplicateSymbol` if the symbol was already added
    /// and `HuffmanError::InvalidWeight` for NaN or infinite weights.
    pub fn add_symbol(&mut self, symbol: S, weight: W) -> Result<(), HuffmanError> {
        if !weight.is_valid() {
            return Err(HuffmanError::InvalidWeight);
        }
        if !self.seen.insert(symbol.clone()) {
            return Err(HuffmanError::DuplicateSymbol);
        }
        self.leaves.push((symbol, weight));
        Ok(())
    }

    /// Returns the number of registered symbols
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Returns true if no symbol has been registered
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    fn leaf_trees(&self) -> impl Iterator<Item = Tree<S, W>> + '_ {
        self.leaves.iter().map(|(symbol, weight)| Tree::Leaf {
            symbol: symbol.clone(),
            weight: *weight,
        })
    }

    /// Builds the code with the indexed heap
    ///
    /// # Errors
    /// Returns `HuffmanError::WeightOverflow` if a merged weight does not fit in `W`.
    pub fn encoding_rule(&self) -> Result<HuffmanCode<S, W>, HuffmanError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(symbols = self.leaves.len(), "building huffman tree with heap");

        if self.leaves.is_empty() {
            return Ok(HuffmanCode::from_tree(None));
        }

        let mut heap = IndexedBinaryHeap::heapify(
            self.leaf_trees().map(Tracked::new),
            |a: &Tracked<Tree<S, W>>, b: &Tracked<Tree<S, W>>| {
                Tree::by_weight(a.value(), b.value())
            },
        );
        while heap.len() > 1 {
            let left = heap.delete_min()?.into_inner();
            let right = heap.delete_min()?.into_inner();
            heap.insert(Tracked::new(Tree::merge(left, right)?));
        }
        let root = heap.delete_min()?.into_inner();
        Ok(HuffmanCode::from_tree(Some(root)))
    }

    /// Builds the code by merging from two sorted queues
    ///
    /// # Errors
    /// Returns `HuffmanError::WeightOverflow` if a merged weight does not fit in `W`.
    pub fn encoding_rule_with_queues(&self) -> Result<HuffmanCode<S, W>, HuffmanError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(symbols = self.leaves.len(), "building huffman tree with queues");

        let mut sorted: Vec<Tree<S, W>> = self.leaf_trees().collect();
        sorted.sort_by(Tree::by_weight);

        let mut leaves: VecDeque<Tree<S, W>> = sorted.into();
        let mut merged: VecDeque<Tree<S, W>> = VecDeque::new();
        while leaves.len() + merged.len() >= 2 {
            let left = take_smallest(&mut leaves, &mut merged).ok_or(HeapError::EmptyHeap)?;
            let right = take_smallest(&mut leaves, &mut merged).ok_or(HeapError::EmptyHeap)?;
            merged.push_back(Tree::merge(left, right)?);
        }
        let root = merged.pop_front().or_else(|| leaves.pop_front());
        Ok(HuffmanCode::from_tree(root))
    }
}

impl<S, W> Default for HuffmanCoder<S, W>
where
    S: Eq + Hash + Clone,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Takes the lighter front tree of the two queues, preferring `a` on ties
fn take_smallest<S, W: Weight>(
    a: &mut VecDeque<Tree<S, W>>,
    b: &mut VecDeque<Tree<S, W>>,
) -> Option<Tree<S, W>> {
    match (a.front(), b.front()) {
        (Some(x), Some(y)) if Tree::by_weight(x, y) == Ordering::Greater => b.pop_front(),
        (Some(_), _) => a.pop_front(),
        (None, _) => b.pop_front(),
    }
}

/// A prefix code: one bit string per symbol
#[derive(Debug, Clone)]
pub struct HuffmanCode<S, W> {
    root: Option<Tree<S, W>>,
    codes: FxHashMap<S, String>,
}

impl<S, W> HuffmanCode<S, W>
where
    S: Eq + Hash + Clone,
    W: Weight,
{
    fn from_tree(root: Option<Tree<S, W>>) -> Self {
        let mut codes = FxHashMap::default();
        match &root {
            None => {}
            // A lone symbol still needs one bit
            Some(Tree::Leaf { symbol, .. }) => {
                codes.insert(symbol.clone(), "0".to_string());
            }
            Some(tree) => {
                let mut stack = vec![(tree, String::new())];
                while let Some((node, prefix)) = stack.pop() {
                    match node {
                        Tree::Leaf { symbol, .. } => {
                            codes.insert(symbol.clone(), prefix);
                        }
                        Tree::Node { left, right, .. } => {
                            stack.push((&**right, format!("{}1", prefix)));
                            stack.push((&**left, format!("{}0", prefix)));
                        }
                    }
                }
            }
        }
        HuffmanCode { root, codes }
    }

    /// Returns the codeword for a symbol
    pub fn code(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Returns the full symbol-to-codeword table
    pub fn codes(&self) -> &FxHashMap<S, String> {
        &self.codes
    }

    /// Returns the number of symbols in the code
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the code has no symbols
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length of the longest codeword
    pub fn max_code_len(&self) -> Option<usize> {
        self.codes.values().map(String::len).max()
    }

    /// Length of the shortest codeword
    pub fn min_code_len(&self) -> Option<usize> {
        self.codes.values().map(String::len).min()
    }

    /// Sum over all symbols of weight × codeword length
    ///
    /// Equal to the sum of the internal node weights of the code tree.
    /// Returns `None` for an empty code or when the total overflows `W`.
    pub fn weighted_length(&self) -> Option<W> {
        let root = self.root.as_ref()?;
        if let Tree::Leaf { weight, .. } = root {
            return Some(*weight);
        }
        let mut total: Option<W> = None;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Tree::Node { left, right, weight } = node {
                total = Some(match total {
                    Some(t) => t.checked_add(*weight)?,
                    None => *weight,
                });
                stack.push(&**left);
                stack.push(&**right);
            }
        }
        total
    }

    /// Concatenates the codewords of `symbols`
    ///
    /// # Errors
    /// Returns `HuffmanError::UnknownSymbol` if a symbol has no codeword.
    pub fn encode<'a, I>(&self, symbols: I) -> Result<String, HuffmanError>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut bits = String::new();
        for symbol in symbols {
            bits.push_str(self.code(symbol).ok_or(HuffmanError::UnknownSymbol)?);
        }
        Ok(bits)
    }

    /// Splits a bit string back into symbols
    ///
    /// # Errors
    /// Returns `HuffmanError::InvalidCode` for characters other than `0`/`1`
    /// or a trailing partial codeword.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>, HuffmanError> {
        let mut symbols = Vec::new();
        let root = match &self.root {
            Some(root) => root,
            None if bits.is_empty() => return Ok(symbols),
            None => return Err(HuffmanError::InvalidCode),
        };

        if let Tree::Leaf { symbol, .. } = root {
            for bit in bits.chars() {
                if bit != '0' {
                    return Err(HuffmanError::InvalidCode);
                }
                symbols.push(symbol.clone());
            }
            return Ok(symbols);
        }

        let mut node = root;
        for bit in bits.chars() {
            node = match (node, bit) {
                (Tree::Node { left, .. }, '0') => &**left,
                (Tree::Node { right, .. }, '1') => &**right,
                _ => return Err(HuffmanError::InvalidCode),
            };
            if let Tree::Leaf { symbol, .. } = node {
                symbols.push(symbol.clone());
                node = root;
            }
        }
        if std::ptr::eq(node, root) {
            Ok(symbols)
        } else {
            Err(HuffmanError::InvalidCode)
        }
    }
}
