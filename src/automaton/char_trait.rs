use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as transition symbols in the automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges and keywords store symbols by value
/// - `Eq + Ord`: edge lookup and sorted edge rows
/// - `Hash`: keyword deduplication and the dense table's alphabet index
/// - `Debug`: debug printing of keywords and errors
pub trait AutomatonChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> AutomatonChar for T {}
