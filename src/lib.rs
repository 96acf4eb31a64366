//! # libacm
//!
//! Multi-keyword exact string matching with an
//! [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm) automaton.
//!
//! The automaton is built once from a fixed keyword list. It is then used to
//! scan any number of texts in a single left-to-right pass each, reporting
//! every occurrence of every keyword, overlapping and nested ones included.
//! This implementation follows the construction of
//! [Aho and Corasick (1975)](https://doi.org/10.1145/360825.360855): a goto trie,
//! failure links with merged outputs, and an optional deterministic transition table.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`AutomatonChar`](automaton::AutomatonChar)
//! - **Order-insensitive construction**: keywords may come in any order, repeat, or be
//!   prefixes of each other
//! - **Fast**: one table lookup per symbol with the dense transition table, or failure-link
//!   walking when memory matters
//! - **Thread-safe**: a built [`Automaton`](automaton::Automaton) is immutable and `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use libacm::automaton::owned::build_automaton;
//!
//! let automaton = build_automaton(["he", "she", "his", "hers"]).unwrap();
//! let locations = automaton.find_locations("ushers".chars());
//!
//! let starts = |w: &str| locations.positions(w).map(|s| s.iter().copied().collect::<Vec<_>>());
//! assert_eq!(starts("she"), Some(vec![1]));
//! assert_eq!(starts("he"), Some(vec![2]));
//! assert_eq!(starts("hers"), Some(vec![2]));
//! assert_eq!(starts("his"), None);
//! ```
//!
//! ## Generic Usage
//!
//! The automaton is generic over the symbol type:
//!
//! ```
//! use libacm::automaton::owned::build_automaton;
//!
//! let keywords: Vec<Vec<u8>> = vec![vec![1, 2], vec![2, 3]];
//! let automaton = build_automaton(keywords).unwrap();
//!
//! let locations = automaton.find_locations([1u8, 2, 3, 1, 2]);
//! assert_eq!(locations.get(&[1, 2]).map(|s| s.len()), Some(2));
//! assert_eq!(locations.get(&[2, 3]).map(|s| s.len()), Some(1));
//! ```
//!
//! ## Construction Phases
//!
//! Each phase consumes the output of the previous one:
//!
//! ```
//! use libacm::automaton::dfa::build_dfa;
//! use libacm::automaton::nfa::build_nfa;
//! use libacm::automaton::trie::build_trie;
//!
//! let trie = build_trie(["he", "she"]).unwrap();
//! let nfa = build_nfa(trie);
//! let dfa = build_dfa(&nfa);
//! assert_eq!(nfa.state_count(), 6);
//! assert_eq!(dfa.alphabet_len(), 3);
//! ```

#![warn(missing_docs)]

/// Keyword automaton: construction phases, matcher and result types.
pub mod automaton;
/// Error types.
pub mod errors;

pub use automaton::{Automaton, AutomatonBuilder, KeywordLocations};
pub use errors::{BuildError, InvalidInputError};
