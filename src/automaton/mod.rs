/// Trait for types that can serve as transition symbols.
pub mod char_trait;
/// Deterministic transition table built from the failure links.
pub mod dfa;
/// Compact per-state edge lists of the goto trie.
pub mod edges;
/// Keyword conversion, identifiers and normalization.
pub mod keyword;
/// Start-offset aggregation of match results.
pub mod locations;
/// Failure links and output merging.
pub mod nfa;
/// Owned automaton: the build-once, match-many entry point.
pub mod owned;
/// The matcher: a single left-to-right scan over the text.
pub mod scan;
/// State identifiers.
pub mod state;
/// Goto trie construction.
pub mod trie;

pub use char_trait::AutomatonChar;
pub use keyword::{IntoKeyword, KeywordId};
pub use locations::KeywordLocations;
pub use owned::{Automaton, AutomatonBuilder};
pub use scan::Occurrence;
pub use state::StateId;
