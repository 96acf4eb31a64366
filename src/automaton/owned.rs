use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::char_trait::AutomatonChar;
use super::dfa::{build_dfa, Dfa};
use super::keyword::{IntoKeyword, KeywordId};
use super::locations::KeywordLocations;
use super::nfa::{build_nfa, Nfa};
use super::scan::Scan;
use super::state::StateId;
use super::trie::build_trie;
use crate::errors::Result;

/// A finished keyword automaton.
///
/// Built once from a keyword list and immutable afterwards. Matching only
/// reads the tables, so one automaton can serve any number of scans,
/// including concurrent scans from several threads.
///
/// # Examples
///
/// ```
/// use libacm::automaton::owned::Automaton;
///
/// let automaton = Automaton::build(["he", "she", "his", "hers"]).unwrap();
/// let locations = automaton.find_locations("ushers".chars());
///
/// assert_eq!(locations.len(), 3);
/// assert!(locations.positions("he").unwrap().contains(&2));
/// assert!(locations.positions("she").unwrap().contains(&1));
/// assert!(locations.positions("hers").unwrap().contains(&2));
/// assert!(locations.positions("his").is_none());
/// ```
pub struct Automaton<C: AutomatonChar> {
    nfa: Nfa<C>,
    dfa: Option<Dfa<C>>,
}

impl<C: AutomatonChar> Automaton<C> {
    /// Builds an automaton with the default settings.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidInput`](crate::errors::BuildError::InvalidInput)
    /// if `keywords` is empty or contains an empty keyword. Duplicate
    /// keywords are not an error; only one copy is kept.
    ///
    /// # Panics
    ///
    /// State and keyword ids are `u32`; panics if the keyword set needs more
    /// than `u32::MAX` of either.
    pub fn build<W: IntoKeyword<C>>(keywords: impl IntoIterator<Item = W>) -> Result<Self> {
        AutomatonBuilder::new().build(keywords)
    }

    /// Iterates over every keyword occurrence in `text`, ordered by end index.
    pub fn find_iter<I>(&self, text: I) -> Scan<'_, C, I::IntoIter>
    where
        I: IntoIterator<Item = C>,
    {
        Scan::new(self, text.into_iter())
    }

    /// Finds the start offsets of every keyword occurrence in `text`.
    ///
    /// Offsets are symbol indices (char indices for `str::chars`). An empty
    /// text gives an empty result.
    pub fn find_locations<I>(&self, text: I) -> KeywordLocations<C>
    where
        I: IntoIterator<Item = C>,
    {
        KeywordLocations::from_occurrences(self.keywords(), self.find_iter(text))
    }

    /// True if any keyword occurs in `text`. Stops at the first occurrence.
    pub fn is_match<I>(&self, text: I) -> bool
    where
        I: IntoIterator<Item = C>,
    {
        self.find_iter(text).next().is_some()
    }

    /// The transition from `state` on `ch`.
    #[inline]
    pub fn next_state(&self, state: StateId, ch: C) -> StateId {
        match &self.dfa {
            Some(dfa) => dfa.next_state(state, ch),
            None => self.nfa.next_state(state, ch),
        }
    }

    /// The trie edge from `state` on `ch`, if any.
    pub fn goto(&self, state: StateId, ch: C) -> Option<StateId> {
        self.nfa.trie().goto(state, ch)
    }

    /// The failure link of `state`. The root fails to itself.
    pub fn failure(&self, state: StateId) -> StateId {
        self.nfa.failure(state)
    }

    /// Keywords recognized on entering `state`; empty if none.
    #[inline]
    pub fn output(&self, state: StateId) -> &[KeywordId] {
        self.nfa.output(state)
    }

    /// Path length from the root to `state`.
    pub fn depth(&self, state: StateId) -> usize {
        self.nfa.trie().depth(state)
    }

    /// Number of states, including the root.
    pub fn state_count(&self) -> usize {
        self.nfa.state_count()
    }

    /// Iterates over all states in creation order, root first.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        (0..self.state_count()).map(StateId::new)
    }

    /// The deduplicated keywords, indexed by [`KeywordId`].
    pub fn keywords(&self) -> &[Box<[C]>] {
        self.nfa.trie().keywords()
    }

    /// The keyword with the given id.
    pub fn keyword(&self, id: KeywordId) -> &[C] {
        &self.keywords()[id.index()]
    }

    /// Number of distinct keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords().len()
    }

    /// True if transitions use the precomputed dense table.
    pub fn is_dense(&self) -> bool {
        self.dfa.is_some()
    }
}

impl<C: AutomatonChar> std::fmt::Debug for Automaton<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("keyword_count", &self.keyword_count())
            .field("state_count", &self.state_count())
            .field("dense", &self.is_dense())
            .finish()
    }
}

/// Builder for an [`Automaton`] with non-default settings.
///
/// ```
/// use libacm::automaton::owned::AutomatonBuilder;
///
/// let sparse = AutomatonBuilder::new().dense(false).build(["abc", "bc"]).unwrap();
/// assert!(!sparse.is_dense());
/// assert_eq!(sparse.find_locations("xabc".chars()).occurrence_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonBuilder {
    dense: bool,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        AutomatonBuilder { dense: true }
    }
}

impl AutomatonBuilder {
    /// Creates a builder with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to precompute the dense transition table (default `true`).
    ///
    /// The table makes every transition a single lookup at the cost of
    /// `states × alphabet` entries. Without it, transitions walk failure
    /// links. Results are identical either way.
    pub fn dense(mut self, yes: bool) -> Self {
        self.dense = yes;
        self
    }

    /// Builds the automaton. See [`Automaton::build`].
    pub fn build<C, W>(&self, keywords: impl IntoIterator<Item = W>) -> Result<Automaton<C>>
    where
        C: AutomatonChar,
        W: IntoKeyword<C>,
    {
        let trie = build_trie(keywords)?;
        let duplicates = trie.duplicates;
        let nfa = build_nfa(trie);
        let dfa = self.dense.then(|| build_dfa(&nfa));

        debug!(
            "built automaton: {} keywords ({} duplicates dropped), {} states, dense table: {}",
            nfa.trie().keywords().len(),
            duplicates,
            nfa.state_count(),
            dfa.as_ref()
                .map_or_else(|| "no".to_string(), |d| format!("{} symbols", d.alphabet_len())),
        );
        Ok(Automaton { nfa, dfa })
    }

    /// Builds an automaton from a keyword file. See [`build_automaton_from_file`].
    pub fn build_from_file(&self, path: impl AsRef<Path>) -> Result<Automaton<char>> {
        let keywords = read_keyword_file(path.as_ref())?;
        self.build(&keywords)
    }
}

/// Builds an automaton from an iterator of keywords.
///
/// Each keyword must implement [`IntoKeyword`], so `&str`, `String`, slices,
/// vectors and arrays are all accepted.
///
/// # Examples
///
/// ```
/// use libacm::automaton::owned::build_automaton;
///
/// let automaton = build_automaton(["he", "her", "hers"]).unwrap();
/// let locations = automaton.find_locations("hers".chars());
/// for keyword in ["he", "her", "hers"] {
///     assert_eq!(locations.positions(keyword).unwrap().first(), Some(&0));
/// }
/// ```
pub fn build_automaton<C, W>(keywords: impl IntoIterator<Item = W>) -> Result<Automaton<C>>
where
    C: AutomatonChar,
    W: IntoKeyword<C>,
{
    Automaton::build(keywords)
}

/// Builds an automaton from a keyword file.
///
/// Reads one keyword per line. Trailing whitespace is trimmed, empty lines
/// are skipped and lines starting with '#' are treated as comments.
///
/// # Examples
///
/// ```no_run
/// use libacm::automaton::owned::build_automaton_from_file;
///
/// let automaton = build_automaton_from_file("keywords.txt").unwrap();
/// ```
pub fn build_automaton_from_file(path: impl AsRef<Path>) -> Result<Automaton<char>> {
    AutomatonBuilder::new().build_from_file(path)
}

fn read_keyword_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut keywords = Vec::new();

    // read_line into one reused buffer instead of allocating per line via lines()
    let mut buf = String::with_capacity(80);
    while reader.read_line(&mut buf)? > 0 {
        let keyword = buf.trim_end();
        if !keyword.is_empty() && !is_comment(keyword) {
            keywords.push(keyword.to_string());
        }
        buf.clear();
    }
    Ok(keywords)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
