use std::collections::{BTreeMap, BTreeSet};

use super::char_trait::AutomatonChar;
use super::keyword::IntoKeyword;
use super::scan::Occurrence;

/// Start offsets of every keyword found in a text.
///
/// Maps each keyword that occurs at least once to the set of offsets where it
/// starts. Keywords iterate in lexicographic order and offsets ascending;
/// inserting the same occurrence twice has no effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordLocations<C: AutomatonChar> {
    positions: BTreeMap<Box<[C]>, BTreeSet<usize>>,
}

impl<C: AutomatonChar> Default for KeywordLocations<C> {
    fn default() -> Self {
        KeywordLocations {
            positions: BTreeMap::new(),
        }
    }
}

impl<C: AutomatonChar> KeywordLocations<C> {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates matcher occurrences, resolving keyword ids through `keywords`.
    ///
    /// `keywords` is the table the ids index into, normally
    /// [`Automaton::keywords`](super::owned::Automaton::keywords). This is
    /// what [`Automaton::find_locations`](super::owned::Automaton::find_locations)
    /// does; calling it directly lets a caller filter or truncate the
    /// occurrence stream first.
    ///
    /// ```
    /// use libacm::automaton::{Automaton, KeywordLocations};
    ///
    /// let automaton = Automaton::build(["he", "she", "hers"]).unwrap();
    /// let first_two = automaton.find_iter("ushers".chars()).take(2);
    /// let locations = KeywordLocations::from_occurrences(automaton.keywords(), first_two);
    /// assert_eq!(locations.occurrence_count(), 2);
    /// assert!(locations.positions("hers").is_none());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if an occurrence refers to a keyword id outside `keywords`.
    pub fn from_occurrences(
        keywords: &[Box<[C]>],
        occurrences: impl IntoIterator<Item = Occurrence>,
    ) -> Self {
        let mut locations = Self::new();
        for occurrence in occurrences {
            locations.insert_end(&keywords[occurrence.keyword.index()], occurrence.end);
        }
        locations
    }

    /// Records an occurrence of `keyword` whose last symbol is at `end`.
    ///
    /// The start offset is `end + 1 - keyword.len()`. Returns `false` if that
    /// start was already recorded for the keyword.
    ///
    /// # Panics
    ///
    /// Panics if `keyword` is empty or longer than `end + 1`.
    pub fn insert_end(&mut self, keyword: &[C], end: usize) -> bool {
        assert!(!keyword.is_empty(), "insert_end: empty keyword");
        let start = (end + 1)
            .checked_sub(keyword.len())
            .expect("insert_end: keyword ends before it starts");
        match self.positions.get_mut(keyword) {
            Some(starts) => starts.insert(start),
            None => {
                self.positions.insert(keyword.into(), BTreeSet::from([start]));
                true
            }
        }
    }

    /// Start offsets of `keyword`, or `None` if it was not found.
    pub fn get(&self, keyword: &[C]) -> Option<&BTreeSet<usize>> {
        self.positions.get(keyword)
    }

    /// Start offsets of `keyword` given in any [`IntoKeyword`] form.
    ///
    /// ```
    /// use libacm::automaton::owned::build_automaton;
    ///
    /// let automaton = build_automaton(["na", "ana"]).unwrap();
    /// let locations = automaton.find_locations("banana".chars());
    /// assert_eq!(locations.positions("ana").unwrap().iter().collect::<Vec<_>>(), [&1, &3]);
    /// assert!(locations.positions("ban").is_none());
    /// ```
    pub fn positions(&self, keyword: impl IntoKeyword<C>) -> Option<&BTreeSet<usize>> {
        self.get(&keyword.collect_keyword())
    }

    /// Iterates over found keywords and their start offsets, keywords in
    /// lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&[C], &BTreeSet<usize>)> + '_ {
        self.positions.iter().map(|(k, v)| (&**k, v))
    }

    /// Number of distinct keywords found.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total number of occurrences across all keywords.
    pub fn occurrence_count(&self) -> usize {
        self.positions.values().map(BTreeSet::len).sum()
    }
}
