use smallvec::SmallVec;

use super::char_trait::AutomatonChar;
use super::edges::Edges;
use super::keyword::{normalize_keywords, IntoKeyword, KeywordId, KeywordSet};
use super::state::StateId;
use crate::errors::InvalidInputError;

/// Keyword ids attached to a state. Empty means "no output".
pub(crate) type Output = SmallVec<[KeywordId; 2]>;

/// The goto function: a shared-prefix trie over the keyword set.
///
/// States are allocated densely in insertion order, root first. Each
/// per-state table is a `Vec` indexed by [`StateId::index`].
#[derive(Clone, Debug)]
pub struct Trie<C: AutomatonChar> {
    pub(crate) edges: Vec<Edges<C>>,
    pub(crate) output: Vec<Output>,
    pub(crate) depth: Vec<u32>,
    pub(crate) keywords: Vec<Box<[C]>>,
    pub(crate) duplicates: usize,
}

impl<C: AutomatonChar> Trie<C> {
    fn with_root() -> Self {
        Trie {
            edges: vec![Edges::None],
            output: vec![Output::new()],
            depth: vec![0],
            keywords: Vec::new(),
            duplicates: 0,
        }
    }

    /// Inserts a keyword, reusing the longest prefix already in the trie.
    ///
    /// The prefix walk is bounded by the keyword's own length, so a keyword
    /// that is a prefix of an earlier one (or the reverse) just stops early
    /// or branches off; existing edges are never rewritten.
    fn insert(&mut self, keyword: Box<[C]>) {
        let (prefix_len, mut state) = self.longest_prefix(&keyword);
        for &ch in &keyword[prefix_len..] {
            state = self.add_state(state, ch);
        }

        let id = KeywordId::new(self.keywords.len());
        debug_assert!(
            self.output[state.index()].is_empty(),
            "keywords are deduplicated before insertion"
        );
        self.output[state.index()].push(id);
        self.keywords.push(keyword);
    }

    fn longest_prefix(&self, keyword: &[C]) -> (usize, StateId) {
        let mut state = StateId::ROOT;
        for (i, &ch) in keyword.iter().enumerate() {
            match self.goto(state, ch) {
                Some(next) => state = next,
                None => return (i, state),
            }
        }
        (keyword.len(), state)
    }

    fn add_state(&mut self, from: StateId, ch: C) -> StateId {
        let next = StateId::new(self.edges.len());
        let depth = self.depth[from.index()] + 1;
        self.edges.push(Edges::None);
        self.output.push(Output::new());
        self.depth.push(depth);
        self.edges[from.index()].insert(ch, next);
        next
    }

    /// Number of states, including the root.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.edges.len()
    }

    /// Follows the trie edge labeled `ch` out of `state`.
    ///
    /// Returns `None` when there is no such edge, for the root as well.
    /// The root's implicit self-loop is applied by the later phases.
    #[inline]
    pub fn goto(&self, state: StateId, ch: C) -> Option<StateId> {
        self.edges[state.index()].get(ch)
    }

    /// The outgoing edges of `state`, in symbol order.
    #[inline]
    pub fn edges(&self, state: StateId) -> &Edges<C> {
        &self.edges[state.index()]
    }

    /// Keywords whose path ends at `state`.
    #[inline]
    pub fn output(&self, state: StateId) -> &[KeywordId] {
        &self.output[state.index()]
    }

    /// Path length from the root to `state`.
    #[inline]
    pub fn depth(&self, state: StateId) -> usize {
        self.depth[state.index()] as usize
    }

    /// The deduplicated keywords, indexed by [`KeywordId`].
    pub fn keywords(&self) -> &[Box<[C]>] {
        &self.keywords
    }
}

/// Builds the goto trie from a keyword list.
///
/// The list is validated and deduplicated first, so an error leaves nothing
/// allocated. Keyword order does not affect which paths exist, only the
/// numbering of states.
///
/// # Examples
///
/// ```
/// use libacm::automaton::trie::build_trie;
/// use libacm::automaton::StateId;
///
/// let trie = build_trie(["he", "she", "his", "hers"]).unwrap();
/// assert_eq!(trie.state_count(), 10);
///
/// let h = trie.goto(StateId::ROOT, 'h').unwrap();
/// let he = trie.goto(h, 'e').unwrap();
/// assert_eq!(trie.output(he).len(), 1);
/// assert_eq!(trie.goto(StateId::ROOT, 'x'), None);
/// ```
pub fn build_trie<C, W>(words: impl IntoIterator<Item = W>) -> Result<Trie<C>, InvalidInputError>
where
    C: AutomatonChar,
    W: IntoKeyword<C>,
{
    let KeywordSet {
        keywords,
        duplicates,
    } = normalize_keywords(words)?;

    let mut trie = Trie::with_root();
    trie.duplicates = duplicates;
    for keyword in keywords {
        trie.insert(keyword);
    }
    Ok(trie)
}

#[cfg(test)]
mod test {
    use super::*;

    fn walk(trie: &Trie<char>, word: &str) -> Option<StateId> {
        word.chars()
            .try_fold(StateId::ROOT, |state, ch| trie.goto(state, ch))
    }

    fn outputs(trie: &Trie<char>, state: StateId) -> Vec<String> {
        trie.output(state)
            .iter()
            .map(|id| trie.keywords()[id.index()].iter().collect())
            .collect()
    }

    #[test]
    fn shared_prefixes_share_states() {
        let trie = build_trie(["he", "she", "his", "hers"]).unwrap();
        // root + h,e,r,s + s,h,e + i,s
        assert_eq!(trie.state_count(), 10);
        let h = walk(&trie, "h").unwrap();
        assert_eq!(trie.goto(h, 'i'), walk(&trie, "hi"));
        assert_eq!(trie.edges(h).len(), 2);
        assert_eq!(trie.depth(walk(&trie, "hers").unwrap()), 4);
    }

    #[test]
    fn prefix_inserted_after_extension() {
        let trie = build_trie(["hers", "her", "he"]).unwrap();
        assert_eq!(trie.state_count(), 5);
        assert_eq!(outputs(&trie, walk(&trie, "he").unwrap()), ["he"]);
        assert_eq!(outputs(&trie, walk(&trie, "her").unwrap()), ["her"]);
        assert_eq!(outputs(&trie, walk(&trie, "hers").unwrap()), ["hers"]);
        assert!(trie.output(walk(&trie, "h").unwrap()).is_empty());
    }

    #[test]
    fn prefix_inserted_before_extension() {
        let trie = build_trie(["he", "her", "hers"]).unwrap();
        assert_eq!(trie.state_count(), 5);
        assert_eq!(outputs(&trie, walk(&trie, "her").unwrap()), ["her"]);
    }

    #[test]
    fn duplicates_do_not_add_states() {
        let once = build_trie(["he"]).unwrap();
        let twice = build_trie(["he", "he"]).unwrap();
        assert_eq!(once.state_count(), twice.state_count());
        assert_eq!(twice.keywords().len(), 1);
        assert_eq!(twice.duplicates, 1);
        assert_eq!(outputs(&twice, walk(&twice, "he").unwrap()), ["he"]);
    }

    #[test]
    fn root_has_no_implicit_edges() {
        let trie = build_trie(["ab"]).unwrap();
        assert_eq!(trie.goto(StateId::ROOT, 'b'), None);
        let a = trie.goto(StateId::ROOT, 'a').unwrap();
        assert_eq!(trie.goto(a, 'a'), None);
    }

    #[test]
    fn depths_follow_edges() {
        let trie = build_trie(["abc", "abd", "xyz"]).unwrap();
        for index in 0..trie.state_count() {
            let state = StateId::new(index);
            for (_, next) in trie.edges(state) {
                assert_eq!(trie.depth(next), trie.depth(state) + 1);
            }
        }
    }

    #[test]
    fn invalid_input_allocates_nothing() {
        assert_eq!(
            build_trie::<char, &str>([]).err(),
            Some(InvalidInputError::EmptyKeywordList)
        );
        assert_eq!(
            build_trie(["a", ""]).err(),
            Some(InvalidInputError::EmptyKeyword { index: 1 })
        );
    }

    #[test]
    fn generic_trie_with_u8() {
        let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
        let trie = build_trie(words).unwrap();
        assert_eq!(trie.state_count(), 8);
        let end = [1u8, 2, 4]
            .iter()
            .try_fold(StateId::ROOT, |s, &b| trie.goto(s, b))
            .unwrap();
        assert_eq!(trie.output(end), &[KeywordId::new(1)]);
    }
}
