use std::collections::VecDeque;

use smallvec::SmallVec;

use super::char_trait::AutomatonChar;
use super::keyword::KeywordId;
use super::state::StateId;
use super::trie::Trie;

/// A trie augmented with failure links and failure-closed outputs.
///
/// This is the classic nondeterministic Aho-Corasick machine: a transition
/// that has no trie edge is resolved by walking failure links until one does.
#[derive(Clone, Debug)]
pub struct Nfa<C: AutomatonChar> {
    trie: Trie<C>,
    failure: Vec<StateId>,
}

impl<C: AutomatonChar> Nfa<C> {
    /// The underlying goto trie. Its outputs are already merged along
    /// failure links.
    #[inline]
    pub fn trie(&self) -> &Trie<C> {
        &self.trie
    }

    /// Number of states, including the root.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.trie.state_count()
    }

    /// The state of the longest proper suffix of `state`'s path that is also
    /// a trie path. The root fails to itself.
    #[inline]
    pub fn failure(&self, state: StateId) -> StateId {
        self.failure[state.index()]
    }

    /// Every keyword that ends at `state`, including those inherited through
    /// failure links.
    #[inline]
    pub fn output(&self, state: StateId) -> &[KeywordId] {
        self.trie.output(state)
    }

    /// The transition on `ch`, found by walking failure links.
    ///
    /// Symbols without any matching edge lead back to the root.
    #[inline]
    pub fn next_state(&self, state: StateId, ch: C) -> StateId {
        follow(&self.trie, &self.failure, state, ch)
    }
}

/// Walks failure links from `state` until an edge on `ch` exists.
///
/// The root is total: a missing root edge is a self-loop, so the walk always
/// ends there at the latest.
fn follow<C: AutomatonChar>(
    trie: &Trie<C>,
    failure: &[StateId],
    mut state: StateId,
    ch: C,
) -> StateId {
    loop {
        if let Some(next) = trie.goto(state, ch) {
            return next;
        }
        if state.is_root() {
            return StateId::ROOT;
        }
        state = failure[state.index()];
    }
}

/// Computes failure links and merges outputs along them.
///
/// Consumes the trie and returns it inside the [`Nfa`]. States are visited
/// breadth-first, so a state's failure target (which is strictly shallower)
/// already has its final output set when the state absorbs it.
///
/// # Examples
///
/// ```
/// use libacm::automaton::nfa::build_nfa;
/// use libacm::automaton::trie::build_trie;
/// use libacm::automaton::StateId;
///
/// let nfa = build_nfa(build_trie(["he", "she"]).unwrap());
/// let she = "she".chars().fold(StateId::ROOT, |s, ch| nfa.next_state(s, ch));
/// let he = "he".chars().fold(StateId::ROOT, |s, ch| nfa.next_state(s, ch));
/// assert_eq!(nfa.failure(she), he);
/// assert_eq!(nfa.output(she).len(), 2);
/// ```
pub fn build_nfa<C: AutomatonChar>(mut trie: Trie<C>) -> Nfa<C> {
    let mut failure = vec![StateId::ROOT; trie.state_count()];
    let mut queue: VecDeque<StateId> = trie.edges(StateId::ROOT).iter().map(|(_, s)| s).collect();

    while let Some(r) = queue.pop_front() {
        let row: SmallVec<[(C, StateId); 4]> = trie.edges(r).iter().collect();
        for (ch, s) in row {
            let target = follow(&trie, &failure, failure[r.index()], ch);
            debug_assert!(trie.depth(target) < trie.depth(s));
            failure[s.index()] = target;

            let inherited = trie.output[target.index()].clone();
            trie.output[s.index()].extend(inherited);

            queue.push_back(s);
        }
    }

    Nfa { trie, failure }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::automaton::trie::build_trie;

    fn nfa(words: &[&str]) -> Nfa<char> {
        build_nfa(build_trie(words.iter()).unwrap())
    }

    fn state(nfa: &Nfa<char>, path: &str) -> StateId {
        path.chars()
            .try_fold(StateId::ROOT, |s, ch| nfa.trie().goto(s, ch))
            .unwrap()
    }

    fn outputs(nfa: &Nfa<char>, s: StateId) -> Vec<String> {
        let mut words: Vec<String> = nfa
            .output(s)
            .iter()
            .map(|id| nfa.trie().keywords()[id.index()].iter().collect())
            .collect();
        words.sort();
        words
    }

    #[test]
    fn classic_failure_links() {
        let m = nfa(&["he", "she", "his", "hers"]);
        assert_eq!(m.failure(state(&m, "h")), StateId::ROOT);
        assert_eq!(m.failure(state(&m, "s")), StateId::ROOT);
        assert_eq!(m.failure(state(&m, "sh")), state(&m, "h"));
        assert_eq!(m.failure(state(&m, "she")), state(&m, "he"));
        assert_eq!(m.failure(state(&m, "his")), state(&m, "s"));
        assert_eq!(m.failure(state(&m, "hers")), state(&m, "s"));
        assert_eq!(m.failure(state(&m, "her")), StateId::ROOT);
        assert_eq!(m.failure(StateId::ROOT), StateId::ROOT);
    }

    #[test]
    fn outputs_are_merged_along_failure_links() {
        let m = nfa(&["he", "she", "his", "hers"]);
        assert_eq!(outputs(&m, state(&m, "she")), ["he", "she"]);
        assert_eq!(outputs(&m, state(&m, "he")), ["he"]);
        assert!(outputs(&m, state(&m, "sh")).is_empty());
    }

    #[test]
    fn outputs_are_transitively_closed() {
        let m = nfa(&["a", "aa", "aaa", "aaaa", "ba", "baa"]);
        assert_eq!(outputs(&m, state(&m, "aaaa")), ["a", "aa", "aaa", "aaaa"]);
        assert_eq!(outputs(&m, state(&m, "baa")), ["a", "aa", "baa"]);
        for index in 0..m.state_count() {
            let s = StateId::new(index);
            let f = m.failure(s);
            for id in m.output(f) {
                assert!(m.output(s).contains(id));
            }
        }
    }

    #[test]
    fn failure_targets_are_shallower() {
        let m = nfa(&["abcab", "bcabc", "cab", "abab"]);
        for index in 1..m.state_count() {
            let s = StateId::new(index);
            assert!(m.trie().depth(m.failure(s)) < m.trie().depth(s));
        }
    }

    #[test]
    fn wide_rows_get_every_failure_link() {
        let m = nfa(&["xa", "xb", "xc", "xd", "xe", "xf", "a", "f"]);
        assert_eq!(m.trie().edges(state(&m, "x")).len(), 6);
        assert_eq!(m.failure(state(&m, "xa")), state(&m, "a"));
        assert_eq!(m.failure(state(&m, "xf")), state(&m, "f"));
        assert_eq!(m.failure(state(&m, "xc")), StateId::ROOT);
        assert_eq!(outputs(&m, state(&m, "xf")), ["f", "xf"]);
    }

    #[test]
    fn next_state_walks_failures() {
        let m = nfa(&["he", "she", "his", "hers"]);
        let sh = state(&m, "sh");
        // "sh" + 'i' has no edge; fails to "h" which has one.
        assert_eq!(m.next_state(sh, 'i'), state(&m, "hi"));
        assert_eq!(m.next_state(sh, 'x'), StateId::ROOT);
        assert_eq!(m.next_state(StateId::ROOT, 'z'), StateId::ROOT);
    }
}
