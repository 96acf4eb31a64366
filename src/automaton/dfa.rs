use std::collections::VecDeque;

use hashbrown::HashMap;

use super::char_trait::AutomatonChar;
use super::nfa::Nfa;
use super::state::StateId;

/// A dense, total transition table over the keyword alphabet.
///
/// Rows are states and columns are the distinct symbols that occur in any
/// keyword. A symbol outside that alphabet can never extend a match, so it
/// always leads to the root and needs no column.
#[derive(Clone, Debug)]
pub struct Dfa<C: AutomatonChar> {
    columns: HashMap<C, u32>,
    stride: usize,
    table: Vec<StateId>,
}

impl<C: AutomatonChar> Dfa<C> {
    /// The transition on `ch`: a single table lookup.
    #[inline]
    pub fn next_state(&self, state: StateId, ch: C) -> StateId {
        match self.columns.get(&ch) {
            Some(&column) => self.table[state.index() * self.stride + column as usize],
            None => StateId::ROOT,
        }
    }

    /// Number of distinct symbols in the keyword set.
    #[inline]
    pub fn alphabet_len(&self) -> usize {
        self.stride
    }

    /// Number of states covered by the table.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.table.len().checked_div(self.stride).unwrap_or(0)
    }
}

/// Precomputes the total transition function of `nfa`.
///
/// Rows are filled breadth-first: a missing trie edge copies the entry of the
/// failure state's row, which is shallower and therefore already complete.
/// Costs `states × alphabet` entries.
///
/// # Examples
///
/// ```
/// use libacm::automaton::dfa::build_dfa;
/// use libacm::automaton::nfa::build_nfa;
/// use libacm::automaton::trie::build_trie;
/// use libacm::automaton::StateId;
///
/// let nfa = build_nfa(build_trie(["he", "she", "his", "hers"]).unwrap());
/// let dfa = build_dfa(&nfa);
/// assert_eq!(dfa.alphabet_len(), 5);
///
/// let sh = "sh".chars().fold(StateId::ROOT, |s, ch| dfa.next_state(s, ch));
/// assert_eq!(dfa.next_state(sh, 'i'), nfa.next_state(sh, 'i'));
/// ```
pub fn build_dfa<C: AutomatonChar>(nfa: &Nfa<C>) -> Dfa<C> {
    let trie = nfa.trie();
    let mut symbols: Vec<C> = trie.keywords().iter().flat_map(|k| k.iter().copied()).collect();
    symbols.sort_unstable();
    symbols.dedup();

    let stride = symbols.len();
    let columns: HashMap<C, u32> = symbols
        .iter()
        .enumerate()
        .map(|(column, &ch)| (ch, column as u32))
        .collect();
    let mut table = vec![StateId::ROOT; trie.state_count() * stride];

    let mut queue = VecDeque::from([StateId::ROOT]);
    while let Some(r) = queue.pop_front() {
        let row = r.index() * stride;
        let fail_row = nfa.failure(r).index() * stride;
        for (column, &ch) in symbols.iter().enumerate() {
            table[row + column] = match trie.goto(r, ch) {
                Some(s) => {
                    queue.push_back(s);
                    s
                }
                None if r.is_root() => StateId::ROOT,
                None => table[fail_row + column],
            };
        }
    }

    Dfa {
        columns,
        stride,
        table,
    }
}
