use std::fmt;

/// Identifier of an automaton state.
///
/// States are numbered densely from zero in creation order; [`StateId::ROOT`]
/// is the start state. Every table in the automaton is indexed by `StateId`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The root (start) state.
    pub const ROOT: StateId = StateId(0);

    pub(crate) fn new(index: usize) -> Self {
        StateId(u32::try_from(index).expect("more than u32::MAX automaton states"))
    }

    /// Index of this state into per-state tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the root state.
    #[inline]
    pub fn is_root(self) -> bool {
        self == StateId::ROOT
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
