use super::char_trait::AutomatonChar;
use super::state::StateId;

/// The goto row of a single state: its outgoing trie edges.
///
/// A compact representation that doesn't allocate until there are at least
/// three edges. Edges are kept sorted by symbol, so iteration order is
/// deterministic and independent of insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edges<C: AutomatonChar> {
    /// No edges.
    None,
    /// Exactly one edge (symbol, target).
    One((C, StateId)),
    /// Exactly two edges (symbol1, target1, symbol2, target2), symbol1 < symbol2.
    Two((C, StateId, C, StateId)),
    /// Three or more edges stored in a sorted vector.
    Many(Vec<(C, StateId)>),
}

impl<C: AutomatonChar> Default for Edges<C> {
    fn default() -> Self {
        Edges::None
    }
}

impl<C: AutomatonChar> Edges<C> {
    /// Returns the target of the edge labeled `symbol`, or `None` if there is
    /// no such edge.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<StateId> {
        match self {
            Edges::None => None,
            Edges::One((ch, target)) => (*ch == symbol).then_some(*target),
            Edges::Two((c1, t1, c2, t2)) => {
                if symbol == *c1 {
                    Some(*t1)
                } else if symbol == *c2 {
                    Some(*t2)
                } else {
                    None
                }
            }
            Edges::Many(edges) => {
                // Unrolling by 2 exposes load-level parallelism and beats a
                // binary search for the row sizes a keyword trie produces.
                let chunks = edges.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == symbol {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == symbol {
                        return Some(chunk[1].1);
                    }
                }
                for &(ch, target) in remainder {
                    if ch == symbol {
                        return Some(target);
                    }
                }
                None
            }
        }
    }

    /// Gets the edge at the specified index in symbol order.
    #[inline]
    pub fn at(&self, index: usize) -> Option<(C, StateId)> {
        match self {
            Edges::None => None,
            Edges::One(edge) => (index == 0).then_some(*edge),
            Edges::Two((c1, t1, c2, t2)) => match index {
                0 => Some((*c1, *t1)),
                1 => Some((*c2, *t2)),
                _ => None,
            },
            Edges::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Inserts an edge in sorted position.
    ///
    /// The symbol must not already have an edge.
    pub(crate) fn insert(&mut self, symbol: C, target: StateId) {
        debug_assert!(self.get(symbol).is_none(), "insert: symbol already has an edge");
        *self = match std::mem::take(self) {
            Edges::None => Edges::One((symbol, target)),
            Edges::One((c1, t1)) => {
                if symbol < c1 {
                    Edges::Two((symbol, target, c1, t1))
                } else {
                    Edges::Two((c1, t1, symbol, target))
                }
            }
            Edges::Two((c1, t1, c2, t2)) => {
                let mut v = vec![(c1, t1), (c2, t2), (symbol, target)];
                v.sort_by_key(|&(c, _)| c);
                Edges::Many(v)
            }
            Edges::Many(mut edges) => {
                let pos = edges.partition_point(|&(c, _)| c < symbol);
                edges.insert(pos, (symbol, target));
                Edges::Many(edges)
            }
        };
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Edges::None => 0,
            Edges::One(_) => 1,
            Edges::Two(_) => 2,
            Edges::Many(edges) => edges.len(),
        }
    }

    /// True if the row has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Edges::None)
    }

    /// Returns an iterator over all edges in symbol order.
    #[inline]
    pub fn iter(&self) -> EdgeIter<'_, C> {
        EdgeIter {
            edges: self,
            index: 0,
        }
    }
}

/// An iterator over the edges of a goto row.
#[derive(Clone)]
pub struct EdgeIter<'a, C: AutomatonChar> {
    edges: &'a Edges<C>,
    index: usize,
}

impl<C: AutomatonChar> Iterator for EdgeIter<'_, C> {
    type Item = (C, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.at(self.index)?;
        self.index += 1;
        Some(edge)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.edges.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: AutomatonChar> ExactSizeIterator for EdgeIter<'_, C> {}

impl<'a, C: AutomatonChar> IntoIterator for &'a Edges<C> {
    type Item = (C, StateId);
    type IntoIter = EdgeIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
