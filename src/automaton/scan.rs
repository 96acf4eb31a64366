use std::iter::Enumerate;

use super::char_trait::AutomatonChar;
use super::keyword::KeywordId;
use super::owned::Automaton;
use super::state::StateId;

/// A keyword occurrence reported by the matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Occurrence {
    /// The keyword that occurs.
    pub keyword: KeywordId,
    /// Index of the keyword's last symbol in the scanned text.
    pub end: usize,
}

/// Iterator over every keyword occurrence in a text, in order of end index.
///
/// Created by [`Automaton::find_iter`]. Drives the automaton one symbol at a
/// time and reports the whole output set of each state it enters, so
/// overlapping and nested occurrences are all found.
pub struct Scan<'a, C: AutomatonChar, I: Iterator<Item = C>> {
    automaton: &'a Automaton<C>,
    text: Enumerate<I>,
    state: StateId,
    pending: &'a [KeywordId],
    end: usize,
}

impl<'a, C: AutomatonChar, I: Iterator<Item = C>> Scan<'a, C, I> {
    pub(crate) fn new(automaton: &'a Automaton<C>, text: I) -> Self {
        Scan {
            automaton,
            text: text.enumerate(),
            state: StateId::ROOT,
            pending: &[],
            end: 0,
        }
    }

    /// The state the automaton is in after the symbols consumed so far.
    pub fn state(&self) -> StateId {
        self.state
    }
}

impl<C: AutomatonChar, I: Iterator<Item = C>> Iterator for Scan<'_, C, I> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        loop {
            if let Some((&keyword, rest)) = self.pending.split_first() {
                self.pending = rest;
                return Some(Occurrence {
                    keyword,
                    end: self.end,
                });
            }
            let (i, ch) = self.text.next()?;
            self.state = self.automaton.next_state(self.state, ch);
            self.pending = self.automaton.output(self.state);
            self.end = i;
        }
    }
}

#[cfg(test)]
mod test {
    use crate::automaton::owned::build_automaton;

    fn events(keywords: &[&str], text: &str) -> Vec<(String, usize)> {
        let automaton = build_automaton(keywords.iter()).unwrap();
        let mut events: Vec<(String, usize)> = automaton
            .find_iter(text.chars())
            .map(|o| (automaton.keyword(o.keyword).iter().collect(), o.end))
            .collect();
        events.sort();
        events
    }

    #[test]
    fn reports_end_positions() {
        assert_eq!(
            events(&["he", "she", "his", "hers"], "ushers"),
            vec![
                ("he".to_string(), 3),
                ("hers".to_string(), 5),
                ("she".to_string(), 3)
            ]
        );
    }

    #[test]
    fn ends_are_non_decreasing() {
        let automaton = build_automaton(["a", "aa", "ab"]).unwrap();
        let ends: Vec<usize> = automaton.find_iter("aaab".chars()).map(|o| o.end).collect();
        assert!(ends.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ends, vec![0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn empty_text_has_no_events() {
        assert!(events(&["a"], "").is_empty());
    }

    #[test]
    fn scan_state_tracks_progress() {
        let automaton = build_automaton(["abc"]).unwrap();
        let mut scan = automaton.find_iter("ab".chars());
        assert_eq!(scan.next(), None);
        assert_eq!(automaton.depth(scan.state()), 2);
    }
}
