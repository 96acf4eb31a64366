use hashbrown::HashSet;
use log::trace;
use smallvec::SmallVec;

use super::char_trait::AutomatonChar;
use crate::errors::InvalidInputError;

/// Trait for types that can be used as a keyword when building an automaton.
///
/// Implemented for common string and sequence types so that
/// [`Automaton::build`](super::owned::Automaton::build) and
/// [`KeywordLocations::positions`](super::locations::KeywordLocations::positions)
/// accept them directly without manual conversion.
pub trait IntoKeyword<C: AutomatonChar> {
    /// Collects this keyword into a symbol buffer.
    fn collect_keyword(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoKeyword<char> for &str {
    fn collect_keyword(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoKeyword<char> for &&str {
    fn collect_keyword(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoKeyword<char> for String {
    fn collect_keyword(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoKeyword<char> for &String {
    fn collect_keyword(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: AutomatonChar> IntoKeyword<C> for &[C] {
    fn collect_keyword(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AutomatonChar> IntoKeyword<C> for Vec<C> {
    fn collect_keyword(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AutomatonChar> IntoKeyword<C> for &Vec<C> {
    fn collect_keyword(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AutomatonChar, const N: usize> IntoKeyword<C> for [C; N] {
    fn collect_keyword(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AutomatonChar, const N: usize> IntoKeyword<C> for &[C; N] {
    fn collect_keyword(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// Identifies a keyword by its position in the deduplicated keyword table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeywordId(u32);

impl KeywordId {
    pub(crate) fn new(index: usize) -> Self {
        KeywordId(u32::try_from(index).expect("more than u32::MAX keywords"))
    }

    /// Index of this keyword in [`Automaton::keywords`](super::owned::Automaton::keywords).
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A validated, duplicate-free keyword list, in first-seen order.
pub(crate) struct KeywordSet<C: AutomatonChar> {
    pub(crate) keywords: Vec<Box<[C]>>,
    pub(crate) duplicates: usize,
}

/// Validates and deduplicates keywords.
///
/// Fails on the first empty keyword, or if no keyword was given at all.
/// Repeated keywords are dropped silently; only the first copy is kept.
pub(crate) fn normalize_keywords<C, W>(
    words: impl IntoIterator<Item = W>,
) -> Result<KeywordSet<C>, InvalidInputError>
where
    C: AutomatonChar,
    W: IntoKeyword<C>,
{
    let mut seen: HashSet<Box<[C]>> = HashSet::new();
    let mut keywords = Vec::new();
    let mut duplicates = 0;

    for (index, word) in words.into_iter().enumerate() {
        let word = word.collect_keyword();
        if word.is_empty() {
            return Err(InvalidInputError::EmptyKeyword { index });
        }
        if seen.contains(word.as_slice()) {
            trace!("dropping duplicate keyword {:?} at index {}", word.as_slice(), index);
            duplicates += 1;
            continue;
        }
        let word: Box<[C]> = word.into_vec().into_boxed_slice();
        seen.insert(word.clone());
        keywords.push(word);
    }

    if keywords.is_empty() {
        return Err(InvalidInputError::EmptyKeywordList);
    }
    Ok(KeywordSet {
        keywords,
        duplicates,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Box<[char]> {
        s.chars().collect()
    }

    #[test]
    fn duplicates_are_dropped_in_first_seen_order() {
        let set = normalize_keywords(["she", "he", "she", "hers", "he"]).unwrap();
        assert_eq!(set.keywords, vec![chars("she"), chars("he"), chars("hers")]);
        assert_eq!(set.duplicates, 2);
    }

    #[test]
    fn empty_list_is_rejected() {
        let res = normalize_keywords::<char, &str>([]);
        assert_eq!(res.err(), Some(InvalidInputError::EmptyKeywordList));
    }

    #[test]
    fn empty_keyword_is_rejected_with_index() {
        let res = normalize_keywords(["he", "she", "", "his"]);
        assert_eq!(res.err(), Some(InvalidInputError::EmptyKeyword { index: 2 }));
    }

    #[test]
    fn sequence_keywords() {
        let words: Vec<Vec<u8>> = vec![vec![1, 2], vec![1, 2], vec![3]];
        let set = normalize_keywords(words).unwrap();
        assert_eq!(set.keywords.len(), 2);
        assert_eq!(&*set.keywords[1], &[3u8][..]);
    }

    #[test]
    fn unicode_keywords_are_split_into_chars() {
        let buf = "授人以鱼".collect_keyword();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[3], '鱼');
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "more than u32::MAX keywords")]
    fn keyword_id_overflow_panics() {
        KeywordId::new(u32::MAX as usize + 1);
    }
}
