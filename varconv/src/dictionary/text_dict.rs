mod trie;

use std::collections::BTreeMap;
use std::fmt;

use crate::dictionary::{DictMatch, Entry, Lexicon};
use crate::errors::Result;
use trie::Trie;

/// Dictionary over a single [`Lexicon`].
///
/// When a key occurs more than once in the lexicon, lookups return the
/// first occurrence.
pub struct TextDict {
    lexicon: Lexicon,
    // None iff the lexicon is empty.
    trie: Option<Trie>,
    key_max_len: usize,
}

impl TextDict {
    /// Builds a new instance from a dictionary text.
    ///
    /// # Errors
    ///
    /// [`VarconvError`](crate::errors::VarconvError) is returned when the
    /// text has an invalid line.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_lexicon(Lexicon::from_text(text)?)
    }

    /// Builds a new instance from a lexicon.
    ///
    /// # Errors
    ///
    /// [`VarconvError`](crate::errors::VarconvError) is returned when the
    /// lexicon is too large to be indexed.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self> {
        let mut key_max_len = 0;
        let trie = {
            let mut ids = BTreeMap::new();
            for (i, entry) in lexicon.iter().enumerate() {
                ids.entry(entry.key()).or_insert(u32::try_from(i)?);
                key_max_len = key_max_len.max(entry.key_len_char());
            }
            Trie::new(ids)?
        };
        Ok(Self {
            lexicon,
            trie,
            key_max_len,
        })
    }

    /// Gets the reference to the lexicon.
    #[inline(always)]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Gets the maximum key length in characters.
    #[inline(always)]
    pub fn key_max_len(&self) -> usize {
        self.key_max_len
    }

    #[inline(always)]
    fn entry(&self, id: u32) -> &Entry {
        // Ids are indices into the lexicon, which fit in usize on supported targets.
        &self.lexicon.entries()[id as usize]
    }

    /// Finds the entry whose key equals `key`.
    pub fn match_exact(&self, key: &str) -> Option<&Entry> {
        let trie = self.trie.as_ref()?;
        trie.get(key).map(|id| self.entry(id))
    }

    /// Finds the longest entry whose key is a prefix of `input`.
    pub fn match_prefix(&self, input: &[char]) -> Option<DictMatch<'_>> {
        let trie = self.trie.as_ref()?;
        trie.prefixes(input)
            .last()
            .map(|(id, len_char)| DictMatch::new(self.entry(id), len_char))
    }

    /// Finds all the entries whose keys are prefixes of `input`, longest first.
    pub fn match_all_prefixes(&self, input: &[char]) -> Vec<DictMatch<'_>> {
        let Some(trie) = self.trie.as_ref() else {
            return vec![];
        };
        let mut matches: Vec<_> = trie
            .prefixes(input)
            .map(|(id, len_char)| DictMatch::new(self.entry(id), len_char))
            .collect();
        matches.reverse();
        matches
    }
}

impl fmt::Debug for TextDict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TextDict")
            .field("lexicon", &self.lexicon)
            .field("key_max_len", &self.key_max_len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_match_prefix() {
        let dict = TextDict::from_text("東京\tA\n東京都\tB\n京都\tC\n").unwrap();
        let m = dict.match_prefix(&chars("東京都に行く")).unwrap();
        assert_eq!(m.key(), "東京都");
        assert_eq!(m.primary(), "B");
        assert_eq!(m.len_char(), 3);

        let m = dict.match_prefix(&chars("東京駅")).unwrap();
        assert_eq!(m.key(), "東京");
        assert_eq!(m.len_char(), 2);

        assert!(dict.match_prefix(&chars("大阪")).is_none());
        assert!(dict.match_prefix(&[]).is_none());
    }

    #[test]
    fn test_match_all_prefixes() {
        let dict = TextDict::from_text("東\tX\n東京\tA\n東京都\tB\n").unwrap();
        let keys: Vec<_> = dict
            .match_all_prefixes(&chars("東京都"))
            .iter()
            .map(|m| m.key())
            .collect();
        assert_eq!(keys, ["東京都", "東京", "東"]);
    }

    #[test]
    fn test_match_exact() {
        let dict = TextDict::from_text("东\t東\n东京\t東京\n").unwrap();
        assert_eq!(dict.match_exact("东京").unwrap().primary(), "東京");
        assert!(dict.match_exact("京").is_none());
    }

    #[test]
    fn test_duplicate_keys() {
        let dict = TextDict::from_text("a\tX\nb\tZ\na\tY\n").unwrap();
        assert_eq!(dict.lexicon().len(), 3);
        assert_eq!(dict.match_exact("a").unwrap().primary(), "X");
        assert_eq!(dict.match_prefix(&chars("ab")).unwrap().primary(), "X");
    }

    #[test]
    fn test_key_max_len() {
        let dict = TextDict::from_text("头\t頭\n计算机\t計算機\n").unwrap();
        assert_eq!(dict.key_max_len(), 3);
    }

    #[test]
    fn test_empty() {
        let dict = TextDict::from_text("").unwrap();
        assert_eq!(dict.key_max_len(), 0);
        assert!(dict.match_prefix(&chars("a")).is_none());
        assert!(dict.match_all_prefixes(&chars("a")).is_empty());
        assert!(dict.match_exact("a").is_none());
    }
}
