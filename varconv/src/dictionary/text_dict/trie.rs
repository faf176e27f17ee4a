use std::collections::BTreeMap;

use crate::errors::{Result, VarconvError};

/// Double-array trie from keys to entry ids.
pub struct Trie {
    da: crawdad::Trie,
}

impl Trie {
    /// Returns `None` when `ids` is empty, since there is nothing to index.
    pub fn new(ids: BTreeMap<&str, u32>) -> Result<Option<Self>> {
        if ids.is_empty() {
            return Ok(None);
        }
        let da = crawdad::Trie::from_records(ids)
            .map_err(|e| VarconvError::invalid_argument("keys", e.to_string()))?;
        Ok(Some(Self { da }))
    }

    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<u32> {
        self.da.exact_match(key.chars())
    }

    /// Yields `(id, length in characters)` of every key prefixing `input`,
    /// shortest first.
    #[inline(always)]
    pub fn prefixes<'a>(&'a self, input: &'a [char]) -> impl Iterator<Item = (u32, usize)> + 'a {
        self.da.common_prefix_search(input.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> Trie {
        let ids = BTreeMap::from([("東京", 0), ("東京都", 1), ("京都", 2)]);
        Trie::new(ids).unwrap().unwrap()
    }

    #[test]
    fn test_prefixes() {
        let trie = trie();
        let input: Vec<_> = "東京都に".chars().collect();
        let found: Vec<_> = trie.prefixes(&input).collect();
        assert_eq!(found, [(0, 2), (1, 3)]);
        assert_eq!(trie.prefixes(&['に']).next(), None);
    }

    #[test]
    fn test_get() {
        let trie = trie();
        assert_eq!(trie.get("東京都"), Some(1));
        assert_eq!(trie.get("東"), None);
    }

    #[test]
    fn test_empty() {
        assert!(Trie::new(BTreeMap::new()).unwrap().is_none());
    }
}
