use crate::dictionary::{DictMatch, Dictionary, Entry};

/// Dictionary composed of ordered member dictionaries.
///
/// Lookups take the longest match across all the members. When several
/// members match with the same length, the member added first wins, so
/// later members can only add keys, never override existing ones of the
/// same length.
#[derive(Debug)]
pub struct DictGroup {
    members: Vec<Dictionary>,
    key_max_len: usize,
}

impl DictGroup {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `members`: Member dictionaries in the order of precedence.
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Dictionary>,
    {
        let members: Vec<_> = members.into_iter().collect();
        let key_max_len = members
            .iter()
            .map(Dictionary::key_max_len)
            .max()
            .unwrap_or(0);
        Self {
            members,
            key_max_len,
        }
    }

    /// Gets the member dictionaries.
    #[inline(always)]
    pub fn members(&self) -> &[Dictionary] {
        &self.members
    }

    /// Gets the maximum key length in characters.
    #[inline(always)]
    pub fn key_max_len(&self) -> usize {
        self.key_max_len
    }

    /// Finds the entry of the earliest member whose key equals `key`.
    pub fn match_exact(&self, key: &str) -> Option<&Entry> {
        self.members.iter().find_map(|d| d.match_exact(key))
    }

    /// Finds the longest entry whose key is a prefix of `input`.
    pub fn match_prefix(&self, input: &[char]) -> Option<DictMatch<'_>> {
        let mut best: Option<DictMatch> = None;
        for m in self.members.iter().filter_map(|d| d.match_prefix(input)) {
            // Strict comparison keeps the earlier member on ties.
            if best.map_or(true, |b| m.len_char() > b.len_char()) {
                best = Some(m);
            }
        }
        best
    }

    /// Finds all the entries whose keys are prefixes of `input`, longest first.
    ///
    /// Only one entry per length is reported, taken from the earliest member.
    pub fn match_all_prefixes(&self, input: &[char]) -> Vec<DictMatch<'_>> {
        let mut matches: Vec<_> = self
            .members
            .iter()
            .flat_map(|d| d.match_all_prefixes(input))
            .collect();
        // The sort is stable, so the earliest member comes first within a length.
        matches.sort_by(|a, b| b.len_char().cmp(&a.len_char()));
        matches.dedup_by_key(|m| m.len_char());
        matches
    }
}
