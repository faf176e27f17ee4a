//! Dictionaries for segmentation and conversion.
//!
//! A dictionary text has one entry per line:
//!
//! ```text
//! KEY<TAB>VALUE1 VALUE2 ...
//! ```
//!
//! The first value of an entry is the one used for conversion.
mod entry;
mod group;
mod lexicon;
mod parser;
mod text_dict;

use std::sync::Arc;

use crate::errors::Result;

pub use entry::Entry;
pub use group::DictGroup;
pub use lexicon::Lexicon;
pub use parser::parse_line;
pub use text_dict::TextDict;

/// Result of a prefix lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DictMatch<'a> {
    entry: &'a Entry,
    len_char: usize,
}

impl<'a> DictMatch<'a> {
    #[inline(always)]
    pub(crate) const fn new(entry: &'a Entry, len_char: usize) -> Self {
        Self { entry, len_char }
    }

    /// Gets the matched entry.
    #[inline(always)]
    pub const fn entry(&self) -> &'a Entry {
        self.entry
    }

    /// Gets the matched key.
    #[inline(always)]
    pub fn key(&self) -> &'a str {
        self.entry.key()
    }

    /// Gets the primary value of the matched entry.
    #[inline(always)]
    pub fn primary(&self) -> &'a str {
        self.entry.primary()
    }

    /// Gets the matched length in characters.
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }
}

/// Read-only lookup surface shared by segmenters and conversions.
///
/// Cloning is cheap; clones share the underlying data.
#[derive(Clone, Debug)]
pub enum Dictionary {
    /// Dictionary over a single lexicon.
    Text(Arc<TextDict>),

    /// Dictionary composed of several dictionaries.
    Group(Arc<DictGroup>),
}

impl Dictionary {
    /// Builds a dictionary from a dictionary text.
    ///
    /// # Errors
    ///
    /// [`VarconvError`](crate::errors::VarconvError) is returned when the
    /// text has an invalid line.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::Text(Arc::new(TextDict::from_text(text)?)))
    }

    /// Builds a dictionary from a lexicon.
    ///
    /// # Errors
    ///
    /// [`VarconvError`](crate::errors::VarconvError) is returned when the
    /// lexicon is too large to be indexed.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self> {
        Ok(Self::Text(Arc::new(TextDict::from_lexicon(lexicon)?)))
    }

    /// Groups dictionaries into one. See [`DictGroup`] for the precedence.
    pub fn group<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Group(Arc::new(DictGroup::new(members)))
    }

    /// Combines dictionaries, grouping them only when there are several.
    ///
    /// Returns `None` if `dicts` is empty.
    pub(crate) fn combine(mut dicts: Vec<Self>) -> Option<Self> {
        match dicts.len() {
            0 => None,
            1 => dicts.pop(),
            _ => Some(Self::group(dicts)),
        }
    }

    /// Gets the maximum key length in characters.
    pub fn key_max_len(&self) -> usize {
        match self {
            Self::Text(d) => d.key_max_len(),
            Self::Group(d) => d.key_max_len(),
        }
    }

    /// Finds the entry whose key equals `key`.
    pub fn match_exact(&self, key: &str) -> Option<&Entry> {
        match self {
            Self::Text(d) => d.match_exact(key),
            Self::Group(d) => d.match_exact(key),
        }
    }

    /// Finds the longest entry whose key is a prefix of `input`.
    pub fn match_prefix(&self, input: &[char]) -> Option<DictMatch<'_>> {
        match self {
            Self::Text(d) => d.match_prefix(input),
            Self::Group(d) => d.match_prefix(input),
        }
    }

    /// Finds all the entries whose keys are prefixes of `input`, longest first.
    pub fn match_all_prefixes(&self, input: &[char]) -> Vec<DictMatch<'_>> {
        match self {
            Self::Text(d) => d.match_all_prefixes(input),
            Self::Group(d) => d.match_all_prefixes(input),
        }
    }
}
