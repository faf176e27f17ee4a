use std::fmt;
use std::str::FromStr;

use crate::dictionary::{parse_line, Entry};
use crate::errors::{Result, VarconvError};

/// Entries parsed from one dictionary text, in source line order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Lexicon {
    entries: Vec<Entry>,
}

impl Lexicon {
    /// Builds a new instance from a dictionary text.
    ///
    /// Each line has the form `KEY\tVALUE1 VALUE2 ...`. The last line may
    /// omit its line ending.
    ///
    /// # Errors
    ///
    /// The first invalid line aborts the construction and its error is
    /// returned as is. See [`parse_line`].
    pub fn from_text(text: &str) -> Result<Self> {
        let mut entries = vec![];
        for (i, line) in text.lines().enumerate() {
            entries.push(parse_line(line, i + 1)?);
        }
        log::debug!("Parsed a lexicon of {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Gets the entries.
    #[inline(always)]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Gets the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the lexicon has no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets an iterator over the entries.
    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl FromStr for Lexicon {
    type Err = VarconvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
