use std::fmt;

/// Parsed dictionary line: a key and its candidate values.
///
/// `values` is never empty. The first value is the primary candidate and the
/// one emitted by conversion.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Entry {
    key: String,
    values: Vec<String>,
}

impl Entry {
    #[inline(always)]
    pub(crate) fn new(key: String, values: Vec<String>) -> Self {
        debug_assert!(!key.is_empty());
        debug_assert!(!values.is_empty());
        Self { key, values }
    }

    /// Gets the key.
    #[inline(always)]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gets all the candidate values in the listed order.
    #[inline(always)]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Gets the primary (first-listed) value.
    #[inline(always)]
    pub fn primary(&self) -> &str {
        &self.values[0]
    }

    /// Gets the number of candidate values.
    #[inline(always)]
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Checks if the entry has exactly one value.
    #[inline(always)]
    pub fn is_single(&self) -> bool {
        self.values.len() == 1
    }

    /// Gets the key length in characters.
    #[inline(always)]
    pub(crate) fn key_len_char(&self) -> usize {
        self.key.chars().count()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.key, self.values.join(" "))
    }
}
