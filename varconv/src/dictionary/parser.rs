use crate::dictionary::Entry;
use crate::errors::{Result, VarconvError};

const KEY_SEPARATOR: char = '\t';
const VALUE_SEPARATOR: char = ' ';

// NUL also ends a line; the trie cannot index keys containing it.
#[inline(always)]
const fn is_line_ending(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\0')
}

/// Parses one line of a dictionary text, `KEY\tVALUE1 VALUE2 ...`.
///
/// The line may still carry its line ending, which terminates it.
///
/// # Arguments
///
///  - `line`: Text of the line.
///  - `line_num`: 1-based line number used in errors.
///
/// # Errors
///
///  - [`VarconvError::MalformedDictionaryLine`] when no tab precedes the line ending.
///  - [`VarconvError::EmptyKey`] when the tab is the first character.
///  - [`VarconvError::EmptyValueList`] when nothing but separators follows the tab.
pub fn parse_line(line: &str, line_num: usize) -> Result<Entry> {
    let line = line
        .find(is_line_ending)
        .map_or(line, |end| &line[..end]);

    let tab = line
        .char_indices()
        .find_map(|(i, c)| (c == KEY_SEPARATOR).then_some(i))
        .ok_or_else(|| VarconvError::malformed_line(line_num, line))?;

    let key = &line[..tab];
    if key.is_empty() {
        return Err(VarconvError::empty_key(line_num, line));
    }

    let values: Vec<String> = line[tab + KEY_SEPARATOR.len_utf8()..]
        .split(VALUE_SEPARATOR)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .collect();
    if values.is_empty() {
        return Err(VarconvError::empty_value_list(line_num, line));
    }

    Ok(Entry::new(key.to_string(), values))
}
