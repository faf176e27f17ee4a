//! Greedy longest-match segmentation.
use std::ops::Range;

use crate::dictionary::{Dictionary, Entry};

/// Segmenter consuming the longest dictionary key at each position.
///
/// A position where no key matches yields a single-character segment, so
/// segments always cover the whole input.
#[derive(Clone, Debug)]
pub struct MaxMatchSegmenter {
    dict: Dictionary,
}

impl MaxMatchSegmenter {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `dict`: Dictionary whose keys define the segments.
    pub const fn new(dict: Dictionary) -> Self {
        Self { dict }
    }

    /// Gets the reference to the dictionary.
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Segments a text lazily.
    ///
    /// The returned iterator can be cloned to restart from its current position.
    pub fn segment<'a>(&'a self, text: &'a str) -> SegmentIter<'a> {
        SegmentIter::new(&self.dict, text)
    }
}

/// Segment of an input text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment<'a> {
    surface: &'a str,
    range_char: Range<usize>,
    range_byte: Range<usize>,
    entry: Option<&'a Entry>,
}

impl<'a> Segment<'a> {
    /// Gets the surface string of the segment.
    #[inline(always)]
    pub const fn surface(&self) -> &'a str {
        self.surface
    }

    /// Gets the position range of the segment in characters.
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        self.range_char.clone()
    }

    /// Gets the position range of the segment in bytes.
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        self.range_byte.clone()
    }

    /// Gets the dictionary entry matched by the segment, if any.
    #[inline(always)]
    pub const fn entry(&self) -> Option<&'a Entry> {
        self.entry
    }

    /// Gets the primary value of the matched entry, or the surface if nothing matched.
    #[inline(always)]
    pub fn rendered(&self) -> &'a str {
        self.entry.map_or(self.surface, Entry::primary)
    }
}

/// Iterator of segments.
#[derive(Clone, Debug)]
pub struct SegmentIter<'a> {
    dict: &'a Dictionary,
    text: &'a str,
    chars: Vec<char>,
    c2b: Vec<usize>,
    pos: usize,
}

impl<'a> SegmentIter<'a> {
    fn new(dict: &'a Dictionary, text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut c2b = Vec::with_capacity(text.len() + 1);
        for (bi, ch) in text.char_indices() {
            chars.push(ch);
            c2b.push(bi);
        }
        c2b.push(text.len());
        Self {
            dict,
            text,
            chars,
            c2b,
            pos: 0,
        }
    }
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.chars.len() {
            return None;
        }
        let (dict, text) = (self.dict, self.text);
        let start = self.pos;
        let (end, entry) = match dict.match_prefix(&self.chars[start..]) {
            Some(m) => (start + m.len_char(), Some(m.entry())),
            None => (start + 1, None),
        };
        debug_assert!(end <= self.chars.len());
        self.pos = end;

        let range_byte = self.c2b[start]..self.c2b[end];
        Some(Segment {
            surface: &text[range_byte.clone()],
            range_char: start..end,
            range_byte,
            entry,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.chars.len() - self.pos;
        (usize::from(rest != 0), Some(rest))
    }
}

impl std::iter::FusedIterator for SegmentIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(segmenter: &MaxMatchSegmenter, text: &str) -> Vec<String> {
        segmenter
            .segment(text)
            .map(|s| s.surface().to_string())
            .collect()
    }

    #[test]
    fn test_longest_match() {
        let dict = Dictionary::from_text("ab\tX\na\tY").unwrap();
        let segmenter = MaxMatchSegmenter::new(dict);
        assert_eq!(surfaces(&segmenter, "abc"), ["ab", "c"]);
    }

    #[test]
    fn test_ranges() {
        let dict = Dictionary::from_text("头发\t頭髮").unwrap();
        let segmenter = MaxMatchSegmenter::new(dict);
        let segs: Vec<_> = segmenter.segment("剪头发").collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].surface(), "剪");
        assert_eq!(segs[0].entry(), None);
        assert_eq!(segs[0].rendered(), "剪");
        assert_eq!(segs[1].surface(), "头发");
        assert_eq!(segs[1].range_char(), 1..3);
        assert_eq!(segs[1].range_byte(), 3..9);
        assert_eq!(segs[1].entry().unwrap().key(), "头发");
        assert_eq!(segs[1].rendered(), "頭髮");
    }

    #[test]
    fn test_full_coverage() {
        let dict = Dictionary::from_text("东京\tA\n京都\tB\n都\tC").unwrap();
        let segmenter = MaxMatchSegmenter::new(dict);
        let text = "去东京都京都玩";
        let segs: Vec<_> = segmenter.segment(text).collect();
        assert_eq!(
            segs.iter().map(|s| s.surface()).collect::<Vec<_>>(),
            ["去", "东京", "都", "京都", "玩"]
        );
        let joined: String = segs.iter().map(|s| s.surface()).collect();
        assert_eq!(joined, text);
        for w in segs.windows(2) {
            assert_eq!(w[0].range_char().end, w[1].range_char().start);
        }
    }

    #[test]
    fn test_restart() {
        let dict = Dictionary::from_text("ab\tX").unwrap();
        let segmenter = MaxMatchSegmenter::new(dict);
        let mut it = segmenter.segment("abab");
        let saved = it.clone();
        assert_eq!(it.next().unwrap().surface(), "ab");
        assert_eq!(it.count(), 1);
        assert_eq!(saved.count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let dict = Dictionary::from_text("a\tA").unwrap();
        let segmenter = MaxMatchSegmenter::new(dict);
        assert_eq!(segmenter.segment("").next(), None);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::from_text("").unwrap();
        let segmenter = MaxMatchSegmenter::new(dict);
        assert_eq!(surfaces(&segmenter, "ab"), ["a", "b"]);
    }
}
