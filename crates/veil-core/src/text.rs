//! Character-indexed view over an input string.
//!
//! Span coordinates everywhere in Veil are zero-based character offsets into
//! the original text. Regex engines and string slicing work on UTF-8 byte
//! offsets, so `Text` keeps the byte position of every character boundary and
//! converts in both directions.

/// Borrowed text with a char ↔ byte boundary table.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    raw: &'a str,
    /// Byte offset of each character, plus a trailing entry for `raw.len()`.
    boundaries: Vec<usize>,
}

impl<'a> Text<'a> {
    pub fn new(raw: &'a str) -> Self {
        let mut boundaries: Vec<usize> = raw.char_indices().map(|(b, _)| b).collect();
        boundaries.push(raw.len());
        Self { raw, boundaries }
    }

    /// The underlying string.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Number of characters.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Convert a byte offset on a char boundary to a character offset.
    /// Returns `None` for offsets inside a multi-byte character or past the end.
    pub fn char_offset(&self, byte: usize) -> Option<usize> {
        self.boundaries.binary_search(&byte).ok()
    }

    /// Convert a character offset to a byte offset. `None` past the end.
    pub fn byte_offset(&self, char_idx: usize) -> Option<usize> {
        self.boundaries.get(char_idx).copied()
    }

    /// Slice by character offsets `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        if start > end {
            return None;
        }
        let from = self.byte_offset(start)?;
        let to = self.byte_offset(end)?;
        Some(&self.raw[from..to])
    }

    /// Map a byte range produced by a regex match to character offsets.
    pub fn char_range(&self, byte_start: usize, byte_end: usize) -> Option<(usize, usize)> {
        Some((self.char_offset(byte_start)?, self.char_offset(byte_end)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets_are_identity() {
        let text = Text::new("hello");
        assert_eq!(text.char_len(), 5);
        assert_eq!(text.char_offset(3), Some(3));
        assert_eq!(text.slice(1, 4), Some("ell"));
    }

    #[test]
    fn multibyte_offsets_convert() {
        // 'é' is two bytes, '日' is three.
        let text = Text::new("é日x");
        assert_eq!(text.char_len(), 3);
        assert_eq!(text.byte_offset(1), Some(2));
        assert_eq!(text.byte_offset(2), Some(5));
        assert_eq!(text.char_offset(5), Some(2));
        assert_eq!(text.char_offset(1), None);
        assert_eq!(text.slice(1, 3), Some("日x"));
    }

    #[test]
    fn empty_text() {
        let text = Text::new("");
        assert!(text.is_empty());
        assert_eq!(text.char_len(), 0);
        assert_eq!(text.slice(0, 0), Some(""));
        assert_eq!(text.slice(0, 1), None);
    }

    #[test]
    fn inverted_slice_is_none() {
        let text = Text::new("abc");
        assert_eq!(text.slice(2, 1), None);
    }
}
