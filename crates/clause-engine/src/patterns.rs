//! Case-insensitive keyword search and context excerpts
//!
//! Offsets reported here are character offsets into the original text, not
//! byte offsets. Lowercasing can change the byte length of a character, so
//! matches found in the lowercased copy are mapped back through
//! [`NormalizedText`] before anything is sliced out of the original.

/// Characters of context kept on each side of a keyword match
pub const CONTEXT_CHARS: usize = 100;

/// A keyword occurrence, in original-text character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Index of the keyword in the clause's keyword list
    pub keyword_index: usize,
    pub start: usize,
    pub end: usize,
}

/// Lowercased copy of a text that can map matches back to the original
pub struct NormalizedText<'a> {
    original: &'a str,
    lowered: String,
    // Originating char index for every byte of `lowered`
    origin: Vec<usize>,
    // Byte offset of every char of `original`, followed by `original.len()`
    char_starts: Vec<usize>,
}

impl<'a> NormalizedText<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut lowered = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        let mut char_starts = Vec::with_capacity(original.len() + 1);

        for (index, (byte_offset, ch)) in original.char_indices().enumerate() {
            char_starts.push(byte_offset);
            lowered.extend(ch.to_lowercase());
            origin.resize(lowered.len(), index);
        }
        char_starts.push(original.len());

        Self {
            original,
            lowered,
            origin,
            char_starts,
        }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Length of the original text in characters
    pub fn char_len(&self) -> usize {
        self.char_starts.len() - 1
    }

    /// Find the first occurrence of `keyword`, ignoring case.
    ///
    /// Returns `(start, end)` as original character offsets. An empty keyword
    /// matches at offset 0.
    pub fn find(&self, keyword: &str) -> Option<(usize, usize)> {
        let needle = lowercase(keyword);
        let byte_start = self.lowered.find(&needle)?;

        let start = self.char_at(byte_start);
        let end = if needle.is_empty() {
            start
        } else {
            self.origin[byte_start + needle.len() - 1] + 1
        };

        Some((start, end))
    }

    /// Slice the original text between two character offsets (clamped)
    pub fn slice_chars(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.char_len());
        let start = start.min(end);
        &self.original[self.char_starts[start]..self.char_starts[end]]
    }

    fn char_at(&self, byte: usize) -> usize {
        self.origin.get(byte).copied().unwrap_or_else(|| self.char_len())
    }
}

fn lowercase(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Find the first keyword, in declared order, that occurs anywhere in the text.
///
/// Declared order wins over text position: a later keyword that appears
/// earlier in the text is not considered once an earlier keyword matched.
pub fn first_keyword_match<S: AsRef<str>>(
    text: &NormalizedText<'_>,
    keywords: &[S],
) -> Option<KeywordMatch> {
    for (keyword_index, keyword) in keywords.iter().enumerate() {
        if let Some((start, end)) = text.find(keyword.as_ref()) {
            return Some(KeywordMatch {
                keyword_index,
                start,
                end,
            });
        }
    }
    None
}

/// Excerpt of up to [`CONTEXT_CHARS`] characters on each side of a match,
/// wrapped as `...excerpt...` with the original casing.
pub fn extract_context(text: &NormalizedText<'_>, found: &KeywordMatch) -> String {
    let start = found.start.saturating_sub(CONTEXT_CHARS);
    let end = found.end.saturating_add(CONTEXT_CHARS);
    format!("...{}...", text.slice_chars(start, end))
}
