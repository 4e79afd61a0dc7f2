/// Borrowed code points, iterable by reference as `strsim` expects.
struct CodePoints<'a>(&'a [char]);

impl<'a> IntoIterator for &CodePoints<'a> {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Levenshtein distance over Unicode scalar values.
///
/// Works on `char` slices so a multi-byte character counts as a single edit.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    strsim::generic_levenshtein(&CodePoints(a), &CodePoints(b))
}

/// Case-folds text one code point at a time.
///
/// Containment checks and window comparisons both go through the same
/// `char::to_lowercase` so they agree on what "lowercase" means.
pub fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// A sentence folded once, with the folded range of every original code point.
///
/// Lowercasing can expand a code point (`İ` folds to two), so windows are
/// measured in original code points and mapped into the folded buffer
/// through `starts`.
pub struct FoldedText {
    original: Vec<char>,
    folded: Vec<char>,
    starts: Vec<usize>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        let original: Vec<char> = text.chars().collect();
        let mut folded = Vec::with_capacity(original.len());
        let mut starts = Vec::with_capacity(original.len() + 1);

        for c in &original {
            starts.push(folded.len());
            folded.extend(c.to_lowercase());
        }
        starts.push(folded.len());

        Self {
            original,
            folded,
            starts,
        }
    }

    /// Length in original code points.
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Whether the folded text contains `needle` (already folded).
    pub fn contains(&self, needle: &[char]) -> bool {
        needle.is_empty() || self.folded.windows(needle.len()).any(|w| w == needle)
    }

    /// Folded form of original code points `start..start + width`.
    pub fn folded_window(&self, start: usize, width: usize) -> &[char] {
        &self.folded[self.starts[start]..self.starts[start + width]]
    }

    pub fn original_window(&self, start: usize, width: usize) -> &[char] {
        &self.original[start..start + width]
    }
}
