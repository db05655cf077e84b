//! Fuzzy matching algorithms.

use unicode_segmentation::UnicodeSegmentation;

/// Calculate Levenshtein edit distance between two strings.
///
/// Classic dynamic-programming edit distance: insertions, deletions, and
/// substitutions at unit cost, full string against full string.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows are enough; the full matrix is never revisited
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// A located fuzzy match inside a larger text.
///
/// `start..end` are byte offsets into the original text, safe to slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzySpan {
    /// Byte offset of the window start
    pub start: usize,
    /// Byte offset one past the window end
    pub end: usize,
    /// Character mismatches inside the window
    pub mismatches: usize,
}

/// Locate the keyword inside `text`, tolerating up to two mismatches.
///
/// Slides a fixed-width window of the keyword's length across the text
/// and picks the earliest window with the fewest case-insensitive
/// mismatches; a best window with more than two mismatches is no match.
/// This is deliberately not edit distance (no insertions or deletions
/// are considered), which keeps highlight lookup linear in the text.
/// Windows are measured in grapheme clusters so multi-byte titles
/// highlight on character boundaries.
#[must_use]
pub fn locate_fuzzy(text: &str, keyword: &str) -> Option<FuzzySpan> {
    let key_lower: Vec<String> = keyword.graphemes(true).map(str::to_lowercase).collect();
    if key_lower.is_empty() {
        return None;
    }

    let text_graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
    if text_graphemes.len() < key_lower.len() {
        return None;
    }
    let text_lower: Vec<String> = text_graphemes
        .iter()
        .map(|(_, g)| g.to_lowercase())
        .collect();

    let mut best: Option<(usize, usize)> = None;
    for start in 0..=(text_graphemes.len() - key_lower.len()) {
        let mismatches = key_lower
            .iter()
            .enumerate()
            .filter(|(j, k)| text_lower[start + j] != **k)
            .count();
        if best.is_none_or(|(m, _)| mismatches < m) {
            best = Some((mismatches, start));
        }
        if mismatches == 0 {
            break;
        }
    }

    let (mismatches, start_idx) = best?;
    if mismatches > 2 {
        return None;
    }

    let start = text_graphemes[start_idx].0;
    let end_idx = start_idx + key_lower.len();
    let end = text_graphemes
        .get(end_idx)
        .map_or(text.len(), |(offset, _)| *offset);

    Some(FuzzySpan {
        start,
        end,
        mismatches,
    })
}
