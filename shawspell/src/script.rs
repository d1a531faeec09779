//! Script classification and segmentation of text into same-script runs.
//!
//! Classification is a fixed Unicode range lookup per code point. Code points
//! that belong to no script of their own (whitespace, punctuation, digits)
//! attach to the run already in progress, so a run is not fragmented by the
//! spaces between its words.

use serde::{Deserialize, Serialize};
use unic_char_range::{chars, CharRange};
use unic_ucd_category::GeneralCategory;

const SHAVIAN: CharRange = chars!('\u{10450}'..='\u{1047F}');

const LATIN: [CharRange; 6] = [
    chars!('A'..='Z'),
    chars!('a'..='z'),
    // Latin-1 Supplement letters
    chars!('\u{C0}'..='\u{FF}'),
    // Latin Extended-A and Extended-B
    chars!('\u{100}'..='\u{24F}'),
    // Latin Extended Additional
    chars!('\u{1E00}'..='\u{1EFF}'),
    // Latin Extended-C
    chars!('\u{2C60}'..='\u{2C7F}'),
];

/// Writing system of a code point or a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    /// Latin-script letters, including the extended Latin blocks.
    Latin,
    /// The Shavian alphabet (U+10450–U+1047F).
    Shavian,
    /// Any letter outside the Latin and Shavian tables.
    Other,
}

impl Script {
    /// Classifies one code point by range lookup.
    ///
    /// Returns `None` for code points that carry no script of their own
    /// (whitespace, punctuation, digits, symbols, marks).
    pub fn of(ch: char) -> Option<Script> {
        if SHAVIAN.contains(ch) {
            return Some(Script::Shavian);
        }

        if !GeneralCategory::of(ch).is_letter() {
            return None;
        }

        if LATIN.iter().any(|range| range.contains(ch)) {
            Some(Script::Latin)
        } else {
            Some(Script::Other)
        }
    }
}

/// A maximal contiguous run of text sharing one script classification.
///
/// Spans produced by [`script_spans`] are non-overlapping, ordered by start
/// offset, and concatenating their `text` fields reproduces the input with
/// no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSpan<'a> {
    /// Byte offset of the span in the original string.
    pub start: usize,
    /// The span's text, borrowed from the original string.
    pub text: &'a str,
    /// Script shared by every classified code point in the span.
    pub script: Script,
}

impl<'a> ScriptSpan<'a> {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the span is empty. Segmentation never yields empty spans.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Lazy iterator over the script spans of a string.
///
/// Restartable and pure: a fresh iterator over the same input yields the
/// same spans.
pub struct ScriptSpans<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for ScriptSpans<'a> {
    type Item = ScriptSpan<'a>;

    fn next(&mut self) -> Option<ScriptSpan<'a>> {
        if self.cursor >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.cursor..];
        let mut script: Option<Script> = None;

        for (idx, ch) in rest.char_indices() {
            let next = match Script::of(ch) {
                // Unclassified code points extend whichever run is open.
                None => continue,
                Some(s) => s,
            };

            match script {
                None => script = Some(next),
                Some(current) if current == next => {}
                Some(current) => {
                    let span = ScriptSpan {
                        start: self.cursor,
                        text: &rest[..idx],
                        script: current,
                    };
                    self.cursor += idx;
                    return Some(span);
                }
            }
        }

        // Tail of the string, including any trailing unclassified code
        // points. A string with no classified code points at all becomes a
        // single Other span so that coverage still holds.
        let span = ScriptSpan {
            start: self.cursor,
            text: rest,
            script: script.unwrap_or(Script::Other),
        };
        self.cursor = self.text.len();
        Some(span)
    }
}

/// Segments `text` into maximal same-script spans.
///
/// The empty string yields zero spans.
pub fn script_spans(text: &str) -> ScriptSpans {
    ScriptSpans { text, cursor: 0 }
}

/// Determines the dominant script of a word by majority of classified code
/// points.
///
/// Ties are broken in favor of the script appearing earliest in the word,
/// which for a two-way tie is the script of the first classified code point.
/// Returns `None` when no code point classifies to any script.
pub fn dominant_script(word: &str) -> Option<Script> {
    let mut counts: Vec<(Script, usize)> = Vec::with_capacity(3);

    for ch in word.chars() {
        if let Some(script) = Script::of(ch) {
            match counts.iter_mut().find(|(s, _)| *s == script) {
                Some((_, n)) => *n += 1,
                None => counts.push((script, 1)),
            }
        }
    }

    let mut winner: Option<(Script, usize)> = None;
    for (script, n) in counts {
        match winner {
            Some((_, best)) if n <= best => {}
            _ => winner = Some((script, n)),
        }
    }

    winner.map(|(script, _)| script)
}
