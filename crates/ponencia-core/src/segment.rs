//! Opinion segmentation.
//!
//! An opinion body is split into blank-line separated blocks, each block
//! into its lines. Lines are cleaned and kept only if long enough to be
//! useful as search passages. Everything after a `---` line is the footnote
//! block and is never segmented.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::decision::Opinion;

/// Default minimum segment length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 500;

const FOOTNOTE_BOUNDARY: &str = "---";

static DOUBLE_SPACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*\n\s*").expect("valid block regex"));
static SINGLE_SPACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("valid line regex"));
static ELISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)x\s*x\s*x\s*").expect("valid elision regex"));
static EXTRA_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static FOOTNOTE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\^\d+\]").expect("valid footnote regex"));
static FOOTNOTE_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\^\d+\]:").expect("valid footnote definition regex"));
static LEADING_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W+").expect("valid leading regex"));
static TRAILING_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+$").expect("valid trailing regex"));

/// A retained passage of an opinion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    ordinal: u32,
    position: String,
    text: String,
    char_count: usize,
}

impl Segment {
    fn new(ordinal: u32, position: String, text: String) -> Self {
        let char_count = text.chars().count();
        Self {
            ordinal,
            position,
            text,
            char_count,
        }
    }

    /// Dense, zero-based index over retained segments.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// `block-line` location in the standardized source.
    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Always equal to the number of characters in [`Self::text`].
    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

/// Segments of one opinion, produced as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSet {
    pub opinion_id: String,
    pub decision_id: String,
    pub segments: Vec<Segment>,
    /// Units dropped for being below the minimum length.
    pub discarded: usize,
}

impl SegmentSet {
    pub fn segment_id(&self, segment: &Segment) -> String {
        format!("{}-{}", self.opinion_id, segment.ordinal)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    min_length: usize,
    strip_inline_footnotes: bool,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl Segmenter {
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            strip_inline_footnotes: true,
        }
    }

    pub fn with_inline_footnotes_stripped(mut self, strip: bool) -> Self {
        self.strip_inline_footnotes = strip;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn segment(&self, text: &str) -> Vec<Segment> {
        self.split(text).0
    }

    pub fn segment_opinion(&self, opinion: &Opinion) -> SegmentSet {
        let (segments, discarded) = self.split(&opinion.text);
        SegmentSet {
            opinion_id: opinion.id.clone(),
            decision_id: opinion.decision_id.clone(),
            segments,
            discarded,
        }
    }

    fn split(&self, text: &str) -> (Vec<Segment>, usize) {
        let text = standardize(text);
        let mut segments = Vec::new();
        let mut discarded = 0;

        'blocks: for (block_idx, block) in DOUBLE_SPACED.split(&text).enumerate() {
            for (line_idx, line) in SINGLE_SPACED.split(block).enumerate() {
                if line == FOOTNOTE_BOUNDARY {
                    break 'blocks;
                }
                if FOOTNOTE_DEF.is_match(line) {
                    continue;
                }
                let cleaned = self.clean(line);
                if cleaned.is_empty() {
                    continue;
                }
                if cleaned.chars().count() < self.min_length {
                    discarded += 1;
                    continue;
                }
                let ordinal = u32::try_from(segments.len()).unwrap_or(u32::MAX);
                segments.push(Segment::new(ordinal, format!("{block_idx}-{line_idx}"), cleaned));
            }
        }
        (segments, discarded)
    }

    fn clean(&self, line: &str) -> String {
        let text = ELISION.replace_all(line, "");
        let text = EXTRA_SPACE.replace_all(&text, " ");
        let text = if self.strip_inline_footnotes {
            FOOTNOTE_REF.replace_all(&text, "").into_owned()
        } else {
            text.into_owned()
        };
        let text = LEADING_JUNK.replace(&text, "");
        TRAILING_JUNK.replace(&text, "").into_owned()
    }
}

/// Segment `opinion_text` with the default cleaning rules.
pub fn segment(opinion_text: &str, min_length: usize) -> Vec<Segment> {
    Segmenter::new(min_length).segment(opinion_text)
}

/// Normalise typography and drop the leading heading.
pub fn standardize(text: &str) -> String {
    let text = text.trim_start();
    text.strip_prefix("# Ponencia")
        .unwrap_or(text)
        .replace('\u{a0}', "")
        .replace('\u{ad}', "-")
        .replace(['\u{201c}', '\u{201d}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .trim()
        .to_string()
}
