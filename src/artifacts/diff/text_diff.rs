//! Segment-level text diffs
//!
//! Both granularities run the `similar` Myers diff over a tokenised text and coalesce
//! consecutive changes of the same kind into a single segment. Concatenating the
//! unchanged and removed segments yields the old text, and the unchanged and added
//! segments yield the new one.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentStatus {
    Added,
    Removed,
    Unchanged,
}

impl From<ChangeTag> for SegmentStatus {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Insert => SegmentStatus::Added,
            ChangeTag::Delete => SegmentStatus::Removed,
            ChangeTag::Equal => SegmentStatus::Unchanged,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub status: SegmentStatus,
    pub text: String,
}

impl Segment {
    pub fn new(status: SegmentStatus, text: impl Into<String>) -> Self {
        Segment {
            status,
            text: text.into(),
        }
    }
}

/// Line-granularity diff; every line keeps its terminating newline
pub fn diff_lines(old: &str, new: &str) -> Vec<Segment> {
    coalesce(&TextDiff::from_lines(old, new))
}

/// Character-granularity diff
pub fn diff_chars(old: &str, new: &str) -> Vec<Segment> {
    coalesce(&TextDiff::from_chars(old, new))
}

/// Text on one side of the diff: the old side when `added` is false
pub fn reconstruct(segments: &[Segment], added: bool) -> String {
    let skipped = if added {
        SegmentStatus::Removed
    } else {
        SegmentStatus::Added
    };

    segments
        .iter()
        .filter(|segment| segment.status != skipped)
        .map(|segment| segment.text.as_str())
        .collect()
}

fn coalesce<'a>(text_diff: &TextDiff<'a, 'a, '_, str>) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for change in text_diff.iter_all_changes() {
        let status = SegmentStatus::from(change.tag());

        match segments.last_mut() {
            Some(last) if last.status == status => last.text.push_str(change.value()),
            _ => segments.push(Segment::new(status, change.value())),
        }
    }

    segments
}
