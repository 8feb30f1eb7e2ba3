//! Version diff engine
//!
//! Compares two versions of a template as flattened text and produces a
//! character-level edit script for the history view. Within any changed
//! region, deleted text is reported before inserted text.

use crate::section::PromptSection;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Kind of a diff span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Text present in both versions
    Equal,
    /// Text only in the latest version
    Inserted,
    /// Text only in the original version
    Deleted,
}

/// A contiguous run of characters sharing one diff kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSpan {
    /// How this run relates the two versions
    pub kind: DiffKind,
    /// The run's text, never empty
    pub text: String,
}

impl DiffSpan {
    /// Create an equal span
    pub fn equal(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Equal,
            text: text.into(),
        }
    }

    /// Create an inserted span
    pub fn inserted(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Inserted,
            text: text.into(),
        }
    }

    /// Create a deleted span
    pub fn deleted(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Deleted,
            text: text.into(),
        }
    }
}

/// Flatten sections into the canonical text the diff runs over.
///
/// Each section becomes `role + ":\n" + body`; sections are joined by a
/// blank line.
pub fn flatten_sections(sections: &[PromptSection]) -> String {
    sections
        .iter()
        .map(|s| format!("{}:\n{}", s.role, s.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Character-level diff between two template versions
#[derive(Debug, Clone)]
pub struct VersionDiff {
    pub spans: Vec<DiffSpan>,
}

impl VersionDiff {
    /// Compute the diff between two versions given as section lists
    pub fn compute(original: &[PromptSection], latest: &[PromptSection]) -> Self {
        Self::compute_text(&flatten_sections(original), &flatten_sections(latest))
    }

    /// Compute the diff between two already-flattened texts
    pub fn compute_text(original: &str, latest: &str) -> Self {
        let diff = Self {
            spans: char_spans(original, latest),
        };
        trace!(
            "Computed version diff: {} spans, +{} chars, -{} chars",
            diff.spans.len(),
            diff.inserted_chars(),
            diff.deleted_chars()
        );
        diff
    }

    /// Check if the two versions differ
    pub fn has_changes(&self) -> bool {
        self.spans.iter().any(|s| s.kind != DiffKind::Equal)
    }

    /// Count inserted characters
    pub fn inserted_chars(&self) -> usize {
        self.kind_chars(DiffKind::Inserted)
    }

    /// Count deleted characters
    pub fn deleted_chars(&self) -> usize {
        self.kind_chars(DiffKind::Deleted)
    }

    /// Rebuild the original flattened text from the spans
    pub fn original_text(&self) -> String {
        self.spans
            .iter()
            .filter(|s| s.kind != DiffKind::Inserted)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Rebuild the latest flattened text from the spans
    pub fn latest_text(&self) -> String {
        self.spans
            .iter()
            .filter(|s| s.kind != DiffKind::Deleted)
            .map(|s| s.text.as_str())
            .collect()
    }

    fn kind_chars(&self, kind: DiffKind) -> usize {
        self.spans
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.text.chars().count())
            .sum()
    }
}

/// Diff two template versions, returning just the edit script
pub fn diff_versions(original: &[PromptSection], latest: &[PromptSection]) -> Vec<DiffSpan> {
    VersionDiff::compute(original, latest).spans
}

/// Diff two texts character by character into coalesced spans.
///
/// The common prefix and suffix are peeled off first, so the quadratic
/// LCS table only covers the changed middle.
fn char_spans(original: &str, latest: &str) -> Vec<DiffSpan> {
    if original == latest {
        if original.is_empty() {
            return Vec::new();
        }
        return vec![DiffSpan::equal(original)];
    }

    let old: Vec<char> = original.chars().collect();
    let new: Vec<char> = latest.chars().collect();

    let prefix = old.iter().zip(new.iter()).take_while(|(a, b)| a == b).count();
    let old_rest = &old[prefix..];
    let new_rest = &new[prefix..];
    let suffix = old_rest
        .iter()
        .rev()
        .zip(new_rest.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut spans = Vec::new();
    if prefix > 0 {
        spans.push(DiffSpan::equal(old[..prefix].iter().collect::<String>()));
    }
    spans.extend(middle_spans(
        &old_rest[..old_rest.len() - suffix],
        &new_rest[..new_rest.len() - suffix],
    ));
    if suffix > 0 {
        spans.push(DiffSpan::equal(
            old[old.len() - suffix..].iter().collect::<String>(),
        ));
    }

    spans
}

/// LCS diff over the changed middle, where the first and last characters
/// of the two sides are known to differ
fn middle_spans(old: &[char], new: &[char]) -> Vec<DiffSpan> {
    if old.is_empty() && new.is_empty() {
        return Vec::new();
    }
    if old.is_empty() {
        return vec![DiffSpan::inserted(new.iter().collect::<String>())];
    }
    if new.is_empty() {
        return vec![DiffSpan::deleted(old.iter().collect::<String>())];
    }

    // lcs[i][j] = length of the LCS of old[..i] and new[..j], flattened
    let cols = new.len() + 1;
    let mut lcs = vec![0u32; (old.len() + 1) * cols];
    for i in 1..=old.len() {
        for j in 1..=new.len() {
            lcs[i * cols + j] = if old[i - 1] == new[j - 1] {
                lcs[(i - 1) * cols + (j - 1)] + 1
            } else {
                lcs[(i - 1) * cols + j].max(lcs[i * cols + (j - 1)])
            };
        }
    }

    // Walk the table back to front; preferring insertions on ties here
    // yields deletions before insertions once the ops are reversed.
    let mut ops: Vec<(DiffKind, char)> = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (old.len(), new.len());
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            ops.push((DiffKind::Equal, old[i - 1]));
            i -= 1;
            j -= 1;
        } else if lcs[i * cols + (j - 1)] >= lcs[(i - 1) * cols + j] {
            ops.push((DiffKind::Inserted, new[j - 1]));
            j -= 1;
        } else {
            ops.push((DiffKind::Deleted, old[i - 1]));
            i -= 1;
        }
    }
    while i > 0 {
        ops.push((DiffKind::Deleted, old[i - 1]));
        i -= 1;
    }
    while j > 0 {
        ops.push((DiffKind::Inserted, new[j - 1]));
        j -= 1;
    }

    let mut spans: Vec<DiffSpan> = Vec::new();
    for (kind, ch) in ops.into_iter().rev() {
        match spans.last_mut() {
            Some(span) if span.kind == kind => span.text.push(ch),
            _ => spans.push(DiffSpan {
                kind,
                text: ch.to_string(),
            }),
        }
    }

    spans
}
