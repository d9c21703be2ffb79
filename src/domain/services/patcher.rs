//! File Patcher
//!
//! Applies ordered text edits to a file's content. A per-file marker string makes
//! the operation idempotent: once the marker appears, the file is left alone.

use std::path::PathBuf;

use regex::{NoExpand, Regex};

/// A single text edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchEdit {
    /// Replace the first occurrence of `old` with `new`
    Literal { old: String, new: String },
    /// Replace every match of a regular expression with literal text
    Pattern { pattern: String, replacement: String },
}

impl PatchEdit {
    pub fn literal(old: impl Into<String>, new: impl Into<String>) -> Self {
        PatchEdit::Literal {
            old: old.into(),
            new: new.into(),
        }
    }

    pub fn pattern(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        PatchEdit::Pattern {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Short description used when the edit finds nothing to change
    pub fn summary(&self) -> String {
        let text = match self {
            PatchEdit::Literal { old, .. } => old.as_str(),
            PatchEdit::Pattern { pattern, .. } => pattern.as_str(),
        };
        let first_line = text.lines().next().unwrap_or_default();
        if first_line.chars().count() > 60 {
            let cut: String = first_line.chars().take(60).collect();
            format!("{cut}...")
        } else {
            first_line.to_string()
        }
    }

    /// Apply to `content`, returning the new content when something matched
    fn apply(&self, content: &str) -> Option<String> {
        match self {
            PatchEdit::Literal { old, new } => {
                if old.is_empty() || !content.contains(old.as_str()) {
                    return None;
                }
                Some(content.replacen(old.as_str(), new, 1))
            }
            PatchEdit::Pattern {
                pattern,
                replacement,
            } => {
                let re = match Regex::new(pattern) {
                    Ok(re) => re,
                    Err(e) => {
                        tracing::warn!(%pattern, error = %e, "invalid patch pattern");
                        return None;
                    }
                };
                if !re.is_match(content) {
                    return None;
                }
                Some(
                    re.replace_all(content, NoExpand(replacement.as_str()))
                        .into_owned(),
                )
            }
        }
    }
}

/// Edits for one file, relative to the patched tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatch {
    pub path: PathBuf,
    pub marker: String,
    pub edits: Vec<PatchEdit>,
}

impl FilePatch {
    pub fn new(path: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            marker: marker.into(),
            edits: Vec::new(),
        }
    }

    pub fn edit(mut self, edit: PatchEdit) -> Self {
        self.edits.push(edit);
        self
    }
}

/// A named group of file patches applied together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSet {
    pub name: String,
    pub files: Vec<FilePatch>,
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file does not exist in the tree
    Missing,
    /// The marker is already present
    AlreadyPatched,
    /// No edit matched; the file was not written
    Unchanged { missed: Vec<String> },
    /// The file was rewritten; `missed` lists edits that found nothing
    Patched { missed: Vec<String> },
}

impl PatchOutcome {
    pub fn is_warning(&self) -> bool {
        match self {
            PatchOutcome::Missing => true,
            PatchOutcome::AlreadyPatched => false,
            PatchOutcome::Unchanged { missed } | PatchOutcome::Patched { missed } => {
                !missed.is_empty()
            }
        }
    }
}

/// Apply a file patch to content already read from disk
///
/// Returns the outcome and, for `Patched`, the content to write back.
pub fn apply_file_patch(patch: &FilePatch, content: &str) -> (PatchOutcome, Option<String>) {
    if !patch.marker.is_empty() && content.contains(patch.marker.as_str()) {
        return (PatchOutcome::AlreadyPatched, None);
    }

    let mut current = content.to_string();
    let mut missed = Vec::new();

    for edit in &patch.edits {
        match edit.apply(&current) {
            Some(updated) => current = updated,
            None => missed.push(edit.summary()),
        }
    }

    if current == content {
        (PatchOutcome::Unchanged { missed }, None)
    } else {
        (PatchOutcome::Patched { missed }, Some(current))
    }
}
