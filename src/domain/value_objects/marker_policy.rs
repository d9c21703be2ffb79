//! Marker Policy Value Object
//!
//! Decides what counts as "already done" for the clone and environment steps.

use serde::Deserialize;

/// How a setup step decides whether it already ran
///
/// - `Sentinel`: the step must have a completion record and its directory must exist (default)
/// - `Presence`: the directory existing is enough, whatever it contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPolicy {
    /// Completion record written after the step succeeds (default)
    #[default]
    Sentinel,
    /// Directory existence only
    Presence,
}

impl MarkerPolicy {
    pub const VALID_VALUES: &'static [&'static str] = &["sentinel", "presence"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sentinel" => Some(MarkerPolicy::Sentinel),
            "presence" => Some(MarkerPolicy::Presence),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerPolicy::Sentinel => "sentinel",
            MarkerPolicy::Presence => "presence",
        }
    }
}
