//! Heuristic labeling of trailing summary paragraphs.
//!
//! Episode descriptions often end with an unlabeled long-form summary. The
//! restore pass prefixes that paragraph with a literal
//! `**Extended description:**` marker so the renderer emits a heading for
//! it. Two divergent qualifying rules existed upstream; rather than picking
//! one silently, the rule is a [`ExtendedHeadingPolicy`] chosen via config
//! or CLI flag.

use castpress_shared::{CastpressError, Result};

/// Literal marker the heuristic looks for; its presence makes the pass a
/// no-op, which keeps re-runs idempotent.
pub const EXTENDED_HEADING_MARKER: &str = "Extended description";

/// Qualifying rule for "does the last paragraph look like a summary".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtendedHeadingPolicy {
    /// Longer than 100 chars, no colon, not bullet-led.
    #[default]
    Strict,
    /// Longer than 80 chars, not bullet-led.
    Relaxed,
}

impl ExtendedHeadingPolicy {
    fn qualifies(self, section: &str) -> bool {
        let bullet_led = matches!(section.chars().next(), Some('-' | '•' | '*'));
        match self {
            Self::Strict => {
                section.chars().count() > 100 && !section.contains(':') && !bullet_led
            }
            Self::Relaxed => section.chars().count() > 80 && !bullet_led,
        }
    }
}

impl std::fmt::Display for ExtendedHeadingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Relaxed => write!(f, "relaxed"),
        }
    }
}

impl std::str::FromStr for ExtendedHeadingPolicy {
    type Err = CastpressError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Self::Strict),
            "relaxed" => Ok(Self::Relaxed),
            other => Err(CastpressError::config(format!(
                "unknown extended-heading policy '{other}': expected 'strict' or 'relaxed'"
            ))),
        }
    }
}

/// Prefix the trailing summary paragraph with the extended-description
/// marker when the policy says it qualifies.
///
/// Text that already contains the marker is returned unchanged. A
/// single-paragraph description is labeled unconditionally.
pub fn inject_extended_heading(text: &str, policy: ExtendedHeadingPolicy) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.contains(EXTENDED_HEADING_MARKER) {
        return text.to_string();
    }

    let mut sections: Vec<&str> = text.split("\n\n").collect();
    if sections.len() == 1 {
        return format!("**{EXTENDED_HEADING_MARKER}:**\n{text}");
    }

    let last = sections.len() - 1;
    let labeled;
    if policy.qualifies(sections[last]) {
        labeled = format!("**{EXTENDED_HEADING_MARKER}:**\n{}", sections[last]);
        sections[last] = &labeled;
    }

    sections.join("\n\n")
}
