//! Takeaway extraction for episode preview cards.
//!
//! A takeaway is a short bullet- or emoji-prefixed highlight line. We first
//! look for an explicitly labeled block (`Key Takeaways:` and friends); when
//! none exists we fall back to scanning the text ahead of the first
//! recognized section.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::convert_inline_bold;

/// Cards show at most this many takeaways.
const MAX_TAKEAWAYS: usize = 3;

/// Lines this short are noise (stray markers, lone emoji), not takeaways.
const MIN_LINE_CHARS: usize = 5;

static LABELED_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)(?:Takeaways|Key Takeaways|Key Lessons|Highlights)[:\s-]*\n(.*?)(?:\n\n|Chapters|Time stamps|Links|Timestamp|Toolkit|\*\*Key Timestamps|\*\*Extended description|Extended description|$)",
    )
    .expect("valid regex")
});

static SECTION_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Chapters|Time stamps|Links|Timestamp|Toolkit|\*\*Key Timestamps|\*\*Extended description|Extended description",
    )
    .expect("valid regex")
});

static LEADING_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*]\s*").expect("valid regex"));

/// Extract up to 3 short highlight lines from a description.
///
/// Returned entries have their leading bullet stripped and `**bold**`
/// converted to `<strong>` markup; leftover unmatched `*` markers are
/// removed. Empty input or no matching lines yields an empty vec.
pub fn extract_takeaways(description: &str) -> Vec<String> {
    if description.is_empty() {
        return Vec::new();
    }

    let block = match LABELED_BLOCK_RE.captures(description) {
        Some(caps) => caps[1].to_string(),
        // Fallback: only scan text ahead of the first recognized section.
        None => SECTION_SPLIT_RE
            .split(description)
            .next()
            .unwrap_or("")
            .to_string(),
    };

    let takeaways: Vec<String> = block
        .split('\n')
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_LINE_CHARS)
        .filter(|line| is_highlight_line(line))
        .take(MAX_TAKEAWAYS)
        .map(clean_line)
        .collect();

    debug!(count = takeaways.len(), "takeaways extracted");
    takeaways
}

/// Bullet markers and leading non-ASCII characters (emoji) mark highlights.
fn is_highlight_line(line: &str) -> bool {
    match line.chars().next() {
        Some(c) => matches!(c, '-' | '•' | '*') || !c.is_ascii(),
        None => false,
    }
}

fn clean_line(line: &str) -> String {
    let stripped = LEADING_MARKER_RE.replace(line, "");
    let bolded = convert_inline_bold(&stripped);
    bolded.replace('*', "").trim().to_string()
}
