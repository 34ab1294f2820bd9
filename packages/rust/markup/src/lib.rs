//! Free-text episode descriptions to HTML fragments.
//!
//! Episode descriptions follow informal conventions rather than a real
//! markup language: section headers like `Key Takeaways:`, bullet lines,
//! `(MM:SS)` timestamp rows, and `**bold**` spans, all separated by
//! newlines. [`render_description`] converts one description into an HTML
//! fragment line by line, carrying its state in a local accumulator.

mod extended;
mod takeaways;

pub use extended::{EXTENDED_HEADING_MARKER, ExtendedHeadingPolicy, inject_extended_heading};
pub use takeaways::extract_takeaways;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

/// A stripped header candidate at or past this length is never a heading.
const HEADER_MAX_CHARS: usize = 30;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(https?://\S+)").expect("valid regex"));

static HEADER_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*:#]").expect("valid regex"));

static HEADER_KEYWORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Extended\s+description|Key\s+Takeaways|Key\s+Lessons|Chapters|Time\s?stamps|Timestamp|Links|Toolkit|Description",
    )
    .expect("valid regex")
});

static TIMESTAMPS_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Time\s?stamps|Timestamp|Chapters").expect("valid regex"));

static EXTENDED_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Extended\s+description").expect("valid regex"));

static TIMESTAMP_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\(?(?:\d{1,2}:)?\d{2}:\d{2}\)?)\s*").expect("valid regex"));

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-•]\s*").expect("valid regex"));

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Convert a free-text episode description into an HTML fragment.
///
/// Line classification, in order:
/// 1. blank lines close any open bullet list
/// 2. short lines carrying a section keyword become `<h4>` headings
/// 3. `(MM:SS)`/`HH:MM:SS`-prefixed lines become timestamp rows
/// 4. `-`/`•`-prefixed lines become list items
/// 5. everything else becomes a paragraph
///
/// Once a timestamps/chapters heading has been seen, an
/// `Extended description` heading is synthesized before the next list item
/// or paragraph unless the text already carries one.
///
/// Pure function of its input; empty input yields an empty fragment.
#[instrument(skip(text))]
pub fn render_description(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let linkified = URL_RE.replace_all(text, r#"<a href="$1" target="_blank">$1</a>"#);

    let mut writer = FragmentWriter::default();
    for line in linkified.split('\n') {
        writer.push_line(line);
    }
    writer.finish()
}

/// Per-call accumulator for the line-by-line renderer.
#[derive(Default)]
struct FragmentWriter {
    html: String,
    in_list: bool,
    found_timestamps: bool,
    injected_extended: bool,
}

impl FragmentWriter {
    fn push_line(&mut self, raw: &str) {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            self.close_list();
            return;
        }

        let stripped = HEADER_PUNCT_RE.replace_all(trimmed, "");
        let core = stripped.trim();

        if HEADER_KEYWORDS_RE.is_match(core) && core.chars().count() < HEADER_MAX_CHARS {
            self.push_heading(core);
            return;
        }

        if let Some(caps) = TIMESTAMP_ROW_RE.captures(trimmed) {
            // Timestamp rows never trigger heading injection.
            let rest = convert_inline_bold(&trimmed[caps.get(0).map_or(0, |m| m.end())..]);
            self.html.push_str(&format!(
                "<p class=\"timestamp-row\"><strong>{}</strong> {rest}</p>",
                &caps[1]
            ));
            return;
        }

        if self.found_timestamps && !self.injected_extended {
            self.close_list();
            self.html.push_str("<h4>Extended description</h4>");
            self.injected_extended = true;
        }

        if BULLET_RE.is_match(trimmed) {
            if !self.in_list {
                self.html.push_str("<ul>");
                self.in_list = true;
            }
            let item = convert_inline_bold(&BULLET_RE.replace(trimmed, ""));
            self.html.push_str(&format!("<li>{item}</li>"));
            return;
        }

        self.close_list();
        let para = convert_inline_bold(trimmed);
        self.html.push_str(&format!("<p>{para}</p>"));
    }

    fn push_heading(&mut self, core: &str) {
        self.close_list();

        if TIMESTAMPS_HEADER_RE.is_match(core) {
            self.found_timestamps = true;
        }
        if EXTENDED_HEADER_RE.is_match(core) {
            self.injected_extended = true;
        }

        self.html.push_str(&format!("<h4>{core}</h4>"));
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.html.push_str("</ul>");
            self.in_list = false;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        debug!(len = self.html.len(), "description rendered");
        self.html
    }
}

/// Convert `**bold**` spans to `<strong>` markup.
pub(crate) fn convert_inline_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>$1</strong>").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_description(""), "");
    }

    #[test]
    fn plain_paragraphs() {
        let html = render_description("First paragraph\nSecond paragraph");
        assert_eq!(html, "<p>First paragraph</p><p>Second paragraph</p>");
    }

    #[test]
    fn inline_bold_in_paragraph() {
        let html = render_description("A **bold** statement");
        assert_eq!(html, "<p>A <strong>bold</strong> statement</p>");
    }

    #[test]
    fn urls_become_anchors() {
        let html = render_description("Visit https://example.com/ep for more");
        assert!(html.contains(
            r#"<a href="https://example.com/ep" target="_blank">https://example.com/ep</a>"#
        ));
    }

    #[test]
    fn bullets_open_and_close_lists() {
        let html = render_description("- one\n- two\n\nAfter");
        assert_eq!(html, "<ul><li>one</li><li>two</li></ul><p>After</p>");
    }

    #[test]
    fn unterminated_list_closed_at_end() {
        let html = render_description("- only item");
        assert_eq!(html, "<ul><li>only item</li></ul>");
    }

    #[test]
    fn header_line_becomes_h4_with_punctuation_stripped() {
        let html = render_description("**Key Takeaways:**\n- point");
        assert_eq!(html, "<h4>Key Takeaways</h4><ul><li>point</li></ul>");
    }

    #[test]
    fn long_keyword_line_is_not_a_heading() {
        // 30+ chars after stripping punctuation, keyword present
        let line = "The chapters of this story run much longer than a header";
        let html = render_description(line);
        assert!(html.starts_with("<p>"));
        assert!(!html.contains("<h4>"));
    }

    #[test]
    fn keyword_free_text_emits_no_headings() {
        let html = render_description("Just a note\n- a bullet\nAnother note");
        assert!(!html.contains("<h4>"));
        assert!(html.contains("<p>"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn timestamp_row_bolds_prefix() {
        let html = render_description("(02:42) Discussion starts");
        assert_eq!(
            html,
            "<p class=\"timestamp-row\"><strong>(02:42)</strong> Discussion starts</p>"
        );
    }

    #[test]
    fn timestamp_row_with_hours_and_inline_bold() {
        let html = render_description("1:02:15 **Deep work** begins");
        assert_eq!(
            html,
            "<p class=\"timestamp-row\"><strong>1:02:15</strong> <strong>Deep work</strong> begins</p>"
        );
    }

    #[test]
    fn extended_heading_injected_after_timestamps() {
        let text = "Chapters:\n(00:00) Intro\n(12:30) Main topic\nA closing summary paragraph";
        let html = render_description(text);
        let injected_at = html.find("<h4>Extended description</h4>").expect("injected");
        let summary_at = html.find("A closing summary").expect("summary kept");
        assert!(injected_at < summary_at);
    }

    #[test]
    fn extended_heading_not_injected_twice() {
        let text =
            "Timestamps:\n(00:00) Intro\n**Extended description:**\nThe long tail\nAnother paragraph";
        let html = render_description(text);
        assert_eq!(html.matches("Extended description").count(), 1);
    }

    #[test]
    fn explicit_extended_header_suppresses_injection() {
        let text = "Extended description:\nAlready labeled\nChapters:\n(01:00) One\nTrailing text";
        let html = render_description(text);
        // The explicit header came first, so nothing extra is synthesized.
        assert_eq!(html.matches("<h4>Extended description</h4>").count(), 1);
    }

    #[test]
    fn injection_lands_before_a_bullet_block_too() {
        let text = "Time stamps:\n(00:30) Start\n- takeaway style line";
        let html = render_description(text);
        assert!(html.contains("<h4>Extended description</h4><ul><li>takeaway style line</li></ul>"));
    }

    #[test]
    fn timestamps_header_variants_set_state() {
        for header in ["Chapters:", "Time stamps", "**Timestamps**"] {
            let text = format!("{header}\n(00:10) A\nSummary line");
            let html = render_description(&text);
            assert!(
                html.contains("<h4>Extended description</h4>"),
                "no injection for {header}"
            );
        }
    }
}
