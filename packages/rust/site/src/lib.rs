//! Static HTML fragments for the episode site.
//!
//! Episode cards and modal bodies are generated ahead of time from the
//! catalog; the page itself only wires up click handlers. Markup mirrors
//! the published site's class names so the existing stylesheet applies.

use chrono::NaiveDate;
use tracing::debug;

use castpress_markup::{extract_takeaways, render_description};
use castpress_shared::{Catalog, Episode};

// ---------------------------------------------------------------------------
// Date formatting
// ---------------------------------------------------------------------------

/// Release-date display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// "January 5, 2024" — modal meta line.
    Long,
    /// "Jan 5, 2024" — card meta row.
    Short,
}

/// Format an ISO `YYYY-MM-DD` release date for display.
///
/// Empty input degrades to "Recently"; anything unparseable is shown as-is.
pub fn format_release_date(raw: &str, style: DateStyle) -> String {
    if raw.is_empty() {
        return "Recently".to_string();
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => match style {
            DateStyle::Long => date.format("%B %-d, %Y").to_string(),
            DateStyle::Short => date.format("%b %-d, %Y").to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// Render one episode preview card.
pub fn episode_card(episode: &Episode) -> String {
    let date = format_release_date(&episode.release_date, DateStyle::Short);
    let minutes = episode.duration_minutes.round() as i64;
    let title = escape_html(&episode.title);
    let listen_url = escape_html(&episode.spotify_url);

    let takeaways = extract_takeaways(&episode.description);
    let takeaways_html = if takeaways.is_empty() {
        String::new()
    } else {
        let items: String = takeaways
            .iter()
            .map(|t| format!("<li>{t}</li>"))
            .collect();
        format!(
            "<div class=\"takeaways-preview\"><ul class=\"takeaways-list\">{items}</ul></div>"
        )
    };

    format!(
        "<article class=\"episode-card fade-in-up\" data-episode-id=\"{id}\">\
         <div class=\"episode-content\">\
         <div class=\"episode-meta\">\
         <span class=\"episode-date\">{date}</span>\
         <span class=\"episode-duration\">{minutes} min</span>\
         </div>\
         <h3 class=\"episode-title\"><a href=\"#\" class=\"modal-trigger\">{title}</a></h3>\
         {takeaways_html}\
         <button class=\"read-more-btn modal-trigger\">Read Full Description</button>\
         <div class=\"episode-footer\">\
         <a href=\"{listen_url}\" target=\"_blank\" class=\"listen-link\"><span>▶</span> Listen</a>\
         </div>\
         </div>\
         </article>",
        id = escape_html(episode.id.as_str()),
    )
}

/// Render the full-description modal body for one episode.
pub fn modal_body(episode: &Episode) -> String {
    let date = format_release_date(&episode.release_date, DateStyle::Long);
    let minutes = episode.duration_minutes.round() as i64;
    let title = escape_html(&episode.title);
    let listen_url = escape_html(&episode.spotify_url);
    let description = render_description(&episode.description);

    format!(
        "<h2>{title}</h2>\
         <div class=\"modal-meta\">{date} • {minutes} min listen</div>\
         <div class=\"modal-desc\">{description}</div>\
         <a href=\"{listen_url}\" target=\"_blank\" class=\"btn btn-primary\">Listen on Spotify</a>"
    )
}

/// Render the episode grid: the first `limit` cards, in catalog order.
///
/// The home page caps the grid (3 by default); the archive page passes the
/// full episode count.
pub fn render_grid(catalog: &Catalog, limit: usize) -> String {
    let cards: Vec<String> = catalog
        .episodes
        .iter()
        .take(limit)
        .map(episode_card)
        .collect();

    debug!(rendered = cards.len(), total = catalog.len(), "grid rendered");
    cards.join("\n")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Escape text for interpolation into HTML content or attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
