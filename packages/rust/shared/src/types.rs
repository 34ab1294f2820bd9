//! Core domain types for the castpress episode catalog.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EpisodeId
// ---------------------------------------------------------------------------

/// Stable episode identifier, the join key between catalog datasets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(pub String);

impl EpisodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

/// One podcast episode record as stored in the catalog JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Stable identifier.
    pub id: EpisodeId,
    /// Display title.
    pub title: String,
    /// Free-text description following the informal conventions the
    /// markup crate knows how to render (headers, bullets, timestamps).
    #[serde(default)]
    pub description: String,
    /// ISO 8601 release date (`YYYY-MM-DD`).
    #[serde(default)]
    pub release_date: String,
    /// Episode length in minutes (fractional upstream, rounded for display).
    #[serde(default)]
    pub duration_minutes: f64,
    /// Listen link.
    #[serde(default)]
    pub spotify_url: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The `{ "episodes": [...] }` root of every catalog file.
///
/// Episodes are an ordered sequence; lookups are linear scans by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub episodes: Vec<Episode>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Linear scan by id.
    pub fn find(&self, id: &EpisodeId) -> Option<&Episode> {
        self.episodes.iter().find(|ep| &ep.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_episode() -> Episode {
        Episode {
            id: EpisodeId::new("e1"),
            title: "Breaking the Creativity Myth".into(),
            description: "Key Takeaways:\n- 🚀 **The Myth:** busted".into(),
            release_date: "2024-01-05".into(),
            duration_minutes: 42.5,
            spotify_url: "https://open.spotify.com/episode/e1".into(),
        }
    }

    #[test]
    fn episode_roundtrip() {
        let ep = sample_episode();
        let json = serde_json::to_string_pretty(&ep).expect("serialize");
        let parsed: Episode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, ep);
    }

    #[test]
    fn episode_id_serializes_transparent() {
        let json = serde_json::to_string(&EpisodeId::new("e7")).expect("serialize");
        assert_eq!(json, "\"e7\"");
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let json = r#"{"id": "e2", "title": "Untitled Session"}"#;
        let ep: Episode = serde_json::from_str(json).expect("deserialize");
        assert_eq!(ep.description, "");
        assert_eq!(ep.duration_minutes, 0.0);
    }

    #[test]
    fn catalog_find_by_id() {
        let catalog = Catalog {
            episodes: vec![sample_episode()],
        };
        assert!(catalog.find(&EpisodeId::new("e1")).is_some());
        assert!(catalog.find(&EpisodeId::new("missing")).is_none());
    }

    #[test]
    fn catalog_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/catalog.fixture.json")
            .expect("read fixture");
        let parsed: Catalog = serde_json::from_str(&fixture).expect("deserialize fixture catalog");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.episodes[0].id, EpisodeId::new("ep-001"));
    }

    #[test]
    fn overlay_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/overlay.fixture.json")
            .expect("read fixture");
        let parsed: Catalog = serde_json::from_str(&fixture).expect("deserialize fixture overlay");
        assert_eq!(parsed.len(), 1);
    }
}
