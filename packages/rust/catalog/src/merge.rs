//! Merge manually edited descriptions into the canonical catalog.

use std::collections::HashMap;

use tracing::{debug, info};

use castpress_shared::{Catalog, Episode, EpisodeId};

/// Outcome of a merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Episodes whose description was overwritten by the overlay.
    pub updated: usize,
    /// Episodes in the canonical catalog (unchanged by the merge).
    pub total: usize,
}

/// Overwrite canonical descriptions with overlay edits, matched by id.
///
/// Only the `description` field is merged. Canonical episodes with no
/// overlay counterpart are left untouched, overlay ids with no canonical
/// counterpart are silently ignored, and the episode count and order never
/// change.
pub fn merge_descriptions(canonical: &mut Catalog, overlay: &Catalog) -> MergeReport {
    let edits: HashMap<&EpisodeId, &Episode> =
        overlay.episodes.iter().map(|ep| (&ep.id, ep)).collect();

    let mut updated = 0;
    for episode in &mut canonical.episodes {
        if let Some(edited) = edits.get(&episode.id) {
            episode.description = edited.description.clone();
            updated += 1;
            debug!(id = %episode.id, "description overwritten from overlay");
        }
    }

    let report = MergeReport {
        updated,
        total: canonical.len(),
    };
    info!(updated = report.updated, total = report.total, "overlay merged");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, description: &str) -> Episode {
        Episode {
            id: EpisodeId::new(id),
            title: format!("Episode {id}"),
            description: description.into(),
            release_date: "2024-03-01".into(),
            duration_minutes: 30.0,
            spotify_url: format!("https://open.spotify.com/episode/{id}"),
        }
    }

    #[test]
    fn overwrites_only_matched_descriptions() {
        let mut canonical = Catalog {
            episodes: vec![episode("e1", "old"), episode("e2", "untouched")],
        };
        let overlay = Catalog {
            episodes: vec![episode("e1", "new text")],
        };

        let report = merge_descriptions(&mut canonical, &overlay);

        assert_eq!(report.updated, 1);
        assert_eq!(canonical.episodes[0].description, "new text");
        assert_eq!(canonical.episodes[1].description, "untouched");
    }

    #[test]
    fn preserves_length_and_order() {
        let mut canonical = Catalog {
            episodes: vec![
                episode("e3", "c"),
                episode("e1", "a"),
                episode("e2", "b"),
            ],
        };
        let overlay = Catalog {
            episodes: vec![episode("e2", "B"), episode("e1", "A")],
        };

        merge_descriptions(&mut canonical, &overlay);

        let ids: Vec<&str> = canonical.episodes.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e3", "e1", "e2"]);
        assert_eq!(canonical.len(), 3);
    }

    #[test]
    fn unmatched_overlay_ids_are_ignored() {
        let mut canonical = Catalog {
            episodes: vec![episode("e1", "old")],
        };
        let overlay = Catalog {
            episodes: vec![episode("e9", "orphan edit")],
        };

        let report = merge_descriptions(&mut canonical, &overlay);

        assert_eq!(report.updated, 0);
        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical.episodes[0].description, "old");
    }

    #[test]
    fn other_overlay_fields_are_not_merged() {
        let mut canonical = Catalog {
            episodes: vec![episode("e1", "old")],
        };
        let mut edited = episode("e1", "new");
        edited.title = "Renamed".into();
        edited.duration_minutes = 99.0;
        let overlay = Catalog {
            episodes: vec![edited],
        };

        merge_descriptions(&mut canonical, &overlay);

        assert_eq!(canonical.episodes[0].description, "new");
        assert_eq!(canonical.episodes[0].title, "Episode e1");
        assert_eq!(canonical.episodes[0].duration_minutes, 30.0);
    }
}
