//! Re-apply the extended-description heuristic across the whole catalog.

use tracing::{debug, info};

use castpress_markup::{ExtendedHeadingPolicy, inject_extended_heading};
use castpress_shared::Catalog;

/// Outcome of a restore pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreReport {
    /// Episodes examined (the full catalog).
    pub processed: usize,
    /// Episodes whose description actually gained the heading marker.
    pub changed: usize,
}

/// Label the trailing summary paragraph of every episode description.
///
/// Idempotent: descriptions already carrying the `Extended description`
/// marker pass through unchanged, so the pass can be re-run safely.
pub fn restore_descriptions(catalog: &mut Catalog, policy: ExtendedHeadingPolicy) -> RestoreReport {
    let mut changed = 0;

    for episode in &mut catalog.episodes {
        let labeled = inject_extended_heading(&episode.description, policy);
        if labeled != episode.description {
            debug!(id = %episode.id, "extended-description heading injected");
            episode.description = labeled;
            changed += 1;
        }
    }

    let report = RestoreReport {
        processed: catalog.len(),
        changed,
    };
    info!(
        processed = report.processed,
        changed = report.changed,
        %policy,
        "restore pass complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use castpress_shared::{Episode, EpisodeId};

    fn catalog_with(descriptions: &[&str]) -> Catalog {
        Catalog {
            episodes: descriptions
                .iter()
                .enumerate()
                .map(|(i, d)| Episode {
                    id: EpisodeId::new(format!("e{i}")),
                    title: format!("Episode {i}"),
                    description: (*d).into(),
                    release_date: String::new(),
                    duration_minutes: 0.0,
                    spotify_url: String::new(),
                })
                .collect(),
        }
    }

    const LONG_SUMMARY: &str = "A closing reflection on deliberate practice and the slow \
                                compounding of small creative wins over many years of work";

    #[test]
    fn labels_unlabeled_descriptions() {
        let unlabeled = format!("(00:00) Intro\n\n{LONG_SUMMARY}");
        let mut catalog = catalog_with(&[unlabeled.as_str()]);
        let report = restore_descriptions(&mut catalog, ExtendedHeadingPolicy::Strict);

        assert_eq!(report.processed, 1);
        assert_eq!(report.changed, 1);
        assert!(catalog.episodes[0]
            .description
            .contains("**Extended description:**"));
    }

    #[test]
    fn rerun_changes_nothing() {
        let unlabeled = format!("(00:00) Intro\n\n{LONG_SUMMARY}");
        let mut catalog = catalog_with(&[unlabeled.as_str(), "short"]);
        restore_descriptions(&mut catalog, ExtendedHeadingPolicy::Strict);
        let after_first = catalog.clone();

        let report = restore_descriptions(&mut catalog, ExtendedHeadingPolicy::Strict);
        assert_eq!(report.changed, 0);
        assert_eq!(catalog, after_first);
    }

    #[test]
    fn counts_only_changed_episodes() {
        let unlabeled = format!("Intro paragraph\n\n{LONG_SUMMARY}");
        let mut catalog = catalog_with(&[
            unlabeled.as_str(),
            "Already has Extended description in it",
            "Intro\n\n- bullet ending, never labeled",
        ]);
        let report = restore_descriptions(&mut catalog, ExtendedHeadingPolicy::Strict);

        assert_eq!(report.processed, 3);
        assert_eq!(report.changed, 1);
    }
}
