use crate::sbom_aggregation::domain::Component;
use std::collections::HashSet;

/// Deduplicator - Drops repeated components by purl
///
/// The purl string is the identity of a component; the first occurrence
/// wins and later duplicates are dropped. Components with no purl carry no
/// identity and are always retained, even when several of them look alike.
pub struct Deduplicator;

impl Deduplicator {
    pub fn dedupe(components: Vec<Component>) -> Vec<Component> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique = Vec::with_capacity(components.len());

        for comp in components {
            match comp.purl.as_deref() {
                Some(purl) if !purl.is_empty() => {
                    if seen.insert(purl.to_string()) {
                        unique.push(comp);
                    }
                }
                _ => unique.push(comp),
            }
        }

        unique
    }
}
