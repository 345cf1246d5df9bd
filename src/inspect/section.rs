// src/inspect/section.rs
// Routing from a clicked card path to the rendered tree that should receive
// the highlight, plus the remap from the card's legacy display path into the
// form the evolution tree actually renders.

/// The three payload trees a detail view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Entry,
    Species,
    Evolution,
}

/// Paths mentioning the evolution graph route to the evolution tree; paths
/// mentioning species data route to the species tree; everything else
/// addresses the entry payload itself.
pub fn section_for_path(path: &str) -> Section {
    if path.contains("evolution_chain") {
        Section::Evolution
    } else if path.contains("species") {
        Section::Species
    } else {
        Section::Entry
    }
}

/// The card emits evolution paths prefixed with `evolution_chain.` for
/// display, but the evolution tree renders the chain payload directly, whose
/// root key is `chain`.
pub fn canonical_tree_path(path: &str) -> String {
    path.replace("evolution_chain.chain.evolves_to", "chain.evolves_to")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_by_path_content() {
        assert_eq!(section_for_path("types[1].type.name"), Section::Entry);
        assert_eq!(section_for_path("height"), Section::Entry);
        assert_eq!(
            section_for_path("evolution_chain.chain.evolves_to[0].species.name"),
            Section::Evolution
        );
        // The evolution marker wins even though the path also says species.
        assert_eq!(
            section_for_path("evolution_chain.chain.evolves_to[0].species.url"),
            Section::Evolution
        );
    }

    #[test]
    fn test_legacy_prefix_remap() {
        assert_eq!(
            canonical_tree_path("evolution_chain.chain.evolves_to[1].species.name"),
            "chain.evolves_to[1].species.name"
        );
        // Entry paths pass through untouched.
        assert_eq!(canonical_tree_path("stats[0].base_stat"), "stats[0].base_stat");
    }
}
