// src/catalog/evolution.rs
// Depth-first walk over the shared evolution chain. The same tree backs every
// species that appears in it, so matching on the target name has to continue
// into grandchildren even past non-matching nodes.

use crate::api::types::{ChainLink, EvolutionDetail};

/// An immediate successor of the target species, not yet resolved to a full
/// entry. `detail` is the first transition descriptor upstream listed.
#[derive(Debug, Clone)]
pub struct PendingEvolution {
    pub name: String,
    pub detail: Option<EvolutionDetail>,
}

/// Every immediate child of each node whose species matches `target`,
/// in graph (preorder) order.
pub fn direct_evolutions_of(chain: &ChainLink, target: &str) -> Vec<PendingEvolution> {
    let mut out = Vec::new();
    walk(chain, target, &mut out);
    out
}

fn walk(link: &ChainLink, target: &str, out: &mut Vec<PendingEvolution>) {
    for child in &link.evolves_to {
        if link.species.name == target {
            out.push(PendingEvolution {
                name: child.species.name.clone(),
                detail: child.evolution_details.first().cloned(),
            });
        }
        walk(child, target, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ChainLink, NamedRef};

    fn link(name: &str, evolves_to: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            is_baby: false,
            species: NamedRef {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{name}/"),
            },
            evolves_to,
            evolution_details: Vec::new(),
        }
    }

    // bulbasaur -> ivysaur -> venusaur
    fn linear_chain() -> ChainLink {
        link("bulbasaur", vec![link("ivysaur", vec![link("venusaur", vec![])])])
    }

    #[test]
    fn test_root_species_yields_first_stage() {
        let found = direct_evolutions_of(&linear_chain(), "bulbasaur");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "ivysaur");
    }

    #[test]
    fn test_mid_chain_species_found_past_non_matching_root() {
        // The walk must recurse through bulbasaur even though it doesn't match.
        let found = direct_evolutions_of(&linear_chain(), "ivysaur");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "venusaur");
    }

    #[test]
    fn test_terminal_species_has_no_evolutions() {
        assert!(direct_evolutions_of(&linear_chain(), "venusaur").is_empty());
    }

    #[test]
    fn test_species_absent_from_chain() {
        assert!(direct_evolutions_of(&linear_chain(), "pikachu").is_empty());
    }

    #[test]
    fn test_branching_chain_preserves_graph_order() {
        // eevee branches into many successors; all are immediate children.
        let chain = link(
            "eevee",
            vec![
                link("vaporeon", vec![]),
                link("jolteon", vec![]),
                link("flareon", vec![]),
            ],
        );
        let found = direct_evolutions_of(&chain, "eevee");
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["vaporeon", "jolteon", "flareon"]);
    }
}
