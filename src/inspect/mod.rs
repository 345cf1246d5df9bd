// src/inspect/mod.rs
// Path-addressable JSON inspection: rendered trees for the payloads behind a
// card, with click-to-highlight linkage between card elements and the JSON
// fields that produced them.

pub mod highlight;
pub mod path;
pub mod section;
pub mod tree;

pub use highlight::{Highlighter, PathHighlight};
pub use path::{JsonPath, PathSegment};
pub use section::{canonical_tree_path, section_for_path, Section};
pub use tree::{JsonNode, JsonTree, NodeKind};

use serde_json::Value;
use tracing::debug;

/// The detail view's JSON side: one rendered tree per payload section and
/// the shared highlight state. Card clicks land here.
pub struct DetailInspector {
    entry_tree: JsonTree,
    species_tree: Option<JsonTree>,
    evolution_tree: Option<JsonTree>,
    highlighter: Highlighter,
}

impl DetailInspector {
    pub fn new(entry_payload: &Value) -> Self {
        Self {
            entry_tree: JsonTree::render(entry_payload),
            species_tree: None,
            evolution_tree: None,
            highlighter: Highlighter::new(),
        }
    }

    /// Species metadata arrives after the entry; render it when it does.
    pub fn set_species(&mut self, payload: &Value) {
        self.species_tree = Some(JsonTree::render(payload));
    }

    pub fn set_evolution(&mut self, payload: &Value) {
        self.evolution_tree = Some(JsonTree::render(payload));
    }

    pub fn tree(&self, section: Section) -> Option<&JsonTree> {
        match section {
            Section::Entry => Some(&self.entry_tree),
            Section::Species => self.species_tree.as_ref(),
            Section::Evolution => self.evolution_tree.as_ref(),
        }
    }

    /// A card element was clicked: route its declared path to the right
    /// tree, remap the legacy display form, and highlight. Unroutable or
    /// absent paths are ignored.
    pub async fn on_element_click(&mut self, path: &str, description: &str) {
        let section = section_for_path(path);
        let tree_path = canonical_tree_path(path);
        debug!(%path, %tree_path, ?section, description, "card element clicked");

        let tree = match section {
            Section::Entry => &self.entry_tree,
            Section::Species => match &self.species_tree {
                Some(tree) => tree,
                None => return,
            },
            Section::Evolution => match &self.evolution_tree {
                Some(tree) => tree,
                None => return,
            },
        };
        self.highlighter.highlight(tree, section, &tree_path).await;
    }

    pub async fn current_highlight(&self) -> Option<PathHighlight> {
        self.highlighter.current().await
    }

    pub async fn take_scroll_request(&self) -> Option<PathHighlight> {
        self.highlighter.take_scroll_request().await
    }

    pub async fn clear_highlight(&mut self) {
        self.highlighter.clear().await;
    }
}
