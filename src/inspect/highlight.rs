// src/inspect/highlight.rs
// Highlight lifecycle: one active (section, path) pair at a time, a one-shot
// scroll request per assignment, and auto-clear after a fixed TTL unless a
// newer assignment lands first.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::HIGHLIGHT_TTL;
use crate::inspect::section::Section;
use crate::inspect::tree::JsonTree;

/// Which rendered tree, and which node within it, is emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHighlight {
    pub section: Section,
    pub path: String,
}

struct ActiveHighlight {
    highlight: PathHighlight,
    scroll_pending: bool,
}

pub struct Highlighter {
    active: Arc<RwLock<Option<ActiveHighlight>>>,
    clear_task: Option<JoinHandle<()>>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            active: Arc::new(RwLock::new(None)),
            clear_task: None,
        }
    }

    /// Mark the node at `path` within `tree`. A path absent from the tree is
    /// a no-op, not an error. Assignment arms one scroll request and
    /// schedules the auto-clear, cancelling any clear still pending from a
    /// previous assignment.
    pub async fn highlight(&mut self, tree: &JsonTree, section: Section, path: &str) {
        if !tree.contains(path) {
            debug!(%path, ?section, "highlight target not in tree; ignoring");
            return;
        }

        if let Some(task) = self.clear_task.take() {
            task.abort();
        }

        *self.active.write().await = Some(ActiveHighlight {
            highlight: PathHighlight {
                section,
                path: path.to_string(),
            },
            scroll_pending: true,
        });

        let slot = Arc::clone(&self.active);
        self.clear_task = Some(tokio::spawn(async move {
            tokio::time::sleep(HIGHLIGHT_TTL).await;
            *slot.write().await = None;
        }));
    }

    pub async fn current(&self) -> Option<PathHighlight> {
        self.active.read().await.as_ref().map(|a| a.highlight.clone())
    }

    /// The scroll-into-view side effect, delivered exactly once per
    /// assignment.
    pub async fn take_scroll_request(&self) -> Option<PathHighlight> {
        let mut active = self.active.write().await;
        let entry = active.as_mut()?;
        if !entry.scroll_pending {
            return None;
        }
        entry.scroll_pending = false;
        Some(entry.highlight.clone())
    }

    pub async fn clear(&mut self) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }
        *self.active.write().await = None;
    }
}

impl Drop for Highlighter {
    fn drop(&mut self) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }
    }
}
