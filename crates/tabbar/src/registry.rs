use crate::item::TabItem;
use leptos::prelude::*;
use uuid::Uuid;

/// Order-preserving collector for tab declarations.
///
/// [`crate::TabBarContainer`] provides one via context before composing its
/// children; each pane appends its own [`TabItem`] while the child tree is
/// being built, so the collected order is the document order of the panes.
#[derive(Clone, Copy)]
pub struct TabRegistry {
    items: RwSignal<Vec<TabItem>>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Appends one declaration. Duplicates are allowed.
    pub fn register(&self, item: TabItem) {
        self.items.update(|items| items.push(item));
    }

    /// Removes the declaration with the given id, keeping the order of the
    /// rest. A no-op for unknown ids. Panes call this from `on_cleanup` so a
    /// pane leaving the tree drops its bar entry instead of leaving it stale.
    pub fn deregister(&self, id: Uuid) {
        self.items.update(|items| {
            if let Some(pos) = items.iter().position(|item| item.id == id) {
                items.remove(pos);
            }
        });
    }

    /// Reactive read of everything declared so far.
    pub fn declared(&self) -> Vec<TabItem> {
        self.items.get()
    }

    /// Non-reactive snapshot, for inspection outside the reactive graph.
    pub fn declared_untracked(&self) -> Vec<TabItem> {
        self.items.get_untracked()
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of the nearest enclosing [`crate::TabBarContainer`].
pub fn use_tab_registry() -> TabRegistry {
    use_context::<TabRegistry>().expect("TabRegistry context not found")
}
