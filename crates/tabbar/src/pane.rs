use crate::container::TabSelection;
use crate::item::TabItem;
use crate::registry::use_tab_registry;
use crate::strip::pane_opacity;
use leptos::prelude::*;

/// Pane wrapper implementing the usual visibility convention: the pane stays
/// mounted and toggles its opacity against the container's selection.
///
/// Declares `item` on the enclosing container's registry while the child tree
/// is composed, which is what puts an entry in the bar, and drops it again on
/// cleanup when the pane leaves the tree. Callers that want different
/// visibility behavior can register and deregister through
/// [`use_tab_registry`](crate::use_tab_registry) directly and wrap their
/// content themselves.
#[component]
pub fn TabPane(
    /// Position this pane compares the selection against.
    index: usize,
    /// Bar entry declared for this pane.
    item: TabItem,
    children: Children,
) -> impl IntoView {
    let registry = use_tab_registry();
    let item_id = item.id;
    registry.register(item);
    on_cleanup(move || registry.deregister(item_id));

    let TabSelection(selected) =
        use_context::<TabSelection>().expect("TabSelection context not found");
    let opacity = move || pane_opacity(selected.get(), index).to_string();

    view! {
        <div class="tab-pane" style:opacity=opacity>
            {children()}
        </div>
    }
}
