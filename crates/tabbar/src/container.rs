use crate::bar::TabBar;
use crate::registry::TabRegistry;
use crate::strip::TabStrip;
use leptos::logging::log;
use leptos::prelude::*;

/// Read handle to the container's current selection, provided to descendants
/// so panes can derive their own visibility.
#[derive(Clone, Copy)]
pub struct TabSelection(pub Signal<usize>);

/// Stacks its children and overlays the floating bottom bar.
///
/// The selection is a controlled input: the container never writes it, it only
/// runs `on_select` with the tapped position and lets the owner update the
/// signal it passed in.
#[component]
pub fn TabBarContainer(
    /// Position of the active tab, owned by the caller.
    #[prop(into)]
    selected: Signal<usize>,
    /// Invoked with the tapped item's position, once per tap.
    on_select: Callback<usize>,
    children: Children,
) -> impl IntoView {
    let registry = TabRegistry::new();
    provide_context(registry);
    provide_context(TabSelection(selected));

    // Shows the placeholder pair until the first declaration lands, then
    // mirrors whatever the panes declared.
    let strip = RwSignal::new(TabStrip::new());
    Effect::new(move |_| {
        let declared = registry.declared();
        if !declared.is_empty() {
            log!("tab bar: {} item(s) declared", declared.len());
        }
        strip.update(|s| s.apply(&declared));
    });

    view! {
        <div class="tab-layer">
            <div class="tab-layer__content">{children()}</div>
            <TabBar strip=strip selected=selected on_select=on_select />
        </div>
    }
}
