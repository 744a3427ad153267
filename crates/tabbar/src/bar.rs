use crate::icons::icon;
use crate::item::TabItem;
use crate::strip::{pill_geometry, TabStrip};
use leptos::prelude::*;

/// The floating bar itself: one button per item plus the sliding highlight.
#[component]
pub fn TabBar(
    strip: RwSignal<TabStrip>,
    #[prop(into)] selected: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let pill_style = move || {
        let count = strip.with(|s| s.len());
        pill_geometry(selected.get(), count).to_style()
    };

    view! {
        <nav class="tab-bar">
            <div class="tab-bar__pill" style=pill_style></div>
            <For
                each=move || {
                    strip.with(|s| {
                        s.items().iter().cloned().enumerate().collect::<Vec<_>>()
                    })
                }
                key=|(index, item)| (*index, item.id)
                children=move |(index, item)| {
                    view! {
                        <TabBarButton index=index item=item selected=selected on_select=on_select />
                    }
                }
            />
        </nav>
    }
}

#[component]
fn TabBarButton(
    index: usize,
    item: TabItem,
    #[prop(into)] selected: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let is_active = Memo::new(move |_| selected.get() == index);

    view! {
        <button
            class="tab-bar__item"
            class=("tab-bar__item--active", is_active)
            on:click=move |_| on_select.run(index)
        >
            <span class="tab-bar__icon">{icon(&item.icon)}</span>
            <span class="tab-bar__label">{item.text}</span>
        </button>
    }
}
